//! URL 表单的分组选择器

use crate::controllers::{RequestGeneration, RequestToken};
use crate::error::CoreResult;
use crate::types::UrlGrp;

/// Group list behind the URL form's group selector.
///
/// A failed load leaves the selector empty; the form then cannot pass
/// validation, which tells the user a group is required.
#[derive(Debug, Default)]
pub struct GroupOptions {
    /// `None` while loading.
    groups: Option<Vec<UrlGrp>>,
    generation: RequestGeneration,
}

impl GroupOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.groups.is_none()
    }

    #[must_use]
    pub fn groups(&self) -> &[UrlGrp] {
        self.groups.as_deref().unwrap_or_default()
    }

    /// Name of group `id`, if loaded.
    #[must_use]
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.groups()
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
    }

    #[must_use]
    pub fn generation(&self) -> &RequestGeneration {
        &self.generation
    }

    pub fn begin_load(&mut self) -> RequestToken {
        self.groups = None;
        self.generation.next_token()
    }

    pub fn finish_load(&mut self, token: RequestToken, result: CoreResult<Vec<UrlGrp>>) -> bool {
        if !self.generation.is_current(token) {
            log::debug!("dropping stale group options (token {})", token.value());
            return false;
        }
        self.groups = Some(result.unwrap_or_else(|e| {
            log::warn!("failed to load groups for url form: {e}");
            Vec::new()
        }));
        true
    }

    pub fn leave(&mut self) {
        self.generation.invalidate();
    }

    /// Next choice after `current`: none (0) → each group → none.
    /// `backwards` walks the other way.
    #[must_use]
    pub fn cycle(&self, current: i64, backwards: bool) -> i64 {
        let mut choices: Vec<i64> = vec![0];
        choices.extend(self.groups().iter().map(|g| g.id));
        let len = choices.len();
        let pos = choices.iter().position(|id| *id == current).unwrap_or(0);
        let next = if backwards {
            (pos + len - 1) % len
        } else {
            (pos + 1) % len
        };
        choices[next]
    }
}
