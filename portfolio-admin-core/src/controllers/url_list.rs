//! URL 列表页面控制器
//!
//! The page needs two collections: URLs and their groups. Rows are the URLs
//! joined with their group, optionally narrowed to one group.

use std::collections::HashMap;

use serde_json::Value;

use crate::controllers::list::{DeleteOutcome, Selection, delete_outcome, fetch_list};
use crate::controllers::{LoadState, RequestGeneration, RequestToken};
use crate::error::CoreResult;
use crate::services::ResourceApi;
use crate::types::{Envelope, Url, UrlGrp, UrlWithGroup};

/// Group filter value that shows every URL.
pub const NO_GROUP_FILTER: i64 = 0;

/// Join every URL with its group.
///
/// A URL whose group is not in `groups` gets a placeholder group carrying
/// the same id, an empty name and `is_enable == false`.
#[must_use]
pub fn join_urls_with_groups(urls: &[Url], groups: &[UrlGrp]) -> Vec<UrlWithGroup> {
    let by_id: HashMap<i64, &UrlGrp> = groups.iter().map(|g| (g.id, g)).collect();
    urls.iter()
        .map(|url| {
            let group = by_id
                .get(&url.id_url_grp)
                .map_or_else(|| UrlGrp::placeholder(url.id_url_grp), |g| (*g).clone());
            UrlWithGroup::new(url, group)
        })
        .collect()
}

/// Rows belonging to `group_id`; [`NO_GROUP_FILTER`] keeps all rows.
#[must_use]
pub fn filter_by_group(rows: &[UrlWithGroup], group_id: i64) -> Vec<UrlWithGroup> {
    if group_id == NO_GROUP_FILTER {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.group.id == group_id)
        .cloned()
        .collect()
}

/// Controller of the URL list page.
#[derive(Debug, Default)]
pub struct UrlListController {
    urls: LoadState<Vec<Url>>,
    /// `None` while the group request is pending.
    groups: Option<Vec<UrlGrp>>,
    filter: i64,
    selection: Selection,
    generation: RequestGeneration,
    /// Moves only when the page is left; deletes are checked against it.
    visits: RequestGeneration,
}

impl UrlListController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Joined rows, or the pending/failed state. `Loading` while either
    /// request is outstanding.
    #[must_use]
    pub fn state(&self) -> LoadState<Vec<UrlWithGroup>> {
        match (&self.urls, &self.groups) {
            (LoadState::Error(message), _) => LoadState::Error(message.clone()),
            (LoadState::Loaded(urls), Some(groups)) => {
                LoadState::Loaded(join_urls_with_groups(urls, groups))
            }
            _ => LoadState::Loading,
        }
    }

    /// Rows after the group filter.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<UrlWithGroup> {
        self.state()
            .data()
            .map(|rows| filter_by_group(rows, self.filter))
            .unwrap_or_default()
    }

    /// Groups known to the page (for the filter selector).
    #[must_use]
    pub fn groups(&self) -> &[UrlGrp] {
        self.groups.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn filter(&self) -> i64 {
        self.filter
    }

    /// Set the group filter. Unknown ids are accepted and simply match nothing.
    pub fn set_filter(&mut self, group_id: i64) {
        self.filter = group_id;
        let len = self.visible_rows().len();
        self.selection.clamp(len);
    }

    /// Advance the filter: all → each group in order → all.
    pub fn cycle_filter(&mut self) {
        let ids: Vec<i64> = self.groups().iter().map(|g| g.id).collect();
        let next = match ids.iter().position(|id| *id == self.filter) {
            Some(pos) if pos + 1 < ids.len() => ids[pos + 1],
            Some(_) => NO_GROUP_FILTER,
            None if self.filter == NO_GROUP_FILTER => {
                ids.first().copied().unwrap_or(NO_GROUP_FILTER)
            }
            None => NO_GROUP_FILTER,
        };
        self.set_filter(next);
    }

    /// Name of the group the filter points at.
    #[must_use]
    pub fn filter_label(&self) -> Option<&str> {
        self.groups()
            .iter()
            .find(|g| g.id == self.filter)
            .map(|g| g.name.as_str())
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<UrlWithGroup> {
        self.visible_rows().into_iter().nth(self.selection.index())
    }

    pub fn select_previous(&mut self) {
        self.selection.previous();
    }

    pub fn select_next(&mut self) {
        let len = self.visible_rows().len();
        self.selection.next(len);
    }

    pub fn select_first(&mut self) {
        self.selection.first();
    }

    pub fn select_last(&mut self) {
        let len = self.visible_rows().len();
        self.selection.last(len);
    }

    #[must_use]
    pub fn generation(&self) -> &RequestGeneration {
        &self.generation
    }

    /// Start loading both collections. The returned token goes with both
    /// requests.
    pub fn begin_load(&mut self) -> RequestToken {
        self.urls = LoadState::Loading;
        self.groups = None;
        self.generation.next_token()
    }

    /// Apply the URL request result.
    pub fn finish_urls(&mut self, token: RequestToken, result: CoreResult<Vec<Url>>) -> bool {
        if !self.generation.is_current(token) {
            log::debug!("dropping stale url list (token {})", token.value());
            return false;
        }
        self.urls = match result {
            Ok(urls) => LoadState::Loaded(urls),
            Err(e) => LoadState::Error(e.user_message()),
        };
        self.clamp_selection();
        true
    }

    /// Apply the group request result. A failed group request leaves the
    /// page usable: every URL then shows a placeholder group.
    pub fn finish_groups(&mut self, token: RequestToken, result: CoreResult<Vec<UrlGrp>>) -> bool {
        if !self.generation.is_current(token) {
            log::debug!("dropping stale group list (token {})", token.value());
            return false;
        }
        self.groups = Some(result.unwrap_or_else(|e| {
            log::warn!("failed to load groups for url list: {e}");
            Vec::new()
        }));
        self.clamp_selection();
        true
    }

    #[must_use]
    pub fn begin_delete(&self) -> RequestToken {
        self.visits.current_token()
    }

    pub fn finish_delete(
        &mut self,
        token: RequestToken,
        result: CoreResult<Envelope<Value>>,
    ) -> DeleteOutcome {
        delete_outcome(&self.visits, token, result)
    }

    pub fn leave(&mut self) {
        self.generation.invalidate();
        self.visits.invalidate();
    }

    /// Load both collections concurrently, in place.
    pub async fn load<U, G>(&mut self, urls: &U, groups: &G)
    where
        U: ResourceApi<Url> + ?Sized,
        G: ResourceApi<UrlGrp> + ?Sized,
    {
        let token = self.begin_load();
        let (url_result, group_result) = futures::join!(fetch_list(urls), fetch_list(groups));
        self.finish_urls(token, url_result);
        self.finish_groups(token, group_result);
    }

    /// Delete URL `id` and reload on success.
    pub async fn delete<U, G>(&mut self, urls: &U, groups: &G, id: i64) -> DeleteOutcome
    where
        U: ResourceApi<Url> + ?Sized,
        G: ResourceApi<UrlGrp> + ?Sized,
    {
        let token = self.begin_delete();
        let outcome = self.finish_delete(token, urls.delete(id).await);
        if outcome == DeleteOutcome::Reload {
            self.load(urls, groups).await;
        }
        outcome
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        self.selection.clamp(len);
    }
}
