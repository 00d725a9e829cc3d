//! 列表页面控制器

use std::future::Future;

use serde_json::Value;

use crate::controllers::{LoadState, RequestGeneration, RequestToken};
use crate::error::CoreResult;
use crate::services::ResourceApi;
use crate::types::Envelope;

/// Fetch a whole collection and unwrap its envelope.
pub async fn fetch_list<T, A>(api: &A) -> CoreResult<Vec<T>>
where
    T: Send + Sync + 'static,
    A: ResourceApi<T> + ?Sized,
{
    Ok(api.get_all().await?.data_or_default())
}

/// What the page should do after a delete completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The API accepted the delete; reload the whole list.
    Reload,
    /// The delete failed (already notified); keep the current rows.
    Failed,
    /// The page was left meanwhile; ignore.
    Stale,
}

/// Row cursor, clamped to the number of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// 选择上一项
    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// 选择下一项
    pub fn next(&mut self, len: usize) {
        if len > 0 && self.index < len - 1 {
            self.index += 1;
        }
    }

    /// 选择第一项
    pub fn first(&mut self) {
        self.index = 0;
    }

    /// 选择最后一项
    pub fn last(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }

    /// Keep the cursor inside `len` rows after the rows changed.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }
}

/// Controller of a simple list page (groups, public projects).
///
/// Entering the page and every reload go through [`begin_load`](Self::begin_load),
/// which switches to `Loading` and invalidates older requests.
///
/// Deletes are checked against `visits` instead, which only moves when the
/// page is left: a reload started while a delete is in flight must not
/// swallow the reload that delete asks for.
#[derive(Debug)]
pub struct ListController<T> {
    state: LoadState<Vec<T>>,
    selection: Selection,
    generation: RequestGeneration,
    visits: RequestGeneration,
}

impl<T> ListController<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            selection: Selection::default(),
            generation: RequestGeneration::new(),
            visits: RequestGeneration::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &LoadState<Vec<T>> {
        &self.state
    }

    /// Loaded rows; empty while loading or after an error.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.state.data().map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        self.items().get(self.selection.index())
    }

    pub fn select_previous(&mut self) {
        self.selection.previous();
    }

    pub fn select_next(&mut self) {
        let len = self.items().len();
        self.selection.next(len);
    }

    pub fn select_first(&mut self) {
        self.selection.first();
    }

    pub fn select_last(&mut self) {
        let len = self.items().len();
        self.selection.last(len);
    }

    /// Shared generation, for background tasks.
    #[must_use]
    pub fn generation(&self) -> &RequestGeneration {
        &self.generation
    }

    /// Enter `Loading` and return the token the fetch must carry back.
    pub fn begin_load(&mut self) -> RequestToken {
        self.state = LoadState::Loading;
        self.generation.next_token()
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when the
    /// token is stale.
    pub fn finish_load(&mut self, token: RequestToken, result: CoreResult<Vec<T>>) -> bool {
        if !self.generation.is_current(token) {
            log::debug!("dropping stale list result (token {})", token.value());
            return false;
        }
        match result {
            Ok(items) => {
                self.selection.clamp(items.len());
                self.state = LoadState::Loaded(items);
            }
            Err(e) => {
                self.state = LoadState::Error(e.user_message());
            }
        }
        true
    }

    /// Token for a delete. Stays valid across reloads, until the page is left.
    #[must_use]
    pub fn begin_delete(&self) -> RequestToken {
        self.visits.current_token()
    }

    /// Decide what follows a delete. The rows are never removed locally;
    /// a successful delete asks for a full reload.
    pub fn finish_delete(
        &mut self,
        token: RequestToken,
        result: CoreResult<Envelope<Value>>,
    ) -> DeleteOutcome {
        delete_outcome(&self.visits, token, result)
    }

    /// Page left: every outstanding request becomes stale.
    pub fn leave(&mut self) {
        self.generation.invalidate();
        self.visits.invalidate();
    }

    /// Load the list from `fetch`, in place.
    pub async fn load_from<F>(&mut self, fetch: F)
    where
        F: Future<Output = CoreResult<Vec<T>>>,
    {
        let token = self.begin_load();
        let result = fetch.await;
        self.finish_load(token, result);
    }
}

impl<T> Default for ListController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> ListController<T> {
    /// Load the list through `api`, in place.
    pub async fn load<A>(&mut self, api: &A)
    where
        A: ResourceApi<T> + ?Sized,
    {
        self.load_from(fetch_list(api)).await;
    }

    /// Delete `id` and reload on success.
    pub async fn delete<A>(&mut self, api: &A, id: i64) -> DeleteOutcome
    where
        A: ResourceApi<T> + ?Sized,
    {
        let token = self.begin_delete();
        let outcome = self.finish_delete(token, api.delete(id).await);
        if outcome == DeleteOutcome::Reload {
            self.load(api).await;
        }
        outcome
    }
}

pub(crate) fn delete_outcome(
    visits: &RequestGeneration,
    token: RequestToken,
    result: CoreResult<Envelope<Value>>,
) -> DeleteOutcome {
    if !visits.is_current(token) {
        log::debug!("dropping stale delete result (token {})", token.value());
        return DeleteOutcome::Stale;
    }
    match result {
        Ok(envelope) if envelope.is_success => {
            log::info!("delete succeeded, reloading list");
            DeleteOutcome::Reload
        }
        Ok(envelope) => {
            log::warn!("delete rejected: {:?}", envelope.message);
            DeleteOutcome::Failed
        }
        Err(e) => {
            if e.is_expected() {
                log::warn!("delete failed: {e}");
            } else {
                log::error!("delete failed: {e}");
            }
            DeleteOutcome::Failed
        }
    }
}
