//! Generic paginated list controller.
//!
//! One instance per mounted list view. The committed [`QueryState`] lives in
//! the URL; the controller decodes it on mount (and after back/forward
//! navigation), issues exactly one fetch per committed change, and exposes the
//! result signals the table renders from. Every list page in the application
//! goes through this type instead of wiring its own copy.

pub mod fetch;
pub mod pagination;
pub mod response;
pub mod sort;

use std::collections::BTreeMap;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::layout::nav::{current_search, use_nav, NavContext};
use crate::shared::query_state::QueryState;
use crate::system::auth::context::{use_session, SessionContext};
use response::LoadOutcome;

/// How the endpoint expects the page selection to be spelled. Differs per
/// endpoint with no rule to infer, so it is explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingStyle {
    /// `page=<n>&limit=<size>`
    PageLimit,
    /// `skip=<(n-1)*size>&limit=<size>`
    SkipLimit,
}

#[derive(Debug, Clone, Copy)]
pub struct ListConfig {
    /// Relative endpoint path, e.g. `/api/pharmacies`.
    pub endpoint: &'static str,
    pub page_size: u32,
    pub paging: PagingStyle,
    /// Filter parameter names this page recognizes in the URL.
    pub filter_fields: &'static [&'static str],
    /// Column names this page accepts as sort keys.
    pub sort_fields: &'static [&'static str],
}

/// Error state of the last fetch, for in-page rendering. Unauthenticated is
/// not represented here: it clears the session and the login view takes over.
#[derive(Debug, Clone, PartialEq)]
pub enum ListError {
    Denied {
        message: String,
        reason: Option<String>,
    },
    Failed(String),
}

pub struct ListController<T: 'static> {
    config: ListConfig,
    session: SessionContext,
    nav: NavContext,
    pub query: RwSignal<QueryState>,
    pub items: RwSignal<Vec<T>>,
    pub total_count: RwSignal<u64>,
    pub total_pages: RwSignal<u32>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<ListError>>,
    /// Sequence number of the newest issued request; older completions are
    /// dropped instead of overwriting fresher results.
    seq: StoredValue<u64>,
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Clone + Send + Sync + DeserializeOwned + 'static,
{
    /// Create the controller for a mounting list view: decode the current URL
    /// into the committed query state and issue the initial fetch.
    pub fn mount(config: ListConfig) -> Self {
        let session = use_session();
        let nav = use_nav();
        let initial =
            QueryState::decode(&current_search(), config.filter_fields, config.sort_fields);

        let ctrl = Self {
            config,
            session,
            nav,
            query: RwSignal::new(initial),
            items: RwSignal::new(Vec::new()),
            total_count: RwSignal::new(0),
            total_pages: RwSignal::new(0),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            seq: StoredValue::new(0),
        };

        ctrl.load();

        // Back/forward navigation: the URL changed under us, re-decode and
        // refetch if the committed state actually differs.
        let first_run = StoredValue::new(true);
        Effect::new(move |_| {
            nav.location_epoch.get();
            if first_run.get_value() {
                first_run.set_value(false);
                return;
            }
            let decoded =
                QueryState::decode(&current_search(), config.filter_fields, config.sort_fields);
            if decoded != ctrl.query.get_untracked() {
                ctrl.query.set(decoded);
                ctrl.load();
            }
        });

        ctrl
    }

    fn load(&self) {
        let my_seq = {
            self.seq.update_value(|s| *s += 1);
            self.seq.get_value()
        };

        let Some(jwt) = self.session.jwt() else {
            // The auth gate should have kept this view from mounting; never
            // issue an unauthenticated list read.
            self.session.invalidate();
            return;
        };

        self.is_loading.set(true);
        self.error.set(None);

        let ctrl = *self;
        let qs = self.query.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = fetch::fetch_list::<T>(&ctrl.config, &qs, Some(&jwt)).await;
            if ctrl.seq.get_value() != my_seq {
                // A newer commit superseded this request.
                return;
            }
            ctrl.apply_outcome(qs.page, outcome);
        });
    }

    /// Apply a completed fetch to the result signals. Both error outcomes
    /// reset the items and pagination counters so no stale page window or
    /// count badge renders under the error banner.
    fn apply_outcome(&self, requested_page: u32, outcome: LoadOutcome<response::PageResult<T>>) {
        self.is_loading.set(false);
        match outcome {
            LoadOutcome::Ok(page) => {
                self.items.set(page.items);
                self.total_count.set(page.total_count);
                self.total_pages.set(page.total_pages);
                if page.current_page != requested_page {
                    self.query.update(|q| q.page = page.current_page);
                }
            }
            LoadOutcome::Unauthenticated => {
                if self.session.invalidate() {
                    log::warn!("session rejected by the API, returning to login");
                }
            }
            LoadOutcome::Denied { message, reason } => {
                self.items.set(Vec::new());
                self.total_count.set(0);
                self.total_pages.set(0);
                self.error.set(Some(ListError::Denied { message, reason }));
            }
            LoadOutcome::Failed(message) => {
                self.items.set(Vec::new());
                self.total_count.set(0);
                self.total_pages.set(0);
                self.error.set(Some(ListError::Failed(message)));
            }
        }
    }

    /// Commit a new query state: it becomes the URL, then fetches.
    pub fn commit(&self, next: QueryState) {
        self.nav.write_query(&next.encode());
        self.query.set(next);
        self.load();
    }

    /// The panel's Apply action: the draft filter set wholesale.
    pub fn apply_filters(&self, filters: BTreeMap<String, String>) {
        let next = self.query.get_untracked().with_filters(filters);
        self.commit(next);
    }

    pub fn apply_search(&self, search: String) {
        let next = self.query.get_untracked().with_search(search);
        self.commit(next);
    }

    /// The panel's Clear action: back to the pristine, unfiltered state.
    pub fn clear_filters(&self) {
        self.commit(QueryState::cleared());
    }

    pub fn toggle_sort(&self, field: &str) {
        let current = self.query.get_untracked();
        let next = current.with_sort(sort::toggle_sort(current.sort.as_ref(), field));
        self.commit(next);
    }

    pub fn go_to_page(&self, page: u32) {
        let max = self.total_pages.get_untracked().max(1);
        let next = self.query.get_untracked().with_page(page.clamp(1, max));
        self.commit(next);
    }

    pub fn reload(&self) {
        self.load();
    }
}

#[cfg(test)]
mod tests {
    use super::response::PageResult;
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        name: String,
    }

    const CONFIG: ListConfig = ListConfig {
        endpoint: "/api/rows",
        page_size: 50,
        paging: PagingStyle::PageLimit,
        filter_fields: &["area"],
        sort_fields: &["name"],
    };

    fn controller() -> ListController<Row> {
        ListController {
            config: CONFIG,
            session: SessionContext::seeded(None),
            nav: NavContext {
                active: RwSignal::new("home".to_string()),
                sidebar_open: RwSignal::new(true),
                location_epoch: RwSignal::new(0),
            },
            query: RwSignal::new(QueryState::default()),
            items: RwSignal::new(Vec::new()),
            total_count: RwSignal::new(0),
            total_pages: RwSignal::new(0),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            seq: StoredValue::new(0),
        }
    }

    fn loaded_page() -> LoadOutcome<PageResult<Row>> {
        LoadOutcome::Ok(PageResult {
            items: vec![Row {
                name: "a".to_string(),
            }],
            total_count: 120,
            current_page: 1,
            total_pages: 3,
        })
    }

    #[test]
    fn failed_fetch_resets_the_pagination_counters() {
        let ctrl = controller();
        ctrl.apply_outcome(1, loaded_page());
        assert_eq!(ctrl.total_count.get_untracked(), 120);
        assert_eq!(ctrl.total_pages.get_untracked(), 3);

        ctrl.apply_outcome(1, LoadOutcome::Failed("boom".to_string()));
        assert!(ctrl.items.get_untracked().is_empty());
        assert_eq!(ctrl.total_count.get_untracked(), 0);
        assert_eq!(ctrl.total_pages.get_untracked(), 0);
        assert_eq!(
            ctrl.error.get_untracked(),
            Some(ListError::Failed("boom".to_string()))
        );
    }

    #[test]
    fn denied_fetch_resets_the_pagination_counters() {
        let ctrl = controller();
        ctrl.apply_outcome(1, loaded_page());

        ctrl.apply_outcome(
            1,
            LoadOutcome::Denied {
                message: "Access denied".to_string(),
                reason: None,
            },
        );
        assert!(ctrl.items.get_untracked().is_empty());
        assert_eq!(ctrl.total_count.get_untracked(), 0);
        assert_eq!(ctrl.total_pages.get_untracked(), 0);
    }
}
