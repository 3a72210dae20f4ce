//! URL-query-string codec for list views.
//!
//! The query string of the current location is the single source of truth for
//! a list page's filter / search / sort / page selections. Views never keep a
//! committed copy of their own; they decode on mount (and on back/forward
//! navigation) and encode whenever the user commits a change.

use std::collections::{BTreeMap, HashMap};

use crate::shared::list_controller::sort::{SortDescriptor, SortDirection};

/// Reserved parameter names; everything else is either a recognized filter
/// field or ignored for forward compatibility.
const PARAM_SEARCH: &str = "search";
const PARAM_PAGE: &str = "page";
const PARAM_SORT: &str = "sort";
const PARAM_DIR: &str = "dir";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Committed filter values, keyed by field name. Empty values are never
    /// stored here.
    pub filters: BTreeMap<String, String>,
    pub search: String,
    /// 1-based page number.
    pub page: u32,
    /// At most one sort descriptor is ever active for a page.
    pub sort: Option<SortDescriptor>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filters: BTreeMap::new(),
            search: String::new(),
            page: 1,
            sort: None,
        }
    }
}

impl QueryState {
    /// Decode a location query string. Absent or malformed values fall back
    /// silently: `page` to 1, sort to none. Parameters outside
    /// `filter_fields` / `sort_fields` and the reserved names are ignored.
    pub fn decode(query: &str, filter_fields: &[&str], sort_fields: &[&str]) -> Self {
        let params: HashMap<String, String> =
            serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();

        let mut filters = BTreeMap::new();
        for field in filter_fields {
            if let Some(v) = params.get(*field) {
                if !v.is_empty() {
                    filters.insert((*field).to_string(), v.clone());
                }
            }
        }

        let page = params
            .get(PARAM_PAGE)
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        let sort = params
            .get(PARAM_SORT)
            .filter(|f| sort_fields.contains(&f.as_str()))
            .map(|f| {
                let direction = params
                    .get(PARAM_DIR)
                    .and_then(|d| SortDirection::parse(d))
                    .unwrap_or(SortDirection::Descending);
                SortDescriptor::new(f.clone(), direction)
            });

        Self {
            filters,
            search: params.get(PARAM_SEARCH).cloned().unwrap_or_default(),
            page,
            sort,
        }
    }

    /// Encode into a query string (no leading `?`). Only non-empty fields are
    /// emitted; `page` is omitted at its default of 1, so a pristine state
    /// encodes to an empty string.
    pub fn encode(&self) -> String {
        let mut params: BTreeMap<String, String> = BTreeMap::new();
        for (k, v) in &self.filters {
            if !v.is_empty() {
                params.insert(k.clone(), v.clone());
            }
        }
        if !self.search.is_empty() {
            params.insert(PARAM_SEARCH.to_string(), self.search.clone());
        }
        if let Some(sort) = &self.sort {
            params.insert(PARAM_SORT.to_string(), sort.field.clone());
            params.insert(PARAM_DIR.to_string(), sort.direction.as_str().to_string());
        }
        if self.page > 1 {
            params.insert(PARAM_PAGE.to_string(), self.page.to_string());
        }
        serde_qs::to_string(&params).unwrap_or_default()
    }

    /// Replace the filter set wholesale (the panel's Apply action). Resets the
    /// page, keeps search and sort.
    pub fn with_filters(&self, filters: BTreeMap<String, String>) -> Self {
        let mut next = self.clone();
        next.filters = filters
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .collect();
        next.page = 1;
        next
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.search = search.into();
        next.page = 1;
        next
    }

    pub fn with_sort(&self, sort: Option<SortDescriptor>) -> Self {
        let mut next = self.clone();
        next.sort = sort;
        next.page = 1;
        next
    }

    /// The pristine state the panel's Clear action commits.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Change only the page; everything else is preserved verbatim.
    pub fn with_page(&self, page: u32) -> Self {
        let mut next = self.clone();
        next.page = page.max(1);
        next
    }

    /// Number of committed filter criteria (for the panel badge).
    pub fn active_filter_count(&self) -> usize {
        self.filters.len() + usize::from(!self.search.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILTERS: &[&str] = &["area", "status"];
    const SORTS: &[&str] = &["name", "amount"];

    #[test]
    fn encode_then_decode_round_trips_non_empty_fields() {
        let mut filters = BTreeMap::new();
        filters.insert("area".to_string(), "North Cairo".to_string());
        filters.insert("status".to_string(), "active".to_string());
        let state = QueryState {
            filters,
            search: "panadol 500".to_string(),
            page: 3,
            sort: Some(SortDescriptor::new("amount", SortDirection::Ascending)),
        };

        let decoded = QueryState::decode(&state.encode(), FILTERS, SORTS);
        assert_eq!(decoded, state);
    }

    #[test]
    fn empty_fields_are_omitted_from_the_string() {
        let state = QueryState::default();
        assert_eq!(state.encode(), "");

        let state = state.with_search("aspirin");
        let encoded = state.encode();
        assert!(encoded.contains("search="));
        assert!(!encoded.contains("page="));
        assert!(!encoded.contains("area="));
    }

    #[test]
    fn clearing_a_filter_removes_it_entirely() {
        let mut filters = BTreeMap::new();
        filters.insert("area".to_string(), "Giza".to_string());
        let state = QueryState::default().with_filters(filters);
        assert!(state.encode().contains("area="));

        let mut cleared = BTreeMap::new();
        cleared.insert("area".to_string(), String::new());
        let state = state.with_filters(cleared);
        assert_eq!(state.encode(), "");
    }

    #[test]
    fn filter_search_and_sort_edits_reset_the_page() {
        let state = QueryState::default().with_page(5);
        assert_eq!(state.with_search("x").page, 1);
        assert_eq!(state.with_filters(BTreeMap::new()).page, 1);
        assert_eq!(
            state
                .with_sort(Some(SortDescriptor::new("name", SortDirection::Descending)))
                .page,
            1
        );
    }

    #[test]
    fn page_changes_preserve_everything_else() {
        let state = QueryState::default()
            .with_search("vitamin")
            .with_sort(Some(SortDescriptor::new("name", SortDirection::Ascending)));
        let paged = state.with_page(4);
        assert_eq!(paged.search, state.search);
        assert_eq!(paged.sort, state.sort);
        assert_eq!(paged.filters, state.filters);
        assert_eq!(paged.page, 4);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let decoded = QueryState::decode("page=abc&sort=bogus&dir=up", FILTERS, SORTS);
        assert_eq!(decoded.page, 1);
        assert_eq!(decoded.sort, None);

        let decoded = QueryState::decode("page=0", FILTERS, SORTS);
        assert_eq!(decoded.page, 1);
    }

    #[test]
    fn unrecognized_parameters_are_ignored() {
        let decoded = QueryState::decode("utm_source=mail&area=Giza", FILTERS, SORTS);
        assert_eq!(decoded.filters.get("area").map(String::as_str), Some("Giza"));
        assert_eq!(decoded.filters.len(), 1);
    }

    #[test]
    fn sort_without_direction_defaults_to_descending() {
        let decoded = QueryState::decode("sort=name", FILTERS, SORTS);
        assert_eq!(
            decoded.sort,
            Some(SortDescriptor::new("name", SortDirection::Descending))
        );
    }
}
