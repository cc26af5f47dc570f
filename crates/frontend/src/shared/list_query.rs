//! List query controller
//!
//! One instance per list page. Holds the committed filter state, derives
//! the `ListRequest` descriptor from it, and enforces the fetch rules:
//! exactly one in-flight request per distinct descriptor, responses for
//! superseded descriptors discarded.

use contracts::shared::query::{ListRequest, SortOrder};
use leptos::prelude::*;

/// Trailing-edge delay between the last keystroke and the committed
/// search term
pub const SEARCH_DEBOUNCE_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct ListQueryState {
    pub page: usize,
    pub limit: usize,
    /// Committed (already debounced) search term
    pub search: String,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub status: Option<String>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub total_pages: usize,
}

impl ListQueryState {
    pub fn new(limit: usize, sort_field: &str) -> Self {
        Self {
            page: 1,
            limit,
            search: String::new(),
            date_from: None,
            date_to: None,
            status: None,
            sort_field: sort_field.to_string(),
            sort_ascending: false,
            total_pages: 0,
        }
    }

    /// Descriptor of the fetch this state asks for. `total_pages` is
    /// deliberately not part of it, so applying a response does not
    /// produce a new descriptor.
    pub fn request(&self) -> ListRequest {
        ListRequest {
            page: self.page,
            limit: self.limit,
            search: self.search.trim().to_string(),
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            status: self.status.clone(),
            sort: self.sort_field.clone(),
            order: if self.sort_ascending {
                SortOrder::Asc
            } else {
                SortOrder::Desc
            },
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Apply a debounced search term. Filter changes always jump back to
    /// the first page.
    pub fn commit_search(&mut self, term: &str) {
        if self.search != term {
            self.search = term.to_string();
            self.page = 1;
        }
    }

    pub fn set_date_range(&mut self, from: Option<String>, to: Option<String>) {
        let from = from.filter(|v| !v.is_empty());
        let to = to.filter(|v| !v.is_empty());
        if self.date_from != from || self.date_to != to {
            self.date_from = from;
            self.date_to = to;
            self.page = 1;
        }
    }

    /// `None` means "all statuses"
    pub fn set_status(&mut self, status: Option<String>) {
        if self.status != status {
            self.status = status;
            self.page = 1;
        }
    }

    /// Clicking the active column flips direction, any other column
    /// becomes the active one ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}

#[derive(Clone, Copy)]
pub struct ListQueryController {
    pub state: RwSignal<ListQueryState>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    last_issued: StoredValue<Option<ListRequest>>,
}

impl ListQueryController {
    pub fn new(limit: usize, sort_field: &str) -> Self {
        Self {
            state: RwSignal::new(ListQueryState::new(limit, sort_field)),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            last_issued: StoredValue::new(None),
        }
    }

    /// Next descriptor to fetch, or `None` when it matches the one
    /// already issued
    pub fn begin(&self) -> Option<ListRequest> {
        let request = self.state.with_untracked(|s| s.request());
        if self
            .last_issued
            .with_value(|last| last.as_ref() == Some(&request))
        {
            return None;
        }
        Some(self.issue(request))
    }

    /// Reload unconditionally. Mutations call this to invalidate the list
    /// instead of patching rows locally.
    pub fn force(&self) -> ListRequest {
        let request = self.state.with_untracked(|s| s.request());
        self.issue(request)
    }

    /// Stale guard: a response may be applied only while the descriptor it
    /// was issued for still matches the current state
    pub fn is_current(&self, issued: &ListRequest) -> bool {
        self.state.with_untracked(|s| s.request()) == *issued
    }

    pub fn finish_ok(&self, total_pages: usize) {
        self.loading.set(false);
        self.state.update(|s| s.total_pages = total_pages);
    }

    pub fn finish_err(&self, message: String) {
        self.loading.set(false);
        self.error.set(Some(message));
    }

    fn issue(&self, request: ListRequest) -> ListRequest {
        self.last_issued.set_value(Some(request.clone()));
        self.loading.set(true);
        self.error.set(None);
        request
    }
}

/// Generation counter behind the search debounce. Every keystroke arms a
/// new ticket; only the ticket still live after the timeout commits.
#[derive(Clone, Copy, Debug, Default)]
pub struct DebounceGate {
    current: u64,
}

impl DebounceGate {
    pub fn arm(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_live(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_change_resets_page_and_issues_one_fetch() {
        let query = ListQueryController::new(10, "received_at");
        query.state.update(|s| s.set_page(3));
        assert!(query.begin().is_some());
        // Same descriptor again: memoized, no second fetch
        assert!(query.begin().is_none());

        query
            .state
            .update(|s| s.set_status(Some("PENDING".to_string())));
        let issued = query.begin().expect("changed filter must fetch");
        assert_eq!(issued.page, 1);
        assert_eq!(issued.status.as_deref(), Some("PENDING"));
        assert!(query.begin().is_none());
    }

    #[test]
    fn test_applying_a_response_does_not_refetch() {
        let query = ListQueryController::new(10, "received_at");
        assert!(query.begin().is_some());
        query.finish_ok(9);
        assert_eq!(query.state.get_untracked().total_pages, 9);
        assert!(!query.loading.get_untracked());
        // total_pages is not part of the descriptor
        assert!(query.begin().is_none());
    }

    #[test]
    fn test_stale_response_is_detected() {
        let query = ListQueryController::new(10, "received_at");
        let first = query.begin().unwrap();

        // User pages forward while page 1 is still in flight
        query.state.update(|s| s.set_page(2));
        let second = query.begin().unwrap();

        assert!(!query.is_current(&first));
        assert!(query.is_current(&second));
    }

    #[test]
    fn test_debounce_commits_only_the_last_keystroke() {
        let mut gate = DebounceGate::default();
        let mut committed: Vec<&str> = Vec::new();

        let first = gate.arm(); // types "jag"
        let second = gate.arm(); // types "jagad" before the timer fires

        for (ticket, term) in [(first, "jag"), (second, "jagad")] {
            if gate.is_live(ticket) {
                committed.push(term);
            }
        }
        assert_eq!(committed, vec!["jagad"]);
    }

    #[test]
    fn test_commit_search_resets_page_only_on_change() {
        let mut state = ListQueryState::new(10, "received_at");
        state.set_page(4);
        state.commit_search("vvs");
        assert_eq!(state.page, 1);

        state.set_page(4);
        state.commit_search("vvs");
        assert_eq!(state.page, 4, "same term must not reset the page");
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = ListQueryState::new(10, "received_at");
        assert!(!state.sort_ascending);
        state.toggle_sort("received_at");
        assert!(state.sort_ascending);
        state.toggle_sort("jagad_no");
        assert_eq!(state.sort_field, "jagad_no");
        assert!(state.sort_ascending);
    }

    #[test]
    fn test_date_range_normalizes_empty_to_none() {
        let mut state = ListQueryState::new(10, "received_at");
        state.set_page(2);
        state.set_date_range(Some("2025-01-01".to_string()), Some(String::new()));
        assert_eq!(state.date_from.as_deref(), Some("2025-01-01"));
        assert_eq!(state.date_to, None);
        assert_eq!(state.page, 1);
    }
}
