use contracts::customers::CustomerStatus;

use crate::shared::pagination::ListPager;

pub const PAGE_SIZE: usize = 10;

/// Local state of the potential-customers screen: pager plus active
/// filters. The screen owns this exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerListState {
    pub pager: ListPager,
    pub status: Option<CustomerStatus>,
    pub search: String,
}

impl Default for CustomerListState {
    fn default() -> Self {
        Self {
            pager: ListPager::new(PAGE_SIZE),
            status: None,
            search: String::new(),
        }
    }
}

impl CustomerListState {
    /// Changing the status filter always lands back on the first page.
    pub fn set_status(&mut self, status: Option<CustomerStatus>) {
        self.status = status;
        self.pager.reset();
    }

    /// Submitting a search behaves like a filter change.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.pager.reset();
    }

    pub fn search_param(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_change_resets_to_first_page() {
        let mut state = CustomerListState::default();
        state.pager.set_total(50);
        state.pager.next();
        state.pager.next();
        assert_eq!(state.pager.page, 3);

        state.set_status(Some(CustomerStatus::Pending));
        assert_eq!(state.pager.page, 1);
        assert_eq!(state.pager.offset(), 0);
    }

    #[test]
    fn search_change_resets_to_first_page() {
        let mut state = CustomerListState::default();
        state.pager.set_total(50);
        state.pager.next();

        state.set_search("abel".to_string());
        assert_eq!(state.pager.page, 1);
        assert_eq!(state.search_param(), Some("abel"));
    }

    #[test]
    fn blank_search_is_not_sent() {
        let mut state = CustomerListState::default();
        state.set_search("   ".to_string());
        assert_eq!(state.search_param(), None);
    }
}
