//! Shared pagination state for the admin list screens.

/// One-based pager over a server-side listing with a fixed page size.
///
/// The server contract is `(limit, offset) -> { items, total }`; the pager
/// owns the translation between pages and offsets and the enabled state of
/// the Previous/Next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPager {
    pub page: usize,
    pub page_size: usize,
    pub total: u64,
}

impl ListPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            total: 0,
        }
    }

    pub fn limit(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        ((self.page * self.page_size) as u64) < self.total
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.page -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.page += 1;
        }
    }

    /// Back to page one; used whenever a filter changes.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    /// Index of the first row on the current page, one-based for display.
    pub fn first_row(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            self.offset() as u64 + 1
        }
    }

    /// Index of the last row on the current page, one-based for display.
    pub fn last_row(&self) -> u64 {
        ((self.page * self.page_size) as u64).min(self.total)
    }

    /// Footer label, e.g. "Showing 1 to 10 of 23 customers".
    pub fn range_label(&self, noun: &str) -> String {
        format!(
            "Showing {} to {} of {} {}",
            self.first_row(),
            self.last_row(),
            self.total,
            noun
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_page() {
        let mut pager = ListPager::new(10);
        assert_eq!(pager.offset(), 0);
        pager.total = 45;
        pager.next();
        assert_eq!(pager.page, 2);
        assert_eq!(pager.offset(), 10);
    }

    #[test]
    fn prev_disabled_on_first_page() {
        let mut pager = ListPager::new(10);
        pager.total = 30;
        assert!(!pager.can_prev());
        pager.prev();
        assert_eq!(pager.page, 1);
        pager.next();
        assert!(pager.can_prev());
    }

    #[test]
    fn next_disabled_when_page_covers_total() {
        let mut pager = ListPager::new(10);
        pager.total = 23;
        assert!(pager.can_next());
        pager.next();
        pager.next();
        // page 3 shows rows 21..23, page * limit = 30 >= 23
        assert!(!pager.can_next());
        pager.next();
        assert_eq!(pager.page, 3);

        pager.total = 20;
        pager.page = 2;
        // exact fit: page * limit == total
        assert!(!pager.can_next());
    }

    #[test]
    fn range_label_matches_admin_footer() {
        let mut pager = ListPager::new(10);
        pager.total = 23;
        assert_eq!(pager.range_label("customers"), "Showing 1 to 10 of 23 customers");
        pager.next();
        assert_eq!(pager.range_label("customers"), "Showing 11 to 20 of 23 customers");
        pager.next();
        assert_eq!(pager.range_label("customers"), "Showing 21 to 23 of 23 customers");
    }

    #[test]
    fn empty_listing_label() {
        let pager = ListPager::new(10);
        assert_eq!(pager.range_label("messages"), "Showing 0 to 0 of 0 messages");
        assert!(!pager.can_next());
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut pager = ListPager::new(10);
        pager.total = 100;
        pager.next();
        pager.next();
        pager.reset();
        assert_eq!(pager.page, 1);
        assert_eq!(pager.offset(), 0);
    }
}
