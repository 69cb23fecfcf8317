/// Page cursor for the discovery table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub rows_per_page: usize,
    pub total: usize,
}

impl Pager {
    pub fn new(rows_per_page: usize, total: usize) -> Self {
        Self {
            page: 0,
            rows_per_page: rows_per_page.max(1),
            total,
        }
    }

    /// Always at least one page, even when empty.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.rows_per_page).max(1)
    }

    pub fn start_index(&self) -> usize {
        self.page * self.rows_per_page
    }

    /// Index range of the rows on the current page.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.start_index().min(self.total);
        let end = (start + self.rows_per_page).min(self.total);
        start..end
    }

    /// `"1 - 10 of 42"`, `"0 - 0 of 0"` when empty.
    pub fn label(&self) -> String {
        let range = self.range();
        let start = if self.total == 0 { 0 } else { range.start + 1 };
        format!("{} - {} of {}", start, range.end, self.total)
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.page_count()
    }

    pub fn first(self) -> Self {
        Self { page: 0, ..self }
    }

    pub fn prev(self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self
        }
    }

    pub fn next(self) -> Self {
        Self {
            page: (self.page + 1).min(self.page_count() - 1),
            ..self
        }
    }

    pub fn last(self) -> Self {
        Self {
            page: self.page_count() - 1,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let pager = Pager::new(10, 0);
        assert_eq!(pager.page_count(), 1);
        assert_eq!(pager.label(), "0 - 0 of 0");
        assert!(pager.is_first() && pager.is_last());
        assert_eq!(pager.next(), pager);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let pager = Pager::new(10, 25);
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.label(), "1 - 10 of 25");

        let last = pager.last();
        assert_eq!(last.page, 2);
        assert_eq!(last.range(), 20..25);
        assert_eq!(last.label(), "21 - 25 of 25");
        assert_eq!(last.next().page, 2);
        assert_eq!(last.prev().page, 1);
        assert_eq!(last.first().prev().page, 0);
    }
}
