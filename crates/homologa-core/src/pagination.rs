//! Page-slicing helpers for client-side pagination.
//!
//! The backend returns full result sets; pagination happens entirely over
//! the in-memory array. Pages are 1-indexed and the limit is clamped to
//! [1, 100], defaulting to 10.

/// Page parameters for slicing an in-memory result set.
///
/// # Example
///
/// ```
/// use homologa_core::pagination::PageParams;
///
/// let params = PageParams::new(Some(2), Some(10));
/// assert_eq!(params.page(), 2);
/// assert_eq!(params.limit(), 10);
/// assert_eq!(params.offset(), 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PageParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// One page out of a larger result set, with enough metadata to render
/// a "page X of Y (Z total)" footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedView<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl PageParams {
    pub fn new(page: Option<usize>, limit: Option<usize>) -> Self {
        Self { page, limit }
    }

    /// The page number, 1-indexed, defaulting to 1.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Items per page, defaulting to 10 and clamped to [1, 100].
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    /// Number of items skipped before this page.
    pub fn offset(&self) -> usize {
        (self.page() - 1) * self.limit()
    }

    /// Slices one page out of `rows`.
    ///
    /// A page past the end yields an empty page; `total_pages` is at least 1
    /// so an empty result set still renders as "page 1 of 1".
    pub fn slice<T: Clone>(&self, rows: &[T]) -> PagedView<T> {
        let limit = self.limit();
        let total = rows.len();
        let total_pages = total.div_ceil(limit).max(1);
        let start = self.offset().min(total);
        let end = (start + limit).min(total);

        PagedView {
            items: rows[start..end].to_vec(),
            page: self.page(),
            total_pages,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_from_page() {
        let params = PageParams::new(Some(3), Some(25));
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn test_limit_clamped() {
        assert_eq!(PageParams::new(None, Some(0)).limit(), 1);
        assert_eq!(PageParams::new(None, Some(500)).limit(), 100);
        assert_eq!(PageParams::new(None, Some(100)).limit(), 100);
    }

    #[test]
    fn test_page_minimum_is_one() {
        assert_eq!(PageParams::new(Some(0), None).page(), 1);
    }

    #[test]
    fn test_slice_first_page() {
        let rows: Vec<i32> = (0..25).collect();
        let view = PageParams::new(Some(1), Some(10)).slice(&rows);
        assert_eq!(view.items, (0..10).collect::<Vec<_>>());
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.total, 25);
    }

    #[test]
    fn test_slice_last_partial_page() {
        let rows: Vec<i32> = (0..25).collect();
        let view = PageParams::new(Some(3), Some(10)).slice(&rows);
        assert_eq!(view.items, (20..25).collect::<Vec<_>>());
        assert_eq!(view.total_pages, 3);
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let rows: Vec<i32> = (0..5).collect();
        let view = PageParams::new(Some(4), Some(10)).slice(&rows);
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.total, 5);
    }

    #[test]
    fn test_slice_empty_rows() {
        let rows: Vec<i32> = vec![];
        let view = PageParams::new(None, None).slice(&rows);
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.total, 0);
    }

    #[test]
    fn test_slice_exact_page_boundary() {
        let rows: Vec<i32> = (0..20).collect();
        let view = PageParams::new(Some(2), Some(10)).slice(&rows);
        assert_eq!(view.items, (10..20).collect::<Vec<_>>());
        assert_eq!(view.total_pages, 2);
    }
}
