//! Pagination Utilities
//!
//! 1-based page arithmetic over in-memory result sets.

use std::ops::RangeInclusive;

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Items on `page` (1-based). Page 0 and pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Page buttons to show: at most `max_visible`, starting half a window
/// before `current`
pub fn page_window(current: usize, total: usize, max_visible: usize) -> RangeInclusive<usize> {
    let start = current.saturating_sub(max_visible / 2).max(1);
    let end = total.min(start + max_visible.saturating_sub(1));
    start..=end
}

/// Clamp a requested page into `1..=total` (1 when there are no pages)
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifty_items_by_six() {
        let items: Vec<u32> = (1..=50).collect();
        assert_eq!(total_pages(items.len(), 6), 9);
        assert_eq!(page_slice(&items, 1, 6), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(page_slice(&items, 9, 6), &[49, 50]);
        assert!(page_slice(&items, 10, 6).is_empty());
    }

    #[test]
    fn test_page_zero_is_empty() {
        let items = [1, 2, 3];
        assert!(page_slice(&items, 0, 6).is_empty());
    }

    #[test]
    fn test_total_pages_edges() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(7, 0), 0);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 9, 5), 1..=5);
        assert_eq!(page_window(5, 9, 5), 3..=7);
        assert_eq!(page_window(9, 9, 5), 7..=9);
        assert_eq!(page_window(2, 3, 5), 1..=3);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(7, 4), 4);
        assert_eq!(clamp_page(3, 0), 1);
    }
}
