//! Pure pagination math and page slicing.

use servedash_model::Page;

/// Number of pages needed for `item_count` items, never less than 1.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested (possibly negative or huge) page into `[1, total_pages]`.
pub fn clamp_page(page_no: i64, total_pages: usize) -> usize {
    let last = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    // `last` came from a usize, so the clamped value fits back.
    page_no.clamp(1, last) as usize
}

/// Start/end indices of a one-based page inside `total_items`.
pub fn page_window(total_items: usize, page_size: usize, page: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    (start, end)
}

/// Cut one page out of `items`.
///
/// Out-of-range page numbers are clamped rather than rejected, so the
/// returned `constrained_page` is always safe to display and to request again.
/// A zero page size is treated as 1.
pub fn slice_to_page<T: Clone>(items: &[T], page_no: i64, page_size: usize) -> Page<T> {
    let max_page = total_pages(items.len(), page_size);
    let constrained_page = clamp_page(page_no, max_page);
    let (start, end) = page_window(items.len(), page_size, constrained_page);

    Page {
        items: items[start..end].to_vec(),
        constrained_page,
        max_page,
        total_items: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_of_twenty_three() {
        let page = slice_to_page(&numbers(23), 1, 10);
        assert_eq!(page.items, numbers(10));
        assert_eq!(page.max_page, 3);
        assert_eq!(page.constrained_page, 1);
        assert_eq!(page.total_items, 23);
    }

    #[test]
    fn page_past_the_end_clamps_to_last() {
        let page = slice_to_page(&numbers(23), 5, 10);
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.constrained_page, 3);
        assert_eq!(page.max_page, 3);
    }

    #[test]
    fn non_positive_page_clamps_to_first() {
        for page_no in [0, -1, i64::MIN] {
            let page = slice_to_page(&numbers(23), page_no, 10);
            assert_eq!(page.constrained_page, 1);
            assert_eq!(page.items, numbers(10));
        }
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let page = slice_to_page::<usize>(&[], 7, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.max_page, 1);
        assert_eq!(page.constrained_page, 1);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let page = slice_to_page(&numbers(20), 3, 10);
        assert_eq!(page.max_page, 2);
        assert_eq!(page.constrained_page, 2);
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let page = slice_to_page(&numbers(3), 2, 0);
        assert_eq!(page.items, vec![2]);
        assert_eq!(page.max_page, 3);
    }

    #[test]
    fn bounds_hold_across_inputs() {
        for len in [0, 1, 9, 10, 11, 23, 100] {
            let items = numbers(len);
            for page_size in [1, 2, 10, 500] {
                for page_no in [i64::MIN, -3, 0, 1, 2, 3, 50, i64::MAX] {
                    let page = slice_to_page(&items, page_no, page_size);
                    assert!(page.items.len() <= page_size);
                    assert!(page.max_page >= 1);
                    assert!((1..=page.max_page).contains(&page.constrained_page));
                    assert_eq!(page.max_page, len.div_ceil(page_size).max(1));
                }
            }
        }
    }

    #[test]
    fn same_inputs_same_page() {
        let items = numbers(23);
        assert_eq!(slice_to_page(&items, 2, 7), slice_to_page(&items, 2, 7));
    }

    #[test]
    fn window_never_exceeds_total() {
        assert_eq!(page_window(5, 10, 1), (0, 5));
        assert_eq!(page_window(5, 10, 9), (5, 5));
        assert_eq!(page_window(0, 10, 1), (0, 0));
        assert_eq!(page_window(10, usize::MAX, usize::MAX), (10, 10));
    }
}
