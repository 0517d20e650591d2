//! Client-side paging of a filtered name list.

/// Names shown per page.
pub const PAGE_SIZE: usize = 20;

/// One page of items plus the page count it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// `max(1, ceil(len / page_size))`. A zero page size is treated as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Cut 1-based `page` out of `items`. Pages outside the range are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = total_pages(items.len(), page_size);
    let slice = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .filter(|start| *start < items.len())
        .map(|start| {
            let end = (start + page_size).min(items.len());
            items[start..end].to_vec()
        })
        .unwrap_or_default();
    Page {
        items: slice,
        total_pages: total,
    }
}

/// Current page of a list view. Holds no memory of which filter produced the
/// list; callers `reset` when the list identity changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: usize,
    total_pages: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

impl PageState {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Advance one page; no-op on the last page. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; no-op on the first page. Returns whether it moved.
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Recompute the bound for a list of `len` items and clamp the page into it.
    pub fn set_total_items(&mut self, len: usize, page_size: usize) {
        self.total_pages = total_pages(len, page_size);
        self.page = self.page.clamp(1, self.total_pages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(20, PAGE_SIZE), 1);
        assert_eq!(total_pages(21, PAGE_SIZE), 2);
        assert_eq!(total_pages(60, PAGE_SIZE), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_pages_reconstruct_input() {
        for len in [1usize, 3, 19, 20, 21, 45, 50, 99] {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, PAGE_SIZE);
            assert_eq!(total, len.div_ceil(PAGE_SIZE));
            let joined: Vec<usize> = (1..=total)
                .flat_map(|p| paginate(&items, p, PAGE_SIZE).items)
                .collect();
            assert_eq!(joined, items, "len = {len}");
        }
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u8> = (0..30).collect();
        assert!(paginate(&items, 0, PAGE_SIZE).items.is_empty());
        assert!(paginate(&items, 3, PAGE_SIZE).items.is_empty());
        assert!(paginate(&items, usize::MAX, PAGE_SIZE).items.is_empty());
        assert_eq!(paginate(&items, 2, PAGE_SIZE).items.len(), 10);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut state = PageState::default();
        state.set_total_items(45, PAGE_SIZE);
        assert_eq!(state.total_pages(), 3);
        assert!(!state.prev());
        assert_eq!(state.page(), 1);
        assert!(state.next());
        assert!(state.next());
        assert!(!state.next());
        assert_eq!(state.page(), 3);
        assert!(state.prev());
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_clamps_when_list_shrinks() {
        let mut state = PageState::default();
        state.set_total_items(60, PAGE_SIZE);
        state.next();
        state.next();
        assert_eq!(state.page(), 3);
        state.set_total_items(25, PAGE_SIZE);
        assert_eq!(state.page(), 2);
        state.set_total_items(0, PAGE_SIZE);
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 1);
    }
}
