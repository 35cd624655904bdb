//! Client-side page arithmetic over an already loaded list.
//!
//! Pages are 1-based. An empty list has zero pages; the current page still
//! reads as 1 so that slicing yields nothing rather than underflowing.

use crate::utils::error::{PortfolioError, Result};
use std::num::NonZeroUsize;

/// `ceil(len / page_size)`. Zero for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Half-open `[start, end)` index range of a 1-based page.
pub fn page_bounds(page: usize, page_size: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    (start, start.saturating_add(page_size))
}

/// The items on `page`, clamped to the list. Out-of-range pages are empty.
pub fn visible_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let (start, end) = page_bounds(page, page_size);
    if start >= items.len() {
        return &[];
    }
    &items[start..end.min(items.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
    item_count: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self> {
        NonZeroUsize::new(page_size)
            .map(Self::with_page_size)
            .ok_or_else(|| PortfolioError::InvalidConfigValueError {
                field: "page_size".to_string(),
                value: page_size.to_string(),
                reason: "Page size must be greater than zero".to_string(),
            })
    }

    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            page_size: page_size.get(),
            current_page: 1,
            item_count: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.item_count, self.page_size)
    }

    /// Point the paginator at a list of `count` items and go back to page 1.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.current_page = 1;
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Jump to a numbered page. Pages outside `1..=total_pages` are ignored.
    pub fn jump_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    /// Numbered buttons are only worth showing with more than one page.
    pub fn controls_visible(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages()
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        visible_slice(items, self.current_page, self.page_size)
    }
}
