// src/paging.rs
//
// Fixed-size pagination over a View. Always at least one page, even for an
// empty view, so the UI has a consistent "Page 1 of 1" state.

use crate::query::View;

pub const PAGE_SIZE: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageView {
    /// Clamped into `[0, total_pages - 1]`.
    pub page_index: usize,
    pub total_pages: usize,
    /// Offsets into the view, half-open: `start..end`.
    pub start: usize,
    pub end: usize,
}

impl PageView {
    /// 1-based inclusive row numbers for display; `(0, 0)` when empty.
    pub fn display_range(&self) -> (usize, usize) {
        if self.start == self.end {
            (0, 0)
        } else {
            (self.start + 1, self.end)
        }
    }
}

pub fn paginate(view: &View, requested: usize) -> PageView {
    let len = view.len();
    let total_pages = len.div_ceil(PAGE_SIZE).max(1);
    let page_index = requested.min(total_pages - 1);
    let start = page_index * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(len);
    PageView { page_index, total_pages, start, end }
}
