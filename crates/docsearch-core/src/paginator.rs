//! Page slicing over the current result list.

use std::ops::Range;

use crate::error::{Error, Result};

/// Page sizes offered by the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageSize {
    Five,
    Ten,
    Twenty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::Twenty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self { PageSize::Five }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| Error::InvalidPageRequest(format!("page size {} is not one of 5, 10, 20", value)))
    }
}

/// Bounds of page `number` (1-based) for a list of `len` items.
/// Past the end the range is empty rather than an error.
pub fn page_bounds(size: PageSize, number: usize, len: usize) -> Range<usize> {
    let start = size.get().saturating_mul(number.saturating_sub(1));
    if start >= len {
        return len..len;
    }
    let end = start.saturating_add(size.get()).min(len);
    start..end
}

/// The visible window over the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    size: PageSize,
    number: usize,
    range: Range<usize>,
}

impl PageView {
    pub fn first(size: PageSize, len: usize) -> Self {
        Self { size, number: 1, range: page_bounds(size, 1, len) }
    }

    pub fn page_size(&self) -> PageSize { self.size }

    pub fn page_number(&self) -> usize { self.number }

    pub fn range(&self) -> Range<usize> { self.range.clone() }

    pub fn is_empty(&self) -> bool { self.range.is_empty() }

    pub fn items<'a, T>(&self, all: &'a [T]) -> &'a [T] {
        // the range always comes from page_bounds over the same list
        all.get(self.range.clone()).unwrap_or(&[])
    }
}

#[derive(Debug, Clone)]
pub struct Paginator {
    view: PageView,
}

impl Paginator {
    pub fn new(size: PageSize) -> Self {
        Self { view: PageView::first(size, 0) }
    }

    pub fn view(&self) -> &PageView { &self.view }

    pub fn page_size(&self) -> PageSize { self.view.size }

    /// Back to page one, keeping the page size. Used after every fresh query.
    pub fn reset(&mut self, len: usize) {
        self.view = PageView::first(self.view.size, len);
    }

    /// Select a page. On error the current view is kept.
    pub fn set_page(&mut self, page_size: usize, page_number: usize, len: usize) -> Result<()> {
        let size = PageSize::try_from(page_size)?;
        if page_number < 1 {
            return Err(Error::InvalidPageRequest("page numbers start at 1".to_string()));
        }
        self.view = PageView { size, number: page_number, range: page_bounds(size, page_number, len) };
        Ok(())
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.view.size.get())
    }
}
