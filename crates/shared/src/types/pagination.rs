//! Page slicing for list endpoints.
//!
//! Lists are filtered and ordered in memory, then cut into pages here.

use serde::{Deserialize, Serialize};

/// Page size used when the client does not ask for one.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Largest page size a client may ask for.
pub const MAX_PER_PAGE: u32 = 100;

/// A validated page position. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, at least 1.
    pub page: u32,
    /// Page size, between 1 and [`MAX_PER_PAGE`].
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl PageRequest {
    /// Builds a page position from optional query values, clamping out of
    /// range numbers instead of rejecting them.
    #[must_use]
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
        }
    }

    fn skip(self) -> usize {
        let before = usize::try_from(self.page - 1).unwrap_or(usize::MAX);
        before.saturating_mul(self.per_page as usize)
    }

    /// Cuts the requested page out of `items`. A page past the end is empty.
    #[must_use]
    pub fn paginate<T>(self, items: Vec<T>) -> PageResponse<T> {
        let page = Self::new(Some(self.page), Some(self.per_page));
        let total = items.len() as u64;
        let data = items
            .into_iter()
            .skip(page.skip())
            .take(page.per_page as usize)
            .collect();

        PageResponse {
            data,
            meta: PageMeta::new(page, total),
        }
    }
}

/// One page of results plus where it sits in the full list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Position of the page.
    pub meta: PageMeta,
}

impl<T> PageResponse<T> {
    /// Converts every item, keeping the page position.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Position of a page in the full result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page number.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Matching items across all pages.
    pub total: u64,
    /// Number of pages; an empty list still has one.
    pub total_pages: u32,
}

impl PageMeta {
    fn new(page: PageRequest, total: u64) -> Self {
        let pages = total.div_ceil(u64::from(page.per_page)).max(1);
        Self {
            page: page.page,
            per_page: page.per_page,
            total,
            total_pages: u32::try_from(pages).unwrap_or(u32::MAX),
        }
    }
}
