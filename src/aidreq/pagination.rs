//! # Pagination Engine
//!
//! Page arithmetic over a filtered, ordered collection. The page size is fixed per
//! [`Paginator`] and comes from configuration; callers only pick the page.
//!
//! ## Arithmetic
//!
//! - `total_pages = ceil(total_records / page_size)`, so 0 records means 0 pages.
//! - `skip = (page - 1) * page_size`, `limit = page_size`.
//!
//! ## Out-of-range pages
//!
//! Asking for a page past the end while records exist is not an error. The caller gets
//! an empty `data` slice together with the real `total_pages`/`total_records`, which lets
//! it tell "you scrolled too far" apart from "there is nothing here at all".
//! Pages below 1 never get this far: they are rejected by
//! [`crate::validation::validate_page`].
//!
//! ## Ordering
//!
//! Newest first by `request_created_date`; equal timestamps fall back to ascending `id`
//! so that consecutive pages never shuffle records between them.

use crate::error::{AidreqError, Result};
use crate::model::ItemRequest;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Where a page starts and how big it is, plus the totals it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub skip: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub total_records: usize,
}

impl PageWindow {
    /// True when the page lies past the last page of a non-empty collection.
    pub fn is_past_end(&self) -> bool {
        self.total_records > 0 && self.page > self.total_pages as u64
    }
}

/// The envelope returned by paginated queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub total_pages: usize,
    pub total_records: usize,
    pub current_page: u64,
    pub page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(AidreqError::Config(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_records: usize) -> usize {
        total_records.div_ceil(self.page_size)
    }

    /// `page` is 1-indexed and assumed already validated.
    pub fn window(&self, page: u64, total_records: usize) -> PageWindow {
        let skip = usize::try_from(page.saturating_sub(1))
            .unwrap_or(usize::MAX)
            .saturating_mul(self.page_size);
        PageWindow {
            page,
            skip,
            limit: self.page_size,
            total_pages: self.total_pages(total_records),
            total_records,
        }
    }

    pub fn envelope<T>(&self, data: Vec<T>, window: &PageWindow) -> PaginatedResult<T> {
        PaginatedResult {
            data,
            total_pages: window.total_pages,
            total_records: window.total_records,
            current_page: window.page,
            page_size: self.page_size,
        }
    }
}

/// Sort order for every paginated listing.
pub fn newest_first(a: &ItemRequest, b: &ItemRequest) -> Ordering {
    b.request_created_date
        .cmp(&a.request_created_date)
        .then_with(|| a.id.cmp(&b.id))
}
