// src/domain/pagination/page.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::window::PageWindow;

/// Zero-based page request: which slice of an ordered result set to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: i64) -> DomainResult<Self> {
        if page_size < 1 {
            return Err(invalid(page_number, page_size, "page size must be at least 1"));
        }
        if page_number < 0 {
            return Err(invalid(page_number, page_size, "page number must not be negative"));
        }

        let page_number = u32::try_from(page_number)
            .map_err(|_| invalid(page_number, page_size, "page number out of range"))?;
        let page_size = u32::try_from(page_size)
            .map_err(|_| invalid(i64::from(page_number), page_size, "page size out of range"))?;

        Ok(Self {
            page_number,
            page_size,
        })
    }

    /// Translate a user-facing page number (first page is 1).
    pub fn from_one_based(page: i64, page_size: i64) -> DomainResult<Self> {
        if page < 1 {
            return Err(invalid(page, page_size, "page must be at least 1"));
        }
        Self::new(page - 1, page_size)
    }

    pub const fn page_number(self) -> u32 {
        self.page_number
    }

    pub const fn page_size(self) -> u32 {
        self.page_size
    }

    pub fn offset(self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }

    /// Total element count implied by a content fetch, when the fetch alone
    /// determines it: a short first page, or a short non-empty later page.
    /// `None` means a count query is required.
    pub fn known_total(self, fetched: usize) -> Option<u64> {
        let fetched = u64::try_from(fetched).ok()?;
        if fetched >= u64::from(self.page_size) {
            return None;
        }
        if self.page_number == 0 || fetched > 0 {
            return Some(self.offset() + fetched);
        }
        None
    }
}

fn invalid(page: i64, size: i64, reason: &str) -> DomainError {
    DomainError::InvalidPageRequest(format!("{reason} (page: {page}, size: {size})"))
}

/// One slice of an ordered result set plus the totals it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub const fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page_number: request.page_number,
            page_size: request.page_size,
            total_elements,
        }
    }

    /// `ceil(total_elements / page_size)`; an empty result set has zero pages.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.page_size))
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_last(&self) -> bool {
        u64::from(self.page_number) + 1 >= self.total_pages()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }

    /// Page-number links for this page, `window_size` links per block.
    pub fn window(&self, window_size: u32) -> PageWindow {
        PageWindow::for_page(self.page_number, window_size, self.total_pages())
    }
}
