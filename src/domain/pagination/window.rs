// src/domain/pagination/window.rs

/// Block of page-number links for a pagination control. All numbers are
/// one-based, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub previous_page: u64,
    pub page_numbers: Vec<u64>,
    pub next_page: u64,
}

impl PageWindow {
    /// Window for the zero-based `page_number`. Pages are grouped in blocks of
    /// `window_size`; `previous_page` and `next_page` jump to the last page of
    /// the preceding block and the first page of the following block, clamped
    /// to the existing pages. A page with no content (nothing to page
    /// through, or a page past the last one) gets [`PageWindow::single`].
    pub fn for_page(page_number: u32, window_size: u32, total_pages: u64) -> Self {
        if u64::from(page_number) >= total_pages {
            return Self::single();
        }

        let size = u64::from(window_size.max(1));
        let block_start = u64::from(page_number) / size * size;

        let prev_page = block_start.saturating_sub(1);
        let default_next_page = block_start + size;
        let next_page = default_next_page.min(total_pages - 1);
        let end_page = (default_next_page - 1).min(next_page);

        Self {
            previous_page: prev_page + 1,
            page_numbers: (block_start..=end_page).map(|page| page + 1).collect(),
            next_page: next_page + 1,
        }
    }

    /// Degenerate window used when there is nothing to page through.
    pub fn single() -> Self {
        Self {
            previous_page: 1,
            page_numbers: vec![1],
            next_page: 1,
        }
    }
}
