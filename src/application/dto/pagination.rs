use crate::domain::pagination::{Page, PageWindow};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Offset page as exposed over HTTP. `page_number` is one-based.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub content: Vec<T>,
    pub page_number: u64,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

impl<T, U> From<Page<U>> for PageDto<T>
where
    U: Into<T>,
{
    fn from(page: Page<U>) -> Self {
        let total_pages = page.total_pages();
        let first = page.page_number == 0;
        let last = page.is_last();
        Self {
            page_number: u64::from(page.page_number) + 1,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages,
            first,
            last,
            content: page.content.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageWindowDto {
    pub previous_page: u64,
    pub page_numbers: Vec<u64>,
    pub next_page: u64,
}

impl From<PageWindow> for PageWindowDto {
    fn from(window: PageWindow) -> Self {
        Self {
            previous_page: window.previous_page,
            page_numbers: window.page_numbers,
            next_page: window.next_page,
        }
    }
}
