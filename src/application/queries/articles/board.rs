use super::ArticleQueryService;
use crate::{
    application::{
        dto::BoardListingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleSearchResult, SearchCondition},
        pagination::{Page, PageRequest},
    },
};

pub struct BoardListingQuery {
    /// One-based page number as typed by the user.
    pub page: i64,
    pub keyword: Option<String>,
    pub search_type: Option<String>,
}

impl ArticleQueryService {
    /// Board screen listing: a fixed-size page of articles plus the
    /// page-number window. Requesting a page past the last one is an error
    /// here, unlike [`ArticleQueryService::search`].
    pub async fn board_listing(&self, query: BoardListingQuery) -> ApplicationResult<BoardListingDto> {
        let condition =
            SearchCondition::parse(query.keyword.as_deref(), query.search_type.as_deref())?;
        let request =
            PageRequest::from_one_based(query.page, i64::from(self.settings.board_page_size))?;

        let page = self.search(Some(&condition), request).await?;
        ensure_page_exists(query.page, &page)?;

        let window = page.window(self.settings.window_size);
        Ok(BoardListingDto {
            condition: (&condition).into(),
            articles: page.into(),
            window: window.into(),
        })
    }
}

fn ensure_page_exists(requested: i64, page: &Page<ArticleSearchResult>) -> ApplicationResult<()> {
    let requested = u64::try_from(requested).unwrap_or(0);
    let total_pages = page.total_pages();
    let out_of_range = if total_pages == 0 {
        requested > 1
    } else {
        requested > total_pages
    };

    if out_of_range {
        tracing::debug!(requested, total_pages, "board page out of range");
        return Err(ApplicationError::validation(format!(
            "wrong page request: page {requested} of {total_pages}"
        )));
    }
    Ok(())
}
