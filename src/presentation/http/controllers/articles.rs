// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleSearchResultDto, BoardListingDto, PageDto},
    queries::articles::{BoardListingQuery, SearchArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

const fn default_page() -> i64 {
    1
}

const fn default_size() -> i64 {
    10
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleSearchParams {
    /// One-based page number.
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    #[serde(default)]
    pub keyword: Option<String>,
    /// `TITLE`, `CONTENT`, `TITLE_AND_CONTENT` or `AUTHOR`.
    #[serde(default, rename = "type")]
    pub search_type: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoardParams {
    /// One-based page number.
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default, rename = "type")]
    pub search_type: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleSearchParams),
    responses(
        (status = 200, description = "Page of matching articles, newest first.", body = PageDto<ArticleSearchResultDto>),
        (status = 400, description = "Malformed condition or page request.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleSearchParams>,
) -> HttpResult<Json<PageDto<ArticleSearchResultDto>>> {
    state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery {
            page: params.page,
            size: params.size,
            keyword: params.keyword,
            search_type: params.search_type,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/board",
    params(BoardParams),
    responses(
        (status = 200, description = "Board page with page-number links.", body = BoardListingDto),
        (status = 400, description = "Malformed condition or page out of range.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn board_listing(
    Extension(state): Extension<HttpState>,
    Query(params): Query<BoardParams>,
) -> HttpResult<Json<BoardListingDto>> {
    state
        .services
        .article_queries
        .board_listing(BoardListingQuery {
            page: params.page,
            keyword: params.keyword,
            search_type: params.search_type,
        })
        .await
        .into_http()
        .map(Json)
}
