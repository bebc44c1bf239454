// src/presentation/http/openapi.rs
use axum::Json;
use std::path::Path;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::search_articles,
        crate::presentation::http::controllers::articles::board_listing,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::ArticleSearchResultDto,
            crate::application::dto::SearchConditionDto,
            crate::application::dto::PageWindowDto,
            crate::application::dto::BoardListingDto
        )
    ),
    tags(
        (name = "Articles", description = "Article search and board listing"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Board API",
        description = "Bulletin-board article search",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Write the generated document as pretty JSON to `path`.
pub fn write_openapi_snapshot(path: impl AsRef<Path>) -> anyhow::Result<()> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(path, json)?;
    Ok(())
}
