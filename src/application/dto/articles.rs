use crate::application::dto::pagination::{PageDto, PageWindowDto};
use crate::domain::article::{ArticleSearchResult, ArticleSearchType, SearchCondition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSearchResultDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub number_of_comments: u64,
}

impl From<ArticleSearchResult> for ArticleSearchResultDto {
    fn from(result: ArticleSearchResult) -> Self {
        let ArticleSearchResult {
            article,
            number_of_comments,
        } = result;
        Self {
            id: article.id.into(),
            title: article.title,
            content: article.content,
            author: article.author.into(),
            view_count: article.view_count,
            created_at: article.created_at,
            number_of_comments,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchConditionDto {
    pub keyword: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "TITLE_AND_CONTENT")]
    pub search_type: ArticleSearchType,
}

impl From<&SearchCondition> for SearchConditionDto {
    fn from(condition: &SearchCondition) -> Self {
        Self {
            keyword: condition.keyword().to_owned(),
            search_type: condition.search_type(),
        }
    }
}

/// Everything a board listing screen renders: the echoed condition, the
/// page of articles and the page-number links.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BoardListingDto {
    pub condition: SearchConditionDto,
    pub articles: PageDto<ArticleSearchResultDto>,
    pub window: PageWindowDto,
}
