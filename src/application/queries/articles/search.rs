use std::time::Instant;

use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSearchResultDto, PageDto},
        error::ApplicationResult,
    },
    domain::{
        article::{
            ArticleSearchResult, CountPlan, PredicateBuilder, SearchCondition, ensure_page_shape,
        },
        pagination::{Page, PageRequest},
    },
};

const MAX_PAGE_SIZE: i64 = 100;

pub struct SearchArticlesQuery {
    /// One-based page number.
    pub page: i64,
    pub size: i64,
    pub keyword: Option<String>,
    pub search_type: Option<String>,
}

impl ArticleQueryService {
    /// Run one paged article search.
    ///
    /// The content query and the count query are issued separately and may
    /// observe different snapshots under concurrent writes.
    pub async fn search(
        &self,
        condition: Option<&SearchCondition>,
        request: PageRequest,
    ) -> ApplicationResult<Page<ArticleSearchResult>> {
        let started = Instant::now();
        let condition = condition.filter(|cond| !cond.is_blank());
        let predicate = PredicateBuilder::build(condition);
        let strategy = self.settings.strategy;

        let content = self
            .search_repo
            .fetch_page(predicate.as_ref(), request, strategy)
            .await?;
        ensure_page_shape(&content, request.page_size())?;

        let plan = CountPlan::for_condition(condition);
        let total_elements = match request.known_total(content.len()) {
            Some(total) => total,
            None => self.search_repo.count(predicate.as_ref(), plan).await?,
        };

        let page = Page::new(content, request, total_elements);

        tracing::debug!(
            search_type = condition.map(|cond| cond.search_type().as_str()),
            page_number = request.page_number(),
            page_size = request.page_size(),
            strategy = strategy.as_str(),
            count_plan = plan.as_str(),
            returned = page.content.len(),
            total_elements,
            "article search completed"
        );
        self.metrics.record("article_search", started.elapsed());

        Ok(page)
    }

    /// API-facing search: raw request values in, one-based page DTO out.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<PageDto<ArticleSearchResultDto>> {
        let condition =
            SearchCondition::parse(query.keyword.as_deref(), query.search_type.as_deref())?;
        let request = PageRequest::from_one_based(query.page, query.size.min(MAX_PAGE_SIZE))?;

        let page = self.search(Some(&condition), request).await?;
        Ok(page.into())
    }
}
