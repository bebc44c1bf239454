// tests/support/mocks.rs
use async_trait::async_trait;
use board_core::domain::article::{
    ArticleId, ArticlePredicate, ArticleSearchRepository, ArticleSearchResult, ArticleSummary,
    AuthorName, CommentCountStrategy, CountPlan,
};
use board_core::domain::errors::{DomainError, DomainResult};
use board_core::domain::pagination::PageRequest;
use chrono::{TimeZone, Utc};
use std::sync::Mutex;

use super::fixtures::{ARTICLE_COUNT, expected_author, expected_comments};

/// In-memory search repository that remembers every call it receives.
#[derive(Default)]
pub struct RecordingSearchRepo {
    articles: Vec<ArticleSearchResult>,
    fetches: Mutex<Vec<(PageRequest, CommentCountStrategy)>>,
    count_plans: Mutex<Vec<CountPlan>>,
}

impl RecordingSearchRepo {
    pub fn new(articles: Vec<ArticleSearchResult>) -> Self {
        Self {
            articles,
            ..Self::default()
        }
    }

    /// Same data set the sqlite fixture seeds.
    pub fn seeded() -> Self {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let articles = (1..=ARTICLE_COUNT)
            .map(|n| {
                let summary = ArticleSummary {
                    id: ArticleId::new(n).unwrap(),
                    title: format!("title{n}"),
                    content: format!("content{n}"),
                    author: AuthorName::new(expected_author(n)).unwrap(),
                    view_count: u64::try_from(n * 7).unwrap(),
                    created_at: base + chrono::Duration::minutes(n),
                };
                let comments = i64::try_from(expected_comments(n)).unwrap();
                ArticleSearchResult::new(summary, Some(comments))
            })
            .collect();
        Self::new(articles)
    }

    pub fn count_plans(&self) -> Vec<CountPlan> {
        self.count_plans.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> Vec<(PageRequest, CommentCountStrategy)> {
        self.fetches.lock().unwrap().clone()
    }

    fn matching(&self, predicate: Option<&ArticlePredicate>) -> Vec<ArticleSearchResult> {
        let mut matched: Vec<_> = self
            .articles
            .iter()
            .filter(|result| predicate.is_none_or(|p| p.matches(&result.article)))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.id().cmp(&a.id()));
        matched
    }
}

#[async_trait]
impl ArticleSearchRepository for RecordingSearchRepo {
    async fn fetch_page(
        &self,
        predicate: Option<&ArticlePredicate>,
        page: PageRequest,
        strategy: CommentCountStrategy,
    ) -> DomainResult<Vec<ArticleSearchResult>> {
        self.fetches.lock().unwrap().push((page, strategy));
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(page.page_size()).unwrap();
        Ok(self
            .matching(predicate)
            .into_iter()
            .skip(offset)
            .take(size)
            .collect())
    }

    async fn count(
        &self,
        predicate: Option<&ArticlePredicate>,
        plan: CountPlan,
    ) -> DomainResult<u64> {
        self.count_plans.lock().unwrap().push(plan);
        if predicate.is_some_and(ArticlePredicate::references_author) && !plan.joins_author() {
            return Err(DomainError::Validation(
                "author predicate requires the author join".into(),
            ));
        }
        Ok(u64::try_from(self.matching(predicate).len()).unwrap())
    }
}

/// Repository whose storage is always unavailable.
pub struct FailingSearchRepo;

#[async_trait]
impl ArticleSearchRepository for FailingSearchRepo {
    async fn fetch_page(
        &self,
        _predicate: Option<&ArticlePredicate>,
        _page: PageRequest,
        _strategy: CommentCountStrategy,
    ) -> DomainResult<Vec<ArticleSearchResult>> {
        Err(DomainError::Persistence("database is unavailable".into()))
    }

    async fn count(
        &self,
        _predicate: Option<&ArticlePredicate>,
        _plan: CountPlan,
    ) -> DomainResult<u64> {
        Err(DomainError::Persistence("database is unavailable".into()))
    }
}
