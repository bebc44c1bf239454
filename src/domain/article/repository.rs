use crate::domain::article::aggregation::CommentCountStrategy;
use crate::domain::article::entity::ArticleSearchResult;
use crate::domain::article::specifications::{ArticlePredicate, CountPlan};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

/// Read-side query port the search engine runs against.
#[async_trait]
pub trait ArticleSearchRepository: Send + Sync {
    /// Articles matching `predicate`, newest id first, sliced by `page`, each
    /// joined to its author and annotated with its comment count.
    async fn fetch_page(
        &self,
        predicate: Option<&ArticlePredicate>,
        page: PageRequest,
        strategy: CommentCountStrategy,
    ) -> DomainResult<Vec<ArticleSearchResult>>;

    /// Number of articles matching `predicate`.
    async fn count(&self, predicate: Option<&ArticlePredicate>, plan: CountPlan)
    -> DomainResult<u64>;
}
