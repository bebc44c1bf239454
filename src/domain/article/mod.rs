pub mod aggregation;
pub mod entity;
pub mod repository;
pub mod search;
pub mod specifications;
pub mod value_objects;

pub use aggregation::{CommentCountStrategy, ensure_page_shape};
pub use entity::{ArticleSearchResult, ArticleSummary};
pub use repository::ArticleSearchRepository;
pub use search::{ArticleSearchType, SearchCondition};
pub use specifications::{ArticlePredicate, CountPlan, PredicateBuilder};
pub use value_objects::{ArticleId, AuthorName};
