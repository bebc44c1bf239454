mod board;
mod search;
mod service;

pub use board::BoardListingQuery;
pub use search::SearchArticlesQuery;
pub use service::{ArticleQueryService, SearchSettings};
