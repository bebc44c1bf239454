// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article_search;

pub use error::map_sqlx;
pub use sqlite_article_search::SqliteArticleSearchRepository;
