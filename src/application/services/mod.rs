// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::metrics::SearchMetrics,
        queries::articles::{ArticleQueryService, SearchSettings},
    },
    domain::article::ArticleSearchRepository,
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_search_repo: Arc<dyn ArticleSearchRepository>,
        metrics: Arc<dyn SearchMetrics>,
        settings: SearchSettings,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_search_repo),
            Arc::clone(&metrics),
            settings,
        ));

        Self { article_queries }
    }
}
