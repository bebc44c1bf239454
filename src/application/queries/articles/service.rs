use std::sync::Arc;

use crate::{
    application::ports::metrics::SearchMetrics,
    domain::article::{ArticleSearchRepository, CommentCountStrategy},
};

/// Tunables of the article search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub strategy: CommentCountStrategy,
    pub board_page_size: u32,
    pub window_size: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            strategy: CommentCountStrategy::default(),
            board_page_size: 10,
            window_size: 10,
        }
    }
}

pub struct ArticleQueryService {
    pub(super) search_repo: Arc<dyn ArticleSearchRepository>,
    pub(super) metrics: Arc<dyn SearchMetrics>,
    pub(super) settings: SearchSettings,
}

impl ArticleQueryService {
    pub fn new(
        search_repo: Arc<dyn ArticleSearchRepository>,
        metrics: Arc<dyn SearchMetrics>,
        settings: SearchSettings,
    ) -> Self {
        Self {
            search_repo,
            metrics,
            settings,
        }
    }

    pub const fn settings(&self) -> SearchSettings {
        self.settings
    }
}
