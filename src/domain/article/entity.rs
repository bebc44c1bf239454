// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, AuthorName};
use chrono::{DateTime, Utc};

/// Read-only projection of an article as shown in search listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub author: AuthorName,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
}

/// An article paired with the number of comments attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSearchResult {
    pub article: ArticleSummary,
    pub number_of_comments: u64,
}

impl ArticleSearchResult {
    /// Storage may report an absent aggregate for articles without comments;
    /// those are normalized to zero here so the boundary never sees a null count.
    pub fn new(article: ArticleSummary, number_of_comments: Option<i64>) -> Self {
        let number_of_comments = number_of_comments
            .and_then(|count| u64::try_from(count).ok())
            .unwrap_or(0);
        Self {
            article,
            number_of_comments,
        }
    }

    pub fn id(&self) -> ArticleId {
        self.article.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> ArticleSummary {
        ArticleSummary {
            id: ArticleId::new(1).unwrap(),
            title: "title".into(),
            content: "content".into(),
            author: AuthorName::new("author1").unwrap(),
            view_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn absent_count_becomes_zero() {
        let result = ArticleSearchResult::new(sample_summary(), None);
        assert_eq!(result.number_of_comments, 0);
    }

    #[test]
    fn present_count_is_kept() {
        let result = ArticleSearchResult::new(sample_summary(), Some(11));
        assert_eq!(result.number_of_comments, 11);
        assert_eq!(result.id(), ArticleId::new(1).unwrap());
    }

    #[test]
    fn negative_count_is_clamped() {
        let result = ArticleSearchResult::new(sample_summary(), Some(-1));
        assert_eq!(result.number_of_comments, 0);
    }
}
