// src/domain/article/aggregation.rs
use crate::domain::article::entity::ArticleSearchResult;
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

/// Technique used to attach the per-article comment count to a page of
/// results. All variants produce the same `(id, count)` pairs; they differ in
/// query shape and in how much data leaves the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommentCountStrategy {
    /// Scalar `COUNT(*)` subselect per article row. Never duplicates rows.
    #[default]
    CorrelatedSubquery,
    /// `LEFT JOIN comments ... GROUP BY article`, grouped before `LIMIT`.
    LeftJoinGroupBy,
    /// Left-join and materialize every comment row, count in memory.
    FetchJoin,
    /// Fetch the page, then one grouped count over the page's ids.
    BatchedGroupCount,
}

impl CommentCountStrategy {
    pub const ALL: [Self; 4] = [
        Self::CorrelatedSubquery,
        Self::LeftJoinGroupBy,
        Self::FetchJoin,
        Self::BatchedGroupCount,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CorrelatedSubquery => "subquery",
            Self::LeftJoinGroupBy => "group-by",
            Self::FetchJoin => "fetch-join",
            Self::BatchedGroupCount => "batched",
        }
    }
}

impl fmt::Display for CommentCountStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentCountStrategy {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == normalized)
            .ok_or_else(|| {
                DomainError::Validation(format!("unknown comment count strategy: {value}"))
            })
    }
}

/// Check the shape a content fetch must have: at most `page_size` articles,
/// ordered by strictly descending id. A violation means the aggregation
/// multiplied or reordered article rows.
pub fn ensure_page_shape(results: &[ArticleSearchResult], page_size: u32) -> DomainResult<()> {
    let page_size = usize::try_from(page_size).unwrap_or(usize::MAX);
    if results.len() > page_size {
        return Err(DomainError::Persistence(format!(
            "page returned {} articles for page size {page_size}",
            results.len()
        )));
    }

    if let Some(pair) = results.windows(2).find(|pair| pair[0].id() <= pair[1].id()) {
        return Err(DomainError::Persistence(format!(
            "page rows out of order: article {} followed by {}",
            pair[0].id(),
            pair[1].id()
        )));
    }

    Ok(())
}
