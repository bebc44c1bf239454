// src/infrastructure/repositories/sqlite_article_search.rs
use super::map_sqlx;
use crate::domain::article::{
    ArticleId, ArticlePredicate, ArticleSearchRepository, ArticleSearchResult, ArticleSummary,
    AuthorName, CommentCountStrategy, CountPlan,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;

const SUMMARY_COLUMNS: &str =
    "a.id, a.title, a.content, u.name AS author_name, a.view_count, a.created_at";
const ARTICLES_WITH_AUTHOR: &str = " FROM articles a JOIN users u ON u.id = a.author_id";
const ORDER_NEWEST_FIRST: &str = " ORDER BY a.id DESC";

#[derive(Clone)]
pub struct SqliteArticleSearchRepository {
    pool: SqlitePool,
}

impl SqliteArticleSearchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    id: i64,
    title: String,
    content: String,
    author_name: String,
    view_count: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.id)?,
            title: row.title,
            content: row.content,
            author: AuthorName::new(row.author_name)?,
            view_count: u64::try_from(row.view_count)
                .map_err(|_| DomainError::Validation("view count must not be negative".into()))?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleCountRow {
    #[sqlx(flatten)]
    summary: ArticleSummaryRow,
    comment_count: Option<i64>,
}

impl TryFrom<ArticleCountRow> for ArticleSearchResult {
    type Error = DomainError;

    fn try_from(row: ArticleCountRow) -> Result<Self, Self::Error> {
        Ok(ArticleSearchResult::new(
            ArticleSummary::try_from(row.summary)?,
            row.comment_count,
        ))
    }
}

#[derive(Debug, FromRow)]
struct ArticleCommentRow {
    #[sqlx(flatten)]
    summary: ArticleSummaryRow,
    comment_id: Option<i64>,
}

impl SqliteArticleSearchRepository {
    fn push_predicate(builder: &mut QueryBuilder<'_, Sqlite>, predicate: Option<&ArticlePredicate>) {
        let Some(predicate) = predicate else {
            return;
        };

        let pattern = predicate.contains_pattern();
        builder.push(" WHERE ");
        match predicate {
            ArticlePredicate::TitleContains(_) => push_matches(builder, "a.title", pattern),
            ArticlePredicate::ContentContains(_) => push_matches(builder, "a.content", pattern),
            ArticlePredicate::TitleOrContentContains(_) => {
                builder.push("(");
                push_matches(builder, "a.title", pattern.clone());
                builder.push(" OR ");
                push_matches(builder, "a.content", pattern);
                builder.push(")");
            }
            ArticlePredicate::AuthorNameContains(_) => push_matches(builder, "u.name", pattern),
        }
    }

    fn push_slice(builder: &mut QueryBuilder<'_, Sqlite>, page: PageRequest) -> DomainResult<()> {
        let offset = i64::try_from(page.offset()).map_err(|_| {
            DomainError::InvalidPageRequest(format!("offset {} out of range", page.offset()))
        })?;
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.page_size()));
        builder.push(" OFFSET ");
        builder.push_bind(offset);
        Ok(())
    }

    /// Scalar subselect per article row.
    async fn fetch_with_subquery(
        &self,
        predicate: Option<&ArticlePredicate>,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSearchResult>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        builder.push(SUMMARY_COLUMNS);
        builder.push(
            ", (SELECT COUNT(*) FROM comments c WHERE c.article_id = a.id) AS comment_count",
        );
        builder.push(ARTICLES_WITH_AUTHOR);
        Self::push_predicate(&mut builder, predicate);
        builder.push(ORDER_NEWEST_FIRST);
        Self::push_slice(&mut builder, page)?;

        let rows = builder
            .build_query_as::<ArticleCountRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSearchResult::try_from).collect()
    }

    /// Outer join to comments, grouped per article before the slice is taken.
    /// An inner join here would drop articles without comments.
    async fn fetch_with_group_by(
        &self,
        predicate: Option<&ArticlePredicate>,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSearchResult>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        builder.push(SUMMARY_COLUMNS);
        builder.push(", COUNT(c.id) AS comment_count");
        builder.push(ARTICLES_WITH_AUTHOR);
        builder.push(" LEFT JOIN comments c ON c.article_id = a.id");
        Self::push_predicate(&mut builder, predicate);
        builder.push(" GROUP BY a.id, a.title, a.content, u.name, a.view_count, a.created_at");
        builder.push(ORDER_NEWEST_FIRST);
        Self::push_slice(&mut builder, page)?;

        let rows = builder
            .build_query_as::<ArticleCountRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSearchResult::try_from).collect()
    }

    /// Slice the articles first, then outer-join every comment row of the
    /// slice and count them in memory.
    async fn fetch_with_fetch_join(
        &self,
        predicate: Option<&ArticlePredicate>,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSearchResult>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT p.id, p.title, p.content, p.author_name, p.view_count, p.created_at, \
             c.id AS comment_id FROM (SELECT ",
        );
        builder.push(SUMMARY_COLUMNS);
        builder.push(ARTICLES_WITH_AUTHOR);
        Self::push_predicate(&mut builder, predicate);
        builder.push(ORDER_NEWEST_FIRST);
        Self::push_slice(&mut builder, page)?;
        builder.push(") p LEFT JOIN comments c ON c.article_id = p.id ORDER BY p.id DESC, c.id ASC");

        let rows = builder
            .build_query_as::<ArticleCommentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut materialized: Vec<(ArticleSummary, Vec<i64>)> = Vec::new();
        for row in rows {
            let same_article = materialized
                .last()
                .is_some_and(|(summary, _)| i64::from(summary.id) == row.summary.id);

            if same_article {
                if let (Some((_, comments)), Some(comment_id)) =
                    (materialized.last_mut(), row.comment_id)
                {
                    comments.push(comment_id);
                }
            } else {
                let summary = ArticleSummary::try_from(row.summary)?;
                materialized.push((summary, row.comment_id.into_iter().collect()));
            }
        }

        Ok(materialized
            .into_iter()
            .map(|(summary, comments)| {
                ArticleSearchResult::new(summary, i64::try_from(comments.len()).ok())
            })
            .collect())
    }

    /// Page of articles, then one grouped count restricted to the page's ids.
    async fn fetch_with_batched_count(
        &self,
        predicate: Option<&ArticlePredicate>,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSearchResult>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT ");
        builder.push(SUMMARY_COLUMNS);
        builder.push(ARTICLES_WITH_AUTHOR);
        Self::push_predicate(&mut builder, predicate);
        builder.push(ORDER_NEWEST_FIRST);
        Self::push_slice(&mut builder, page)?;

        let rows = builder
            .build_query_as::<ArticleSummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let summaries = rows
            .into_iter()
            .map(ArticleSummary::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        if summaries.is_empty() {
            return Ok(Vec::new());
        }

        let mut counts_query: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT article_id, COUNT(*) AS comment_count FROM comments WHERE article_id IN (",
        );
        {
            let mut ids = counts_query.separated(", ");
            for summary in &summaries {
                ids.push_bind(i64::from(summary.id));
            }
        }
        counts_query.push(") GROUP BY article_id");

        let counts: HashMap<i64, i64> = counts_query
            .build_query_as::<(i64, i64)>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?
            .into_iter()
            .collect();

        Ok(summaries
            .into_iter()
            .map(|summary| {
                let count = counts.get(&i64::from(summary.id)).copied();
                ArticleSearchResult::new(summary, count)
            })
            .collect())
    }
}

#[async_trait]
impl ArticleSearchRepository for SqliteArticleSearchRepository {
    async fn fetch_page(
        &self,
        predicate: Option<&ArticlePredicate>,
        page: PageRequest,
        strategy: CommentCountStrategy,
    ) -> DomainResult<Vec<ArticleSearchResult>> {
        match strategy {
            CommentCountStrategy::CorrelatedSubquery => {
                self.fetch_with_subquery(predicate, page).await
            }
            CommentCountStrategy::LeftJoinGroupBy => self.fetch_with_group_by(predicate, page).await,
            CommentCountStrategy::FetchJoin => self.fetch_with_fetch_join(predicate, page).await,
            CommentCountStrategy::BatchedGroupCount => {
                self.fetch_with_batched_count(predicate, page).await
            }
        }
    }

    async fn count(
        &self,
        predicate: Option<&ArticlePredicate>,
        plan: CountPlan,
    ) -> DomainResult<u64> {
        if predicate.is_some_and(ArticlePredicate::references_author) && !plan.joins_author() {
            return Err(DomainError::Validation(
                "author predicates need the author join in the count query".into(),
            ));
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        if plan.joins_author() {
            builder.push(" JOIN users u ON u.id = a.author_id");
        }
        Self::push_predicate(&mut builder, predicate);

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(total)
            .map_err(|_| DomainError::Persistence(format!("negative row count: {total}")))
    }
}

/// `column REGEXP pattern`; the function is registered on every pooled
/// connection by `database::init_pool`.
fn push_matches(builder: &mut QueryBuilder<'_, Sqlite>, column: &'static str, pattern: String) {
    builder.push(column).push(" REGEXP ").push_bind(pattern);
}
