// tests/support/fixtures.rs
use board_core::application::{
    ports::SearchMetricsPort, queries::articles::SearchSettings, services::ApplicationServices,
};
use board_core::domain::article::{ArticleSearchRepository, CommentCountStrategy};
use board_core::infrastructure::{
    database, metrics::InMemorySearchMetrics, repositories::SqliteArticleSearchRepository,
};
use board_core::presentation::http::{routes::build_router, state::HttpState};
use chrono::{Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const ARTICLE_COUNT: i64 = 20;
pub const AUTHORS: [&str; 3] = ["author1", "author2", "author3"];
pub const COMMENT_PATTERN: [u64; 4] = [0, 3, 11, 2];

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("board_core=debug"))
        .with_test_writer()
        .try_init();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Comment count seeded for article `id` (ids start at 1).
pub fn expected_comments(id: i64) -> u64 {
    let index = usize::try_from(id - 1).unwrap() % COMMENT_PATTERN.len();
    COMMENT_PATTERN[index]
}

/// Author name seeded for article `id`.
pub fn expected_author(id: i64) -> &'static str {
    AUTHORS[usize::try_from(id - 1).unwrap() % AUTHORS.len()]
}

pub async fn empty_pool() -> SqlitePool {
    init_tracing();
    let pool = database::init_pool("sqlite::memory:").await.unwrap();
    database::run_migrations(&pool).await.unwrap();
    pool
}

/// Twenty articles by three authors. Article `n` is titled `title{n}`, has
/// body `content{n}` and carries `COMMENT_PATTERN[(n - 1) % 4]` comments.
pub async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();

    let mut author_ids = Vec::with_capacity(AUTHORS.len());
    for name in AUTHORS {
        let id = sqlx::query("INSERT INTO users (name, email, created_at) VALUES (?, ?, ?)")
            .bind(name)
            .bind(format!("{name}@board.com"))
            .bind(base)
            .execute(&pool)
            .await
            .unwrap()
            .last_insert_rowid();
        author_ids.push(id);
    }

    for n in 1..=ARTICLE_COUNT {
        let author_id = author_ids[usize::try_from(n - 1).unwrap() % author_ids.len()];
        let created_at = base + Duration::minutes(n);
        let article_id = sqlx::query(
            "INSERT INTO articles (title, content, author_id, view_count, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(format!("title{n}"))
        .bind(format!("content{n}"))
        .bind(author_id)
        .bind(n * 7)
        .bind(created_at)
        .execute(&pool)
        .await
        .unwrap()
        .last_insert_rowid();
        assert_eq!(article_id, n);

        for c in 0..expected_comments(n) {
            sqlx::query(
                "INSERT INTO comments (article_id, author_id, content, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(article_id)
            .bind(author_ids[0])
            .bind(format!("comment{c}"))
            .bind(created_at)
            .execute(&pool)
            .await
            .unwrap();
        }
    }

    pool
}

pub fn settings(strategy: CommentCountStrategy) -> SearchSettings {
    SearchSettings {
        strategy,
        ..SearchSettings::default()
    }
}

pub fn build_services(
    repo: Arc<dyn ArticleSearchRepository>,
    settings: SearchSettings,
) -> (Arc<ApplicationServices>, Arc<InMemorySearchMetrics>) {
    let metrics = Arc::new(InMemorySearchMetrics::default());
    let port: Arc<SearchMetricsPort> = metrics.clone();
    let services = Arc::new(ApplicationServices::new(repo, port, settings));
    (services, metrics)
}

pub async fn sqlite_services(
    strategy: CommentCountStrategy,
) -> (Arc<ApplicationServices>, Arc<InMemorySearchMetrics>) {
    let repo = Arc::new(SqliteArticleSearchRepository::new(seeded_pool().await));
    build_services(repo, settings(strategy))
}

pub async fn make_test_router() -> axum::Router {
    let (services, _) = sqlite_services(CommentCountStrategy::default()).await;
    build_router(
        HttpState { services },
        &["http://localhost:3000".to_string()],
    )
}
