// src/config.rs
use crate::application::queries::articles::SearchSettings;
use crate::domain::article::CommentCountStrategy;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    allowed_origins: Vec<String>,
    search: SearchSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://board.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        let defaults = SearchSettings::default();
        let board_page_size =
            parse_positive(&lookup, "BOARD_PAGE_SIZE", defaults.board_page_size)?;
        let window_size = parse_positive(&lookup, "BOARD_WINDOW_SIZE", defaults.window_size)?;

        let strategy = match lookup("COMMENT_COUNT_STRATEGY") {
            Some(raw) => raw
                .parse::<CommentCountStrategy>()
                .map_err(|err| ConfigError::Invalid(err.to_string()))?,
            None => defaults.strategy,
        };

        Ok(Self {
            database_url,
            listen_addr,
            allowed_origins,
            search: SearchSettings {
                strategy,
                board_page_size,
                window_size,
            },
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Return the allowed CORS origins as configured.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn search(&self) -> SearchSettings {
        self.search
    }
}

fn parse_positive<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}
