// src/domain/article/search.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Field (or field combination) a keyword is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleSearchType {
    Title,
    Content,
    #[default]
    TitleAndContent,
    Author,
}

impl ArticleSearchType {
    pub const ALL: [Self; 4] = [
        Self::Title,
        Self::Content,
        Self::TitleAndContent,
        Self::Author,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Content => "CONTENT",
            Self::TitleAndContent => "TITLE_AND_CONTENT",
            Self::Author => "AUTHOR",
        }
    }
}

impl fmt::Display for ArticleSearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleSearchType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| {
                DomainError::InvalidCondition(format!("unknown search type: {value}"))
            })
    }
}

/// Keyword plus the field selector of an article search.
///
/// A blank keyword means "no condition": every article matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCondition {
    keyword: String,
    search_type: ArticleSearchType,
}

impl SearchCondition {
    pub fn new(keyword: impl Into<String>, search_type: ArticleSearchType) -> Self {
        Self {
            keyword: keyword.into(),
            search_type,
        }
    }

    /// Build a condition from raw request values. A missing type falls back to
    /// [`ArticleSearchType::TitleAndContent`]; an unknown one is rejected.
    pub fn parse(keyword: Option<&str>, search_type: Option<&str>) -> DomainResult<Self> {
        let search_type = match search_type.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse()?,
            None => ArticleSearchType::default(),
        };
        Ok(Self::new(keyword.unwrap_or_default(), search_type))
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub const fn search_type(&self) -> ArticleSearchType {
        self.search_type
    }

    pub fn is_blank(&self) -> bool {
        self.keyword.trim().is_empty()
    }
}
