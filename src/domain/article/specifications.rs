// src/domain/article/specifications.rs
use crate::domain::article::entity::ArticleSummary;
use crate::domain::article::search::{ArticleSearchType, SearchCondition};
use regex::Regex;

/// Storage-level filter over articles. `None` at the call sites means
/// "match everything".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticlePredicate {
    TitleContains(String),
    ContentContains(String),
    TitleOrContentContains(String),
    AuthorNameContains(String),
}

impl ArticlePredicate {
    pub fn keyword(&self) -> &str {
        match self {
            Self::TitleContains(keyword)
            | Self::ContentContains(keyword)
            | Self::TitleOrContentContains(keyword)
            | Self::AuthorNameContains(keyword) => keyword,
        }
    }

    /// Whether evaluating the predicate needs columns of the author entity.
    pub const fn references_author(&self) -> bool {
        matches!(self, Self::AuthorNameContains(_))
    }

    /// Unanchored regular expression matching the keyword literally with
    /// Unicode case folding. Storage evaluates the same pattern via `REGEXP`.
    pub fn contains_pattern(&self) -> String {
        format!("(?i){}", regex::escape(self.keyword()))
    }

    /// Evaluate the predicate against an already loaded summary.
    pub fn matches(&self, article: &ArticleSummary) -> bool {
        let Ok(pattern) = Regex::new(&self.contains_pattern()) else {
            return false;
        };
        match self {
            Self::TitleContains(_) => pattern.is_match(&article.title),
            Self::ContentContains(_) => pattern.is_match(&article.content),
            Self::TitleOrContentContains(_) => {
                pattern.is_match(&article.title) || pattern.is_match(&article.content)
            }
            Self::AuthorNameContains(_) => pattern.is_match(article.author.as_str()),
        }
    }
}

pub struct PredicateBuilder;

impl PredicateBuilder {
    /// Turn a search condition into a filter. Absent or blank conditions
    /// yield `None`. The keyword is kept verbatim (no trimming), so inner and
    /// surrounding whitespace are part of the substring to match.
    pub fn build(condition: Option<&SearchCondition>) -> Option<ArticlePredicate> {
        let condition = condition.filter(|cond| !cond.is_blank())?;
        let keyword = condition.keyword().to_owned();

        let predicate = match condition.search_type() {
            ArticleSearchType::Title => ArticlePredicate::TitleContains(keyword),
            ArticleSearchType::Content => ArticlePredicate::ContentContains(keyword),
            ArticleSearchType::TitleAndContent => {
                ArticlePredicate::TitleOrContentContains(keyword)
            }
            ArticleSearchType::Author => ArticlePredicate::AuthorNameContains(keyword),
        };
        Some(predicate)
    }
}

/// Shape of the row-count query that accompanies a page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPlan {
    /// Count over the article table alone.
    ArticlesOnly,
    /// Count with the same author join the content query uses.
    WithAuthorJoin,
}

impl CountPlan {
    /// Only author searches reference author columns, so only they pay for
    /// the join in the count query.
    pub fn needs_join_for_count(condition: Option<&SearchCondition>) -> bool {
        condition.is_some_and(|cond| cond.search_type() == ArticleSearchType::Author)
    }

    pub fn for_condition(condition: Option<&SearchCondition>) -> Self {
        if Self::needs_join_for_count(condition) {
            Self::WithAuthorJoin
        } else {
            Self::ArticlesOnly
        }
    }

    pub const fn joins_author(self) -> bool {
        matches!(self, Self::WithAuthorJoin)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArticlesOnly => "articles-only",
            Self::WithAuthorJoin => "with-author-join",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{ArticleId, AuthorName};
    use chrono::Utc;

    fn article(title: &str, content: &str, author: &str) -> ArticleSummary {
        ArticleSummary {
            id: ArticleId::new(1).unwrap(),
            title: title.into(),
            content: content.into(),
            author: AuthorName::new(author).unwrap(),
            view_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn blank_or_absent_condition_builds_no_predicate() {
        assert_eq!(PredicateBuilder::build(None), None);
        for kind in ArticleSearchType::ALL {
            assert_eq!(PredicateBuilder::build(Some(&SearchCondition::new("", kind))), None);
            assert_eq!(
                PredicateBuilder::build(Some(&SearchCondition::new(" \t ", kind))),
                None
            );
        }
    }

    #[test]
    fn each_type_maps_to_its_predicate() {
        let cases = [
            (ArticleSearchType::Title, ArticlePredicate::TitleContains("kw".into())),
            (ArticleSearchType::Content, ArticlePredicate::ContentContains("kw".into())),
            (
                ArticleSearchType::TitleAndContent,
                ArticlePredicate::TitleOrContentContains("kw".into()),
            ),
            (ArticleSearchType::Author, ArticlePredicate::AuthorNameContains("kw".into())),
        ];
        for (kind, expected) in cases {
            let built = PredicateBuilder::build(Some(&SearchCondition::new("kw", kind)));
            assert_eq!(built, Some(expected));
        }
    }

    #[test]
    fn keyword_whitespace_is_preserved() {
        let cond = SearchCondition::new(" hello world ", ArticleSearchType::Title);
        let predicate = PredicateBuilder::build(Some(&cond)).unwrap();
        assert_eq!(predicate.keyword(), " hello world ");
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let predicate = ArticlePredicate::TitleContains("hello".into());
        assert!(predicate.matches(&article("Hello World", "", "a")));
        assert!(!predicate.matches(&article("goodbye", "", "a")));

        let predicate = ArticlePredicate::TitleOrContentContains("BODY".into());
        assert!(predicate.matches(&article("t", "some body text", "a")));

        let predicate = ArticlePredicate::AuthorNameContains("thor2".into());
        assert!(predicate.matches(&article("t", "c", "author2")));
        assert!(!predicate.matches(&article("thor2", "thor2", "author1")));
    }

    #[test]
    fn matching_folds_non_ascii_case() {
        let article = article("Über Rust", "Straße und ÇA", "Émilie");
        for keyword in ["Über", "über", "ÜBER"] {
            assert!(ArticlePredicate::TitleContains(keyword.into()).matches(&article));
        }
        assert!(ArticlePredicate::ContentContains("ça".into()).matches(&article));
        assert!(ArticlePredicate::AuthorNameContains("émilie".into()).matches(&article));
        assert!(!ArticlePredicate::TitleContains("uber".into()).matches(&article));
    }

    #[test]
    fn keyword_metacharacters_match_literally() {
        let predicate = ArticlePredicate::TitleContains("1.5*".into());
        assert_eq!(predicate.contains_pattern(), r"(?i)1\.5\*");
        assert!(predicate.matches(&article("version 1.5* notes", "", "a")));
        assert!(!predicate.matches(&article("version 105 notes", "", "a")));
    }

    #[test]
    fn only_author_predicates_reference_author() {
        assert!(ArticlePredicate::AuthorNameContains("a".into()).references_author());
        assert!(!ArticlePredicate::TitleOrContentContains("a".into()).references_author());
    }

    #[test]
    fn count_join_only_for_author_searches() {
        assert!(!CountPlan::needs_join_for_count(None));
        for kind in ArticleSearchType::ALL {
            let cond = SearchCondition::new("x", kind);
            assert_eq!(
                CountPlan::needs_join_for_count(Some(&cond)),
                kind == ArticleSearchType::Author
            );
        }
        assert_eq!(CountPlan::for_condition(None), CountPlan::ArticlesOnly);
        let author = SearchCondition::new("x", ArticleSearchType::Author);
        assert!(CountPlan::for_condition(Some(&author)).joins_author());
    }
}
