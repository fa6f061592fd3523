use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Message returned when a post is submitted without a title or body.
pub const TITLE_AND_BODY_REQUIRED: &str = "Title and body are required";

/// Message returned when a search is issued without a term.
pub const SEARCH_QUERY_REQUIRED: &str = "Search query is required";

/// Post entity - a single anonymous submission.
///
/// `id`, `created_at` and `updated_at` are assigned by storage. Posts are never
/// updated, so `updated_at` always equals `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the submitter when creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

impl NewPost {
    /// Build a post payload, rejecting a title or body that is blank once trimmed.
    ///
    /// The fields are kept exactly as supplied; trimming only decides presence.
    pub fn validate(title: String, body: String) -> Result<Self, DomainError> {
        if title.trim().is_empty() || body.trim().is_empty() {
            return Err(DomainError::validation(TITLE_AND_BODY_REQUIRED));
        }
        Ok(Self { title, body })
    }
}

/// Accept a search term unless it is absent or blank once trimmed.
pub fn search_term(raw: Option<String>) -> Result<String, DomainError> {
    match raw {
        Some(term) if !term.trim().is_empty() => Ok(term),
        _ => Err(DomainError::validation(SEARCH_QUERY_REQUIRED)),
    }
}

/// Case-insensitive substring test used by storage backends without `LIKE`.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Build a `LIKE`/`ILIKE` pattern matching `term` anywhere in a value.
///
/// `\`, `%` and `_` are escaped with `\` so the term always matches literally.
/// Case is left as supplied; folding belongs to the database operator.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_and_preserves_fields() {
        let post = NewPost::validate("  hello ".into(), "world\n".into()).unwrap();
        assert_eq!(post.title, "  hello ");
        assert_eq!(post.body, "world\n");
    }

    #[test]
    fn validate_rejects_blank_fields() {
        for (title, body) in [("", "x"), ("x", ""), ("   ", "x"), ("x", "\t\n")] {
            let err = NewPost::validate(title.into(), body.into()).unwrap_err();
            assert_eq!(err.to_string(), TITLE_AND_BODY_REQUIRED);
        }
    }

    #[test]
    fn search_term_requires_content() {
        assert_eq!(search_term(Some("hello".into())).unwrap(), "hello");
        for raw in [None, Some(String::new()), Some("  ".into())] {
            assert_eq!(search_term(raw).unwrap_err().to_string(), SEARCH_QUERY_REQUIRED);
        }
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("École"), "%École%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn contains_ignore_case_matches_substrings() {
        assert!(contains_ignore_case("Say HELLO there", "hello"));
        assert!(contains_ignore_case("hello world", "LO WO"));
        assert!(!contains_ignore_case("goodbye", "hello"));
    }

    #[test]
    fn post_serializes_timestamps_as_strings() {
        let now = Utc::now();
        let post = Post {
            id: 7,
            title: "t".into(),
            body: "b".into(),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json["created_at"].is_string());
        assert_eq!(json["created_at"], json["updated_at"]);
    }
}
