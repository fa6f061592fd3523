use super::Post;
use crate::error::DomainError;

const DEFAULT_LIMIT: u64 = 10;
const DEFAULT_OFFSET: u64 = 0;

/// Largest accepted `limit`/`offset`; PostgreSQL binds both as `BIGINT`.
pub const MAX_WINDOW_VALUE: u64 = i64::MAX as u64;

/// Pagination window bounding a list or search result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u64,
    pub offset: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl PageWindow {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Parse raw query-string values.
    ///
    /// Absent or empty values fall back to the defaults; anything that is not a
    /// non-negative integer up to [`MAX_WINDOW_VALUE`] is rejected.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Result<Self, DomainError> {
        Ok(Self {
            limit: parse_param("limit", limit, DEFAULT_LIMIT)?,
            offset: parse_param("offset", offset, DEFAULT_OFFSET)?,
        })
    }

    /// Clamp `limit` to `max`, if a maximum is configured.
    pub fn capped(self, max: Option<u64>) -> Self {
        match max {
            Some(max) if self.limit > max => Self { limit: max, ..self },
            _ => self,
        }
    }
}

fn parse_param(name: &str, raw: Option<&str>, default: u64) -> Result<u64, DomainError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<u64>()
            .ok()
            .filter(|v| *v <= MAX_WINDOW_VALUE)
            .ok_or_else(|| {
                DomainError::validation(format!("{name} must be a non-negative integer"))
            }),
    }
}

/// One page of posts plus the number of rows matching the query overall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: u64,
}
