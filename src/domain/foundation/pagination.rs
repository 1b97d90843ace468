//! Page/limit window over an ordered collection.

use serde::Serialize;

/// Page number used when the caller gives none.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the caller gives none.
pub const DEFAULT_LIMIT: u64 = 5;

/// A 1-based page window.
///
/// Both fields are always at least 1. Raw request values that are absent,
/// non-numeric, or zero fall back to the defaults instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Pagination {
    /// Creates a window, replacing zero values with the defaults.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Coerces raw query-string values, using `defaults` for anything unusable.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, defaults: Pagination) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(defaults.page),
            limit: parse_positive(limit).unwrap_or(defaults.limit),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of leading rows to skip: `(page - 1) * limit`.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
}
