//! HTTP DTOs for segment endpoints.
//!
//! Every body is wrapped in the dashboard's `{ success, ... }` envelope.
//! The domain view models already serialize with the field names the
//! client expects, so they are re-exported directly.

pub use crate::domain::segment::{Segment, SegmentGenderData, SegmentMetaData};

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the segment list.
///
/// Kept as raw strings so unusable values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListSegmentsParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Body accepted by the segment update endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSegmentRequest {
    pub name: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Success envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<usize>,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            total_count: None,
        }
    }

    pub fn with_total_count(data: T, total_count: usize) -> Self {
        Self {
            success: true,
            data,
            total_count: Some(total_count),
        }
    }
}

/// Number of segments across all pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentCountResponse {
    pub total_count: u64,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: code.to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new("NOT_IMPLEMENTED", message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new("TIMEOUT", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
