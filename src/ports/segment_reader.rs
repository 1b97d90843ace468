use std::time::Duration;

use async_trait::async_trait;

use crate::domain::foundation::{Pagination, SegmentId};
use crate::domain::segment::{GenderGroup, Segment};

/// Read-only port over the segments and users collections.
#[async_trait]
pub trait SegmentReader: Send + Sync {
    /// Returns one page of segments in insertion order.
    async fn list_segments(&self, pagination: Pagination) -> Result<Vec<Segment>, SegmentError>;

    /// Looks up a single segment.
    async fn find_segment(&self, id: SegmentId) -> Result<Option<Segment>, SegmentError>;

    /// Total number of segments across all pages.
    async fn count_segments(&self) -> Result<u64, SegmentError>;

    /// Groups the users referencing a segment by gender, ordered by gender.
    /// A segment nobody references yields an empty list.
    async fn gender_groups(&self, id: SegmentId) -> Result<Vec<GenderGroup>, SegmentError>;
}

/// Errors that can occur during segment operations
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("Segment with id {0} not found.")]
    NotFound(SegmentId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl From<sqlx::Error> for SegmentError {
    fn from(err: sqlx::Error) -> Self {
        SegmentError::Store(err.to_string())
    }
}
