//! Tuning shared by the segment query handlers.

use std::future::Future;
use std::time::Duration;

use crate::config::AnalyticsConfig;
use crate::domain::foundation::Pagination;
use crate::ports::SegmentError;

/// Limits applied to every store call the segment handlers make.
#[derive(Debug, Clone, Copy)]
pub struct SegmentQuerySettings {
    /// Window used when the request supplies no usable page/limit.
    pub default_pagination: Pagination,
    /// Maximum per-segment lookups in flight; 0 means one per segment on the page.
    pub fanout_concurrency: usize,
    /// Deadline for a single store call.
    pub store_timeout: Duration,
}

impl SegmentQuerySettings {
    /// Runs a store call under the configured deadline.
    pub(crate) async fn bounded<T, F>(&self, call: F) -> Result<T, SegmentError>
    where
        F: Future<Output = Result<T, SegmentError>>,
    {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .map_err(|_| SegmentError::Timeout(self.store_timeout))?
    }

    /// Fan-out width for a page of `segments` rows.
    pub(crate) fn fanout_for(&self, segments: usize) -> usize {
        match self.fanout_concurrency {
            0 => segments.max(1),
            n => n,
        }
    }
}

impl Default for SegmentQuerySettings {
    fn default() -> Self {
        Self {
            default_pagination: Pagination::default(),
            fanout_concurrency: 0,
            store_timeout: Duration::from_secs(10),
        }
    }
}

impl From<&AnalyticsConfig> for SegmentQuerySettings {
    fn from(config: &AnalyticsConfig) -> Self {
        Self {
            default_pagination: Pagination::new(config.default_page, config.default_limit),
            fanout_concurrency: config.fanout_concurrency,
            store_timeout: config.store_timeout(),
        }
    }
}
