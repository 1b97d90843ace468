//! Segment analytics configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Paging defaults and store-call limits for the segment reports
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Page used when a request omits or garbles `page`
    #[serde(default = "default_page")]
    pub default_page: u64,

    /// Page size used when a request omits or garbles `limit`
    #[serde(default = "default_limit")]
    pub default_limit: u64,

    /// Per-segment lookups in flight for one page (0 = all at once)
    #[serde(default)]
    pub fanout_concurrency: usize,

    /// Deadline for a single store call in seconds
    #[serde(default = "default_store_timeout")]
    pub store_timeout_secs: u64,
}

impl AnalyticsConfig {
    /// Get store timeout as Duration
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }

    /// Validate analytics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_page == 0 || self.default_limit == 0 {
            return Err(ValidationError::InvalidPagination);
        }
        if self.store_timeout_secs == 0 || self.store_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
            default_limit: default_limit(),
            fanout_concurrency: 0,
            store_timeout_secs: default_store_timeout(),
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    5
}

fn default_store_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_list_endpoint() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.default_page, 1);
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.fanout_concurrency, 0);
        assert_eq!(config.store_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_page_size() {
        let config = AnalyticsConfig {
            default_limit: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPagination)
        ));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = AnalyticsConfig {
            store_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
