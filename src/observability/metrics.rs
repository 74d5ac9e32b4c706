//! Metrics module for the review hub
//!
//! This module provides a straightforward API for recording metrics using
//! the standard Prometheus naming conventions.

use std::fmt;
use std::sync::OnceLock;

use tracing::info;

/// Enum representing all metric names used in the system
/// This eliminates magic strings and provides compile-time safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Heartbeat
    Heartbeat,

    // Source metrics
    SourcesFetchSuccess,
    SourcesFetchError,
    SourcesBatchSize,

    // Normalize metrics
    NormalizeReviewsProcessed,
    NormalizeWarnings,

    // Validation metrics
    ValidationSubmissionsAccepted,
    ValidationSubmissionsRejected,
    ValidationIssuesDetected,

    // Feed metrics
    FeedReviewsSubmitted,
    FeedBatchesIngested,
    FeedBatchSize,
    FeedViewsServed,

    // Title suggestion metrics
    TitleSuggestionsSuccess,
    TitleSuggestionsError,
}

impl MetricName {
    /// Get the metric name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            // Heartbeat
            MetricName::Heartbeat => "review_hub_heartbeat_total",

            // Source metrics
            MetricName::SourcesFetchSuccess => "review_hub_sources_fetch_success_total",
            MetricName::SourcesFetchError => "review_hub_sources_fetch_error_total",
            MetricName::SourcesBatchSize => "review_hub_sources_batch_size",

            // Normalize metrics
            MetricName::NormalizeReviewsProcessed => "review_hub_normalize_reviews_processed_total",
            MetricName::NormalizeWarnings => "review_hub_normalize_warnings_total",

            // Validation metrics
            MetricName::ValidationSubmissionsAccepted => {
                "review_hub_validation_submissions_accepted_total"
            }
            MetricName::ValidationSubmissionsRejected => {
                "review_hub_validation_submissions_rejected_total"
            }
            MetricName::ValidationIssuesDetected => "review_hub_validation_issues_detected_total",

            // Feed metrics
            MetricName::FeedReviewsSubmitted => "review_hub_feed_reviews_submitted_total",
            MetricName::FeedBatchesIngested => "review_hub_feed_batches_ingested_total",
            MetricName::FeedBatchSize => "review_hub_feed_batch_size",
            MetricName::FeedViewsServed => "review_hub_feed_views_served_total",

            // Title suggestion metrics
            MetricName::TitleSuggestionsSuccess => "review_hub_title_suggestions_success_total",
            MetricName::TitleSuggestionsError => "review_hub_title_suggestions_error_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static PROMETHEUS_HANDLE: OnceLock<metrics_exporter_prometheus::PrometheusHandle> = OnceLock::new();

/// Initialize the metrics system and install the Prometheus recorder
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {}", e))?;

    PROMETHEUS_HANDLE.set(handle).ok();
    info!("Metrics system initialized");
    Ok(())
}

/// Render all collected metrics in Prometheus exposition format
pub fn render() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(|handle| handle.render())
}

/// Record a heartbeat for liveness checks
pub fn heartbeat() {
    ::metrics::counter!(MetricName::Heartbeat.as_str()).increment(1);
}

// ============================================================================
// Source Metrics
// ============================================================================

pub mod sources {
    use super::MetricName;

    /// Record a successful external fetch
    pub fn fetch_success() {
        ::metrics::counter!(MetricName::SourcesFetchSuccess.as_str()).increment(1);
    }

    /// Record a failed external fetch
    pub fn fetch_error() {
        ::metrics::counter!(MetricName::SourcesFetchError.as_str()).increment(1);
    }

    /// Record the size of a fetched batch
    pub fn reviews_fetched(count: usize) {
        ::metrics::histogram!(MetricName::SourcesBatchSize.as_str()).record(count as f64);
    }
}

// ============================================================================
// Normalize Metrics
// ============================================================================

pub mod normalize {
    use super::MetricName;

    /// Record that a raw record was normalized into a review
    pub fn review_processed() {
        ::metrics::counter!(MetricName::NormalizeReviewsProcessed.as_str()).increment(1);
    }

    /// Record a degradation warning emitted during normalization
    pub fn warning_logged() {
        ::metrics::counter!(MetricName::NormalizeWarnings.as_str()).increment(1);
    }
}

// ============================================================================
// Validation Metrics
// ============================================================================

pub mod validation {
    use super::MetricName;

    /// Record an accepted submission
    pub fn submission_accepted() {
        ::metrics::counter!(MetricName::ValidationSubmissionsAccepted.as_str()).increment(1);
    }

    /// Record a rejected submission along with its issue count
    pub fn submission_rejected(issue_count: usize) {
        ::metrics::counter!(MetricName::ValidationSubmissionsRejected.as_str()).increment(1);
        ::metrics::counter!(MetricName::ValidationIssuesDetected.as_str())
            .increment(issue_count as u64);
    }
}

// ============================================================================
// Feed Metrics
// ============================================================================

pub mod feed {
    use super::MetricName;

    /// Record a local review entering the feed
    pub fn review_submitted() {
        ::metrics::counter!(MetricName::FeedReviewsSubmitted.as_str()).increment(1);
    }

    /// Record an external batch entering the feed
    pub fn batch_ingested(size: usize) {
        ::metrics::counter!(MetricName::FeedBatchesIngested.as_str()).increment(1);
        ::metrics::histogram!(MetricName::FeedBatchSize.as_str()).record(size as f64);
    }

    /// Record a filtered and sorted view being served
    pub fn view_served() {
        ::metrics::counter!(MetricName::FeedViewsServed.as_str()).increment(1);
    }
}

// ============================================================================
// Title Suggestion Metrics
// ============================================================================

pub mod title {
    use super::MetricName;

    /// Record a successful title suggestion
    pub fn suggestion_success() {
        ::metrics::counter!(MetricName::TitleSuggestionsSuccess.as_str()).increment(1);
    }

    /// Record a failed title suggestion
    pub fn suggestion_error() {
        ::metrics::counter!(MetricName::TitleSuggestionsError.as_str()).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_follow_prometheus_conventions() {
        let counters = [
            MetricName::Heartbeat,
            MetricName::SourcesFetchSuccess,
            MetricName::SourcesFetchError,
            MetricName::NormalizeReviewsProcessed,
            MetricName::NormalizeWarnings,
            MetricName::ValidationSubmissionsAccepted,
            MetricName::ValidationSubmissionsRejected,
            MetricName::ValidationIssuesDetected,
            MetricName::FeedReviewsSubmitted,
            MetricName::FeedBatchesIngested,
            MetricName::FeedViewsServed,
            MetricName::TitleSuggestionsSuccess,
            MetricName::TitleSuggestionsError,
        ];

        for metric in counters {
            assert!(metric.as_str().starts_with("review_hub_"));
            assert!(metric.as_str().ends_with("_total"));
        }

        assert_eq!(
            MetricName::FeedBatchSize.to_string(),
            "review_hub_feed_batch_size"
        );
    }
}
