use tracing::{error, info, warn};

use crate::app::ports::ReviewSourcePort;
use crate::pipeline::processing::normalize::{ExternalReviewNormalizer, ReviewNormalizer};
use crate::pipeline::storage::in_memory::ReviewFeed;

/// Outcome of the one-time external fetch at session start.
///
/// There is deliberately no error variant: an unreachable or misbehaving
/// source degrades to `SourceUnavailable` and the widget carries on with
/// local reviews only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The batch was fetched, normalized, and prepended to the feed
    Loaded { count: usize },
    /// The source was skipped or failed; the feed was left untouched
    SourceUnavailable,
}

/// Use case for ingesting the externally sourced review batch into the feed
pub struct IngestExternalReviews {
    source: Box<dyn ReviewSourcePort>,
    normalizer: Box<dyn ReviewNormalizer + Send + Sync>,
}

impl IngestExternalReviews {
    pub fn new(
        source: Box<dyn ReviewSourcePort>,
        normalizer: Box<dyn ReviewNormalizer + Send + Sync>,
    ) -> Self {
        Self { source, normalizer }
    }

    /// Create a use case with the default normalizer for the given source
    pub fn with_default_normalizer(source: Box<dyn ReviewSourcePort>, source_id: &str) -> Self {
        Self {
            source,
            normalizer: Box::new(ExternalReviewNormalizer::new(source_id)),
        }
    }

    /// Fetch the external batch, normalize every record, and prepend the
    /// results to the feed in batch order.
    ///
    /// An empty business profile id skips the fetch entirely, and a fetch
    /// failure is logged and swallowed; in both cases the feed is left as
    /// it was.
    pub async fn run(&self, business_profile_id: &str, feed: &ReviewFeed) -> IngestOutcome {
        if business_profile_id.is_empty() {
            warn!("No business profile id configured, skipping external review fetch");
            return IngestOutcome::SourceUnavailable;
        }

        let raw_records = match self.source.fetch_reviews(business_profile_id).await {
            Ok(records) => {
                crate::observability::metrics::sources::fetch_success();
                crate::observability::metrics::sources::reviews_fetched(records.len());
                records
            }
            Err(e) => {
                crate::observability::metrics::sources::fetch_error();
                error!("Failed to fetch external reviews: {}", e);
                return IngestOutcome::SourceUnavailable;
            }
        };

        let mut batch = Vec::with_capacity(raw_records.len());
        for (index, record) in raw_records.iter().enumerate() {
            let normalized = self.normalizer.normalize(record, index);

            crate::observability::metrics::normalize::review_processed();
            for warning in &normalized.warnings {
                warn!("Normalization warning for record {}: {}", index, warning);
                crate::observability::metrics::normalize::warning_logged();
            }

            batch.push(normalized.review);
        }

        let count = batch.len();
        feed.ingest_batch(batch);
        crate::observability::metrics::feed::batch_ingested(count);
        info!("Ingested {} external reviews into the feed", count);

        IngestOutcome::Loaded { count }
    }
}
