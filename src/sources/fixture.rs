use tracing::info;

use crate::app::ports::ReviewSourcePort;
use crate::common::constants::FIXTURE_SOURCE;
use crate::common::error::Result;
use crate::pipeline::processing::normalize::RawExternalReview;

/// Bundled batch of raw records, shaped exactly like a live source
/// response, malformed fields included
const FIXTURE_JSON: &str = include_str!("fixture_reviews.json");

/// Deterministic review source used by the demo command and tests.
///
/// Serves the same batch on every fetch, so runs are reproducible
/// without network access. The batch deliberately includes records with
/// missing avatars, a missing author, and unparseable ratings to put the
/// normalizer's degradation paths on display.
pub struct FixtureSource;

impl FixtureSource {
    pub fn source_id(&self) -> &'static str {
        FIXTURE_SOURCE
    }
}

#[async_trait::async_trait]
impl ReviewSourcePort for FixtureSource {
    async fn fetch_reviews(&self, business_profile_id: &str) -> Result<Vec<RawExternalReview>> {
        let records: Vec<RawExternalReview> = serde_json::from_str(FIXTURE_JSON)?;
        info!(
            "Serving {} fixture review records for business profile {}",
            records.len(),
            business_profile_id
        );
        Ok(records)
    }
}
