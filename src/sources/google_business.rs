use std::time::Duration;

use serde::Deserialize;
use tracing::{info, instrument};

use crate::app::ports::ReviewSourcePort;
use crate::common::constants::GOOGLE_BUSINESS_SOURCE;
use crate::common::error::{Result, ReviewHubError};
use crate::config::SourceConfig;
use crate::pipeline::processing::normalize::{RawAuthor, RawExternalReview};

/// Review source standing in for the Google Business Profile reviews
/// endpoint. The actual endpoint is a public placeholder API whose
/// comment records are mapped field-for-field onto raw review records;
/// fields the placeholder does not carry are left absent for the
/// normalizer to degrade.
pub struct GoogleBusinessSource {
    client: reqwest::Client,
    endpoint: String,
}

/// Comment record as served by the placeholder API
#[derive(Debug, Clone, Deserialize)]
struct PlaceholderComment {
    name: String,
    body: String,
}

impl From<PlaceholderComment> for RawExternalReview {
    fn from(comment: PlaceholderComment) -> Self {
        RawExternalReview {
            author: Some(RawAuthor {
                name: Some(comment.name),
                avatar: None,
            }),
            // The placeholder carries neither ratings nor timestamps
            rating: serde_json::Value::Null,
            content: comment.body,
            created_at: String::new(),
        }
    }
}

impl GoogleBusinessSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Build a source from configuration, applying the request timeout
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn source_id(&self) -> &'static str {
        GOOGLE_BUSINESS_SOURCE
    }
}

#[async_trait::async_trait]
impl ReviewSourcePort for GoogleBusinessSource {
    #[instrument(skip(self))]
    async fn fetch_reviews(&self, business_profile_id: &str) -> Result<Vec<RawExternalReview>> {
        info!(
            "Fetching external reviews for business profile {}",
            business_profile_id
        );

        let response = self.client.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(ReviewHubError::Api {
                message: format!("review source returned status {}", response.status()),
            });
        }

        let comments: Vec<PlaceholderComment> = response.json().await?;
        let records: Vec<RawExternalReview> =
            comments.into_iter().map(RawExternalReview::from).collect();

        info!("Successfully fetched {} raw review records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_maps_onto_raw_record() {
        let comment = PlaceholderComment {
            name: "id labore ex et quam laborum".to_string(),
            body: "laudantium enim quasi est quidem magnam voluptate ipsam".to_string(),
        };

        let raw: RawExternalReview = comment.into();

        let author = raw.author.unwrap();
        assert_eq!(author.name.as_deref(), Some("id labore ex et quam laborum"));
        assert_eq!(author.avatar, None);
        assert!(raw.rating.is_null());
        assert_eq!(
            raw.content,
            "laudantium enim quasi est quidem magnam voluptate ipsam"
        );
        assert!(raw.created_at.is_empty());
    }

    #[test]
    fn test_from_config_applies_endpoint() {
        let source = GoogleBusinessSource::from_config(&SourceConfig {
            business_profile_id: "business-123".to_string(),
            endpoint: "https://example.com/comments?postId=1".to_string(),
            timeout_seconds: 5,
        })
        .unwrap();

        assert_eq!(source.endpoint, "https://example.com/comments?postId=1");
        assert_eq!(source.source_id(), "google");
    }
}
