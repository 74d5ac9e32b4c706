use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::common::constants::{EXTERNAL_UID_PREFIX, FALLBACK_AVATAR_BASE, RATING_MAX, RATING_UNKNOWN};
use crate::domain::{Review, ReviewAuthor};

/// Author block as it appears on a raw source record; both fields are
/// routinely missing or null in the wild
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A raw review record as returned by an external source, before any
/// canonicalization. Every field is optional at the wire level; the
/// normalizer decides what each absence degrades to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExternalReview {
    #[serde(default)]
    pub author: Option<RawAuthor>,
    /// Left as raw JSON because sources disagree on the type: integers,
    /// floats, numeric strings, and labels like "4_stars" all occur
    #[serde(default)]
    pub rating: serde_json::Value,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// A canonical review produced from one raw record, together with any
/// warnings emitted while degrading malformed fields
#[derive(Debug, Clone)]
pub struct NormalizedReview {
    pub review: Review,
    pub warnings: Vec<String>,
}

/// Trait for normalizing raw external records into canonical reviews.
///
/// Normalization never rejects a record: malformed fields degrade to
/// documented defaults and the degradation is reported as a warning.
/// `index` is the record's position within its fetched batch and feeds
/// the synthesized uid and fallback avatar.
pub trait ReviewNormalizer {
    fn normalize(&self, raw: &RawExternalReview, index: usize) -> NormalizedReview;
}

/// Default normalizer for externally sourced review batches
pub struct ExternalReviewNormalizer {
    /// Source identifier embedded in synthesized review ids
    pub source_id: String,
}

static RATING_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

impl ExternalReviewNormalizer {
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
        }
    }

    /// Parse a rating of whatever JSON type the source produced.
    ///
    /// Accepted forms: an integer in 1..=5, a float (truncated), a numeric
    /// string, or a label with an embedded digit run ("4_stars" parses as 4).
    /// Anything else, including out-of-range values, degrades to the unknown
    /// rating with a warning rather than failing the record.
    fn parse_rating(value: &serde_json::Value, warnings: &mut Vec<String>) -> u8 {
        let parsed = match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            serde_json::Value::String(s) => {
                let trimmed = s.trim();
                trimmed.parse::<i64>().ok().or_else(|| {
                    RATING_DIGITS
                        .find(trimmed)
                        .and_then(|m| m.as_str().parse::<i64>().ok())
                })
            }
            _ => None,
        };

        match parsed {
            Some(rating) if (1..=RATING_MAX as i64).contains(&rating) => rating as u8,
            Some(rating) => {
                warnings.push(format!(
                    "rating {} outside 1..={}, treating as unknown",
                    rating, RATING_MAX
                ));
                RATING_UNKNOWN
            }
            None => {
                warnings.push(format!(
                    "rating {} not parseable, treating as unknown",
                    value
                ));
                RATING_UNKNOWN
            }
        }
    }

    /// Parse an ISO 8601 timestamp, falling back to the fetch time
    fn parse_created_at(raw: &str, warnings: &mut Vec<String>) -> DateTime<Utc> {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => parsed.with_timezone(&Utc),
            Err(_) => {
                warnings.push(format!(
                    "created_at {:?} is not an ISO 8601 timestamp, falling back to fetch time",
                    raw
                ));
                Utc::now()
            }
        }
    }
}

impl ReviewNormalizer for ExternalReviewNormalizer {
    fn normalize(&self, raw: &RawExternalReview, index: usize) -> NormalizedReview {
        let mut warnings = Vec::new();

        let created_at = Self::parse_created_at(&raw.created_at, &mut warnings);
        let rating = Self::parse_rating(&raw.rating, &mut warnings);

        // Author name stays None when absent; the avatar falls back to the
        // placeholder service, seeded with the record's 1-based position
        let author = raw.author.clone().unwrap_or_default();
        let avatar = author
            .avatar
            .or_else(|| Some(format!("{}{}", FALLBACK_AVATAR_BASE, index + 1)));

        let review = Review {
            id: format!(
                "{}-{}-{}",
                self.source_id,
                index,
                created_at.timestamp_millis()
            ),
            author: ReviewAuthor {
                name: author.name,
                avatar,
                uid: format!("{}{}", EXTERNAL_UID_PREFIX, index),
            },
            rating,
            // External sources never carry titles; the canonical shape
            // still requires the field, so it is always empty here
            title: String::new(),
            content: raw.content.clone(),
            created_at,
        };

        NormalizedReview { review, warnings }
    }
}
