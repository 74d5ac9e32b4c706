// Domain types for the review hub: the canonical review shape shared by
// every pipeline stage, plus the identity and ordering types the views use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attribution block carried by every canonical review.
///
/// External records synthesize a stable `uid` and may fall back to a
/// placeholder avatar; locally authored reviews copy this from the
/// submitter's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAuthor {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub uid: String,
}

/// A canonical customer review, regardless of where it came from.
///
/// `rating` is a star value in 1..=5; externally sourced records whose
/// rating could not be parsed carry 0 instead. `title` is always present
/// but empty for external reviews, which never carry one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: ReviewAuthor,
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Profile of an authenticated submitter, as resolved by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub uid: String,
}

impl From<UserProfile> for ReviewAuthor {
    fn from(user: UserProfile) -> Self {
        ReviewAuthor {
            name: user.name,
            avatar: user.avatar,
            uid: user.uid,
        }
    }
}

/// Display orderings offered by the feed's sort selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    Oldest,
    Highest,
    Lowest,
}

impl SortOrder {
    /// Parse the user-facing sort token used by the CLI and the widget
    pub fn parse(value: &str) -> Option<SortOrder> {
        match value {
            "newest" => Some(SortOrder::Newest),
            "oldest" => Some(SortOrder::Oldest),
            "highest" => Some(SortOrder::Highest),
            "lowest" => Some(SortOrder::Lowest),
            _ => None,
        }
    }
}
