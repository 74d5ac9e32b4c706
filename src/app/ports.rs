use async_trait::async_trait;

use crate::common::error::Result;
use crate::domain::UserProfile;
use crate::pipeline::processing::normalize::RawExternalReview;

/// Fetches raw review records for a business profile from an external
/// source. Implementations return records as-is; canonicalization is the
/// normalizer's job.
#[async_trait]
pub trait ReviewSourcePort: Send + Sync {
    async fn fetch_reviews(&self, business_profile_id: &str) -> Result<Vec<RawExternalReview>>;
}

/// Generates a short review title from drafted review content
#[async_trait]
pub trait TitleSuggestPort: Send + Sync {
    async fn suggest_title(&self, content: &str) -> Result<String>;
}

/// Resolves the currently authenticated submitter, if there is one.
/// Submission itself never consults this; callers resolve the profile
/// up front and pass it in explicitly.
pub trait IdentityPort: Send + Sync {
    fn current_user(&self) -> Option<UserProfile>;
}
