use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::{Review, UserProfile};
use crate::pipeline::processing::validate::{
    SubmissionInput, SubmissionValidator, ValidationError,
};
use crate::pipeline::storage::in_memory::ReviewFeed;

/// Use case for submitting a locally authored review to the feed.
///
/// The submitter's profile is passed in explicitly; whoever hosts the
/// widget decides how a signed-in user is resolved. A review that fails
/// validation never reaches the feed.
pub struct SubmitReview {
    validator: SubmissionValidator,
}

impl SubmitReview {
    pub fn new() -> Self {
        Self {
            validator: SubmissionValidator::new(),
        }
    }

    pub fn with_validator(validator: SubmissionValidator) -> Self {
        Self { validator }
    }

    /// Validate the form input and prepend the resulting review.
    ///
    /// On success the created review is returned with a fresh unique id,
    /// the submitter's attribution, and a submission timestamp.
    pub fn submit(
        &self,
        user: &UserProfile,
        input: SubmissionInput,
        feed: &ReviewFeed,
    ) -> Result<Review, ValidationError> {
        if let Err(err) = self.validator.validate(&input) {
            crate::observability::metrics::validation::submission_rejected(err.issues.len());
            return Err(err);
        }
        crate::observability::metrics::validation::submission_accepted();

        let review = Review {
            id: Uuid::new_v4().to_string(),
            author: user.clone().into(),
            rating: input.rating,
            title: input.title,
            content: input.content,
            created_at: Utc::now(),
        };

        feed.submit(review.clone());
        crate::observability::metrics::feed::review_submitted();
        info!("Review {} submitted by {}", review.id, review.author.uid);

        Ok(review)
    }
}

impl Default for SubmitReview {
    fn default() -> Self {
        Self::new()
    }
}
