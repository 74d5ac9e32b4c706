use tracing::{error, info};

use crate::app::ports::TitleSuggestPort;
use crate::pipeline::processing::validate::{
    SubmissionField, ValidationConfig, ValidationError,
};

/// Use case for generating a review title from drafted content.
///
/// Failures never escape as hard errors: whatever goes wrong, the caller
/// gets a field-level issue it can pin to the form, and the rest of the
/// submission flow is unaffected.
pub struct SuggestTitle {
    suggester: Box<dyn TitleSuggestPort>,
    config: ValidationConfig,
}

impl SuggestTitle {
    pub fn new(suggester: Box<dyn TitleSuggestPort>) -> Self {
        Self {
            suggester,
            config: ValidationConfig::default(),
        }
    }

    pub fn with_config(suggester: Box<dyn TitleSuggestPort>, config: ValidationConfig) -> Self {
        Self { suggester, config }
    }

    /// Ask the title model for a suggestion once the draft is long enough.
    ///
    /// Drafts below the content minimum are rejected locally without
    /// touching the model; a model failure comes back as an issue on the
    /// title field.
    pub async fn run(&self, content: &str) -> Result<String, ValidationError> {
        if content.chars().count() < self.config.min_content_chars {
            return Err(ValidationError::single(
                SubmissionField::Content,
                "Please write a review before generating a title.",
            ));
        }

        match self.suggester.suggest_title(content).await {
            Ok(title) => {
                crate::observability::metrics::title::suggestion_success();
                info!("Generated review title: {}", title);
                Ok(title)
            }
            Err(e) => {
                crate::observability::metrics::title::suggestion_error();
                error!("Failed to generate review title: {}", e);
                Err(ValidationError::single(
                    SubmissionField::Title,
                    "Could not generate title.",
                ))
            }
        }
    }
}
