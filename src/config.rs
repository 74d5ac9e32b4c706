use serde::Deserialize;
use std::fs;

use crate::common::constants::{MIN_CONTENT_CHARS, MIN_TITLE_CHARS};
use crate::common::error::{Result, ReviewHubError};
use crate::pipeline::processing::validate::ValidationConfig;

/// Environment variable that overrides the configured business profile id
pub const BUSINESS_PROFILE_ID_ENV: &str = "REVIEW_HUB_BUSINESS_ID";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub ai: AiConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub user: Option<UserConfig>,
}

/// External review source settings
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub business_profile_id: String,
    pub endpoint: String,
    pub timeout_seconds: u64,
}

/// Title model settings; the API key itself comes from the environment
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    pub base_url: String,
    pub model: String,
}

/// Submission form minimums, overridable per deployment
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    pub min_content_chars: usize,
    pub min_title_chars: usize,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            min_content_chars: MIN_CONTENT_CHARS,
            min_title_chars: MIN_TITLE_CHARS,
        }
    }
}

impl SubmissionConfig {
    pub fn validation(&self) -> ValidationConfig {
        ValidationConfig {
            min_content_chars: self.min_content_chars,
            min_title_chars: self.min_title_chars,
        }
    }
}

/// Profile of the signed-in demo user, when one is configured
#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
    pub uid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from("config.toml")?;

        // The business profile id is deployment-specific and commonly
        // injected through the environment rather than the config file
        if let Ok(business_id) = std::env::var(BUSINESS_PROFILE_ID_ENV) {
            config.source.business_profile_id = business_id;
        }

        Ok(config)
    }

    pub fn load_from(config_path: &str) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .map_err(|e| ReviewHubError::Config(format!("Failed to read config file '{}': {}", config_path, e)))?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[source]
business_profile_id = "business-123"
endpoint = "https://example.com/reviews"
timeout_seconds = 10

[ai]
base_url = "https://api.openai.com/v1"
model = "gpt-4o-mini"

[submission]
min_content_chars = 20
min_title_chars = 5

[user]
uid = "local-user-1"
name = "Demo User"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.source.business_profile_id, "business-123");
        assert_eq!(config.source.timeout_seconds, 10);
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.submission.min_content_chars, 20);
        assert_eq!(config.submission.validation().min_title_chars, 5);
        let user = config.user.unwrap();
        assert_eq!(user.uid, "local-user-1");
        assert_eq!(user.name.as_deref(), Some("Demo User"));
        assert_eq!(user.avatar, None);
    }

    #[test]
    fn test_submission_section_defaults_when_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[source]
business_profile_id = ""
endpoint = "https://example.com/reviews"
timeout_seconds = 10

[ai]
base_url = "https://api.openai.com/v1"
model = "gpt-4o-mini"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.submission.min_content_chars, MIN_CONTENT_CHARS);
        assert_eq!(config.submission.min_title_chars, MIN_TITLE_CHARS);
        assert!(config.user.is_none());
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let result = Config::load_from("/nonexistent/config.toml");
        assert!(matches!(result, Err(ReviewHubError::Config(_))));
    }
}
