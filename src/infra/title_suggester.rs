use serde_json::{json, Value};
use tracing::debug;

use crate::app::ports::TitleSuggestPort;
use crate::common::error::{Result, ReviewHubError};
use crate::config::AiConfig;

/// System prompt for the title model
const TITLE_SYSTEM_PROMPT: &str = "You are an AI expert in marketing and writing copy. \
You will be provided a user review of a product or service. Your job is to come up with \
a short, compelling title for the review that will capture the attention of potential \
customers. Respond with the title only.";

/// Title suggester backed by an OpenAI-compatible chat completions endpoint
pub struct OpenAiTitleSuggester {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiTitleSuggester {
    pub fn new(config: &AiConfig, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
        }
    }

    fn build_request_body(&self, content: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": TITLE_SYSTEM_PROMPT },
                { "role": "user", "content": format!("Review: {}", content) }
            ],
            "temperature": 0.7
        })
    }
}

#[async_trait::async_trait]
impl TitleSuggestPort for OpenAiTitleSuggester {
    async fn suggest_title(&self, content: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!("Requesting title suggestion from model {}", self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.build_request_body(content))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(ReviewHubError::Api {
                message: format!("title model returned status {}: {}", status, body),
            });
        }

        let data: Value = response.json().await?;
        let title = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| ReviewHubError::MissingField("choices[0].message.content".into()))?;

        // Models occasionally wrap the title in quotes
        Ok(title.trim().trim_matches('"').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggester() -> OpenAiTitleSuggester {
        OpenAiTitleSuggester::new(
            &AiConfig {
                base_url: "https://api.openai.com/v1/".to_string(),
                model: "gpt-4o-mini".to_string(),
            },
            "test-key",
        )
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        assert_eq!(suggester().base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_request_body_carries_prompt_and_content() {
        let body = suggester().build_request_body("The pasta was incredible.");

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], TITLE_SYSTEM_PROMPT);
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Review: The pasta was incredible.");
    }
}
