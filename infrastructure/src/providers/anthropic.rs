//! Anthropic messages API adapter

use super::{ChatProvider, classify_transport, empty_completion, error_for_status, malformed_response};
use async_trait::async_trait;
use roundtable_application::GenerationError;
use roundtable_domain::GenerationRequest;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2048;

/// Client for the Anthropic messages API
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl AnthropicProvider {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    /// Point the client at a different endpoint (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    fn into_text(self) -> Option<String> {
        self.content
            .into_iter()
            .filter_map(|block| block.text)
            .reduce(|mut acc, part| {
                acc.push_str(&part);
                acc
            })
            .filter(|text| !text.is_empty())
    }
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    async fn complete(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError> {
        let body = serde_json::json!({
            "model": model,
            "max_tokens": MAX_TOKENS,
            "system": request.system,
            "messages": [{ "role": "user", "content": request.prompt }],
        });

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(classify_transport)?;

        let response = error_for_status(response).await?;
        let parsed: MessagesResponse = response.json().await.map_err(malformed_response)?;
        parsed.into_text().ok_or_else(empty_completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_extraction() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content": [{"type": "text", "text": "Framing "}, {"type": "text", "text": "statement."}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("Framing statement."));
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let parsed: MessagesResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert!(parsed.into_text().is_none());
    }

    #[test]
    fn test_non_text_blocks_are_skipped() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content": [{"type": "thinking"}, {"type": "text", "text": "Answer."}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("Answer."));
    }
}
