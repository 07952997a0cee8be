//! Gemini transport for card generation.
//!
//! Implements the core [`LlmClient`] contract over the generative-language
//! REST API: one POST per prompt, no retry, bounded timeout. Any other
//! transport satisfying the same contract can be swapped in without
//! touching interpretation.

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use ankigen_core::{LlmClient, LlmError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-pro";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for the Gemini transport.
///
/// The model identifier and credential are opaque strings; only credential
/// presence is checked.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Gemini-backed [`LlmClient`].
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client, rejecting a blank credential before any request
    /// can be made.
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }
        Ok(Self {
            http: Client::new(),
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });

        debug!(model = %self.config.model, "sending generation request");
        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .send()
            .await
            .map_err(|e| map_request_error(e, self.config.timeout_ms))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, message });
        }

        let payload: Value = resp
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| LlmError::Parse("response has no candidate text".into()))
    }
}

fn map_request_error(err: reqwest::Error, timeout_ms: u64) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout(timeout_ms)
    } else if err.is_connect() {
        LlmError::Unavailable(err.to_string())
    } else {
        LlmError::RequestFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_api_key_is_rejected_at_construction() {
        assert!(matches!(
            GeminiClient::new(GeminiConfig::new("")),
            Err(LlmError::MissingApiKey)
        ));
        assert!(matches!(
            GeminiClient::new(GeminiConfig::new("   ")),
            Err(LlmError::MissingApiKey)
        ));
    }

    #[test]
    fn config_defaults_and_overrides() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.timeout_ms, 30_000);

        let config = GeminiConfig::new("key")
            .with_model("gemini-1.5-flash")
            .with_timeout_ms(5_000);
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.timeout_ms, 5_000);
    }

    #[test]
    fn endpoint_strips_trailing_slash_from_base_url() {
        let client = GeminiClient::new(
            GeminiConfig::new("key").with_base_url("http://localhost:9999/"),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/models/gemini-1.5-pro:generateContent"
        );
    }
}
