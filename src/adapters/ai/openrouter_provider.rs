//! OpenRouter Provider - Implementation of ChatProvider for OpenRouter's API.
//!
//! Sends each visitor message as a single-turn, non-streaming chat completion.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenRouterConfig::new(Some(api_key))
//!     .with_model("deepseek/deepseek-chat:free")
//!     .with_base_url("https://openrouter.ai/api/v1");
//!
//! let provider = OpenRouterProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{ChatError, ChatProvider};

/// Configuration for the OpenRouter provider.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// API key for authentication; requests fail fast without one.
    api_key: Option<Secret<String>>,
    /// Model to use (e.g., "deepseek/deepseek-chat:free").
    pub model: String,
    /// Base URL for the API (default: https://openrouter.ai/api/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenRouterConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()).map(Secret::new),
            model: "deepseek/deepseek-chat:free".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns true if an API key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

/// OpenRouter API provider implementation.
pub struct OpenRouterProvider {
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: OpenRouterConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChatError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn to_openrouter_request(&self, message: &str) -> OpenRouterRequest {
        OpenRouterRequest {
            model: self.config.model.clone(),
            messages: vec![OpenRouterMessage {
                role: "user".to_string(),
                content: message.to_string(),
            }],
            stream: false,
        }
    }

    /// Sends a request to the completions endpoint.
    async fn send_request(&self, api_key: &str, message: &str) -> Result<Response, ChatError> {
        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&self.to_openrouter_request(message))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::timeout(self.config.timeout)
                } else if e.is_connect() {
                    ChatError::network(format!("Connection failed: {}", e))
                } else {
                    ChatError::network(e.to_string())
                }
            })
    }

    /// Checks the response status, turning failures into errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ChatError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), body = %error_body, "OpenRouter API error");

        match status.as_u16() {
            401 => Err(ChatError::AuthenticationFailed),
            code => Err(ChatError::upstream(code, error_body)),
        }
    }

    /// Extracts the reply text from a successful response.
    async fn parse_response(&self, response: Response) -> Result<String, ChatError> {
        let response = self.handle_response_status(response).await?;

        let parsed: OpenRouterResponse = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ChatError::EmptyReply)
    }
}

#[async_trait]
impl ChatProvider for OpenRouterProvider {
    async fn send_message(&self, message: &str) -> Result<String, ChatError> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| ChatError::NotConfigured("OpenRouter API key not configured".to_string()))?;

        if message.trim().is_empty() {
            return Err(ChatError::InvalidRequest("Message is required".to_string()));
        }

        tracing::debug!(model = %self.config.model, "Sending message to OpenRouter");
        let response = self.send_request(api_key, message).await?;
        self.parse_response(response).await
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct OpenRouterRequest {
    model: String,
    messages: Vec<OpenRouterMessage>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OpenRouterMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenRouterResponse {
    #[serde(default)]
    choices: Vec<OpenRouterChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterChoice {
    message: Option<OpenRouterChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OpenRouterProvider {
        let config = OpenRouterConfig::new(Some("sk-or-test".to_string()))
            .with_base_url(server.uri())
            .with_timeout(Duration::from_secs(2));
        OpenRouterProvider::new(config).unwrap()
    }

    mod config {
        use super::*;

        #[test]
        fn defaults_match_hosted_service() {
            let config = OpenRouterConfig::new(Some("k".to_string()));
            assert_eq!(config.model, "deepseek/deepseek-chat:free");
            assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
            assert!(config.has_api_key());
        }

        #[test]
        fn empty_key_counts_as_missing() {
            assert!(!OpenRouterConfig::new(Some(String::new())).has_api_key());
            assert!(!OpenRouterConfig::new(None).has_api_key());
        }

        #[test]
        fn debug_output_hides_key() {
            let config = OpenRouterConfig::new(Some("sk-or-secret".to_string()));
            assert!(!format!("{:?}", config).contains("sk-or-secret"));
        }
    }

    mod requests {
        use super::*;

        #[tokio::test]
        async fn sends_single_user_message_with_bearer_auth() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/chat/completions"))
                .and(header("Authorization", "Bearer sk-or-test"))
                .and(body_json(json!({
                    "model": "deepseek/deepseek-chat:free",
                    "messages": [{"role": "user", "content": "Hello"}],
                    "stream": false
                })))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "choices": [{"message": {"role": "assistant", "content": "Hi there!"}}]
                })))
                .expect(1)
                .mount(&server)
                .await;

            let reply = provider_for(&server).send_message("Hello").await.unwrap();

            assert_eq!(reply, "Hi there!");
        }

        #[tokio::test]
        async fn missing_key_fails_without_calling_upstream() {
            let server = MockServer::start().await;
            let config = OpenRouterConfig::new(None).with_base_url(server.uri());
            let provider = OpenRouterProvider::new(config).unwrap();

            let err = provider.send_message("Hello").await.unwrap_err();

            assert!(matches!(err, ChatError::NotConfigured(_)));
            assert!(server.received_requests().await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn blank_message_is_rejected() {
            let server = MockServer::start().await;
            let err = provider_for(&server).send_message("  ").await.unwrap_err();
            assert!(matches!(err, ChatError::InvalidRequest(_)));
        }
    }

    mod responses {
        use super::*;

        async fn respond(template: ResponseTemplate) -> Result<String, ChatError> {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/chat/completions"))
                .respond_with(template)
                .mount(&server)
                .await;
            provider_for(&server).send_message("Hello").await
        }

        #[tokio::test]
        async fn unauthorized_maps_to_authentication_failed() {
            let err = respond(ResponseTemplate::new(401).set_body_string("bad key"))
                .await
                .unwrap_err();
            assert!(matches!(err, ChatError::AuthenticationFailed));
        }

        #[tokio::test]
        async fn other_status_keeps_code_and_body() {
            let err = respond(ResponseTemplate::new(429).set_body_string("slow down"))
                .await
                .unwrap_err();
            match err {
                ChatError::Upstream { status, body } => {
                    assert_eq!(status, 429);
                    assert_eq!(body, "slow down");
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }

        #[tokio::test]
        async fn missing_choices_is_empty_reply() {
            let err = respond(ResponseTemplate::new(200).set_body_json(json!({"id": "x"})))
                .await
                .unwrap_err();
            assert!(matches!(err, ChatError::EmptyReply));
        }

        #[tokio::test]
        async fn empty_content_is_empty_reply() {
            let err = respond(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": ""}}]
            })))
            .await
            .unwrap_err();
            assert!(matches!(err, ChatError::EmptyReply));
        }

        #[tokio::test]
        async fn non_json_body_is_parse_error() {
            let err = respond(ResponseTemplate::new(200).set_body_string("<html>"))
                .await
                .unwrap_err();
            assert!(matches!(err, ChatError::Parse(_)));
        }

        #[tokio::test]
        async fn slow_upstream_times_out() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(
                    ResponseTemplate::new(200).set_delay(Duration::from_millis(500)),
                )
                .mount(&server)
                .await;
            let config = OpenRouterConfig::new(Some("k".to_string()))
                .with_base_url(server.uri())
                .with_timeout(Duration::from_millis(50));

            let err = OpenRouterProvider::new(config)
                .unwrap()
                .send_message("Hello")
                .await
                .unwrap_err();

            assert!(matches!(err, ChatError::Timeout { .. }));
        }
    }
}
