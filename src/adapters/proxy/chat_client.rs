//! ProxyChatClient - ChatProvider backed by the proxy's `/api/chat`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{endpoint, error_text};
use crate::ports::{ChatError, ChatProvider};

/// Sends visitor messages to the proxy service.
pub struct ProxyChatClient {
    url: String,
    timeout: Duration,
    client: Client,
}

impl ProxyChatClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: endpoint(base_url, "/api/chat"),
            timeout,
            client,
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    response: Option<String>,
}

#[async_trait]
impl ChatProvider for ProxyChatClient {
    async fn send_message(&self, message: &str) -> Result<String, ChatError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::timeout(self.timeout)
                } else {
                    ChatError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::upstream(status.as_u16(), error_text(&body)));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse proxy reply: {}", e)))?;

        reply
            .response
            .filter(|text| !text.is_empty())
            .ok_or(ChatError::EmptyReply)
    }
}
