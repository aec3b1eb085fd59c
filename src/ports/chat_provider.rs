//! Chat Provider Port - Interface for answering a visitor's free-form message.
//!
//! The dialogue controller forwards every non-scripted turn through this port.
//! Implementations either call the hosted LLM directly (the proxy service) or
//! call the proxy service over HTTP (the widget).
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl ChatProvider for EchoProvider {
//!     async fn send_message(&self, message: &str) -> Result<String, ChatError> {
//!         Ok(message.to_string())
//!     }
//! }
//! ```

use async_trait::async_trait;
use std::time::Duration;

/// Port for single-shot chat completions.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends one user message and returns the assistant's reply text.
    ///
    /// A single attempt is made; callers decide what to show on failure.
    async fn send_message(&self, message: &str) -> Result<String, ChatError>;
}

/// Chat provider errors.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// No credentials were configured for the upstream provider.
    #[error("chat provider not configured: {0}")]
    NotConfigured(String),

    /// The message was rejected before being sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream rejected the credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Upstream answered with a non-success status.
    #[error("upstream error ({status}): {body}")]
    Upstream {
        /// HTTP status returned upstream.
        status: u16,
        /// Response body or error text.
        body: String,
    },

    /// Upstream answered successfully but without any reply text.
    #[error("no reply in provider response")]
    EmptyReply,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
}

impl ChatError {
    /// Creates an upstream status error.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a timeout error for the given limit.
    pub fn timeout(limit: Duration) -> Self {
        Self::Timeout {
            timeout_secs: limit.as_secs(),
        }
    }
}
