//! Mock chat provider for testing.
//!
//! Provides a configurable mock implementation of the ChatProvider port,
//! allowing tests to run without calling a real LLM.
//!
//! # Features
//!
//! - Pre-configured responses
//! - Simulated delays for busy-flag and timeout testing
//! - Error injection for failure testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockChatProvider::new()
//!     .with_response("Hello, I'm the assistant!")
//!     .with_delay(Duration::from_millis(100));
//!
//! let reply = provider.send_message("hi").await?;
//! assert_eq!(reply, "Hello, I'm the assistant!");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ChatError, ChatProvider};

/// Mock chat provider for testing.
#[derive(Debug, Clone)]
pub struct MockChatProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Messages received, for verification.
    calls: Arc<Mutex<Vec<String>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this reply.
    Success(String),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate a missing API key.
    NotConfigured,
    /// Simulate rejected credentials.
    AuthenticationFailed,
    /// Simulate a non-success upstream status.
    Upstream { status: u16, body: String },
    /// Simulate a response without reply text.
    EmptyReply,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u64 },
}

impl From<MockError> for ChatError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::NotConfigured => ChatError::NotConfigured("mock".to_string()),
            MockError::AuthenticationFailed => ChatError::AuthenticationFailed,
            MockError::Upstream { status, body } => ChatError::upstream(status, body),
            MockError::EmptyReply => ChatError::EmptyReply,
            MockError::Network { message } => ChatError::network(message),
            MockError::Timeout { timeout_secs } => ChatError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChatProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Success(content.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all messages received so far.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success("Mock response".to_string()))
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn send_message(&self, message: &str) -> Result<String, ChatError> {
        self.calls.lock().unwrap().push(message.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success(content) => Ok(content),
            MockResponse::Error(err) => Err(err.into()),
        }
    }
}
