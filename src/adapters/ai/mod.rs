//! Chat Provider Adapters.
//!
//! Implementations of the ChatProvider port.
//!
//! ## Available Adapters
//!
//! - `OpenRouterProvider` - Hosted models through the OpenRouter chat-completions API
//! - `MockChatProvider` - Configurable mock for testing

mod mock_provider;
mod openrouter_provider;

pub use mock_provider::{MockChatProvider, MockError, MockResponse};
pub use openrouter_provider::{OpenRouterConfig, OpenRouterProvider};
