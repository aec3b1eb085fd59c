//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Chat providers (OpenRouter, mock)
//! - `forms` - Lead submitters (Framer form, mock)
//! - `proxy` - Widget-side clients of the proxy service
//! - `http` - The proxy service's axum endpoints

pub mod ai;
pub mod forms;
pub mod http;
pub mod proxy;
