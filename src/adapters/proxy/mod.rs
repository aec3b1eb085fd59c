//! Proxy clients - The widget's side of the proxy service.
//!
//! The widget never talks to the language model or the form provider
//! directly. It calls `/api/chat` and `/api/lead` on the proxy service, which
//! holds the credentials.

mod chat_client;
mod lead_client;

pub use chat_client::ProxyChatClient;
pub use lead_client::ProxyLeadClient;

use serde::Deserialize;

/// Error body returned by every proxy endpoint.
#[derive(Debug, Deserialize)]
struct ProxyErrorBody {
    error: String,
}

/// Extracts the proxy's error text, falling back to the raw body.
fn error_text(body: &str) -> String {
    serde_json::from_str::<ProxyErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}

/// Joins the proxy base URL and an endpoint path.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_prefers_error_field() {
        assert_eq!(error_text(r#"{"error":"Message is required"}"#), "Message is required");
        assert_eq!(error_text("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn endpoint_handles_trailing_slash() {
        assert_eq!(endpoint("http://h:1/", "/api/chat"), "http://h:1/api/chat");
        assert_eq!(endpoint("http://h:1", "/api/lead"), "http://h:1/api/lead");
    }
}
