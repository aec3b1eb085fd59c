//! Widget configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::is_http_url;
use crate::domain::conversation::DEFAULT_CONTACT_EMAIL;

/// Settings for the widget runtime
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    /// Base URL of the proxy service
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,

    /// Address offered in decline and failure messages
    #[serde(default = "default_contact_email")]
    pub contact_email: String,

    /// Per-turn limit in seconds; 0 waits indefinitely
    #[serde(default = "default_turn_timeout")]
    pub turn_timeout_secs: u64,
}

impl WidgetConfig {
    pub fn turn_timeout(&self) -> Option<Duration> {
        (self.turn_timeout_secs > 0).then(|| Duration::from_secs(self.turn_timeout_secs))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.proxy_url) {
            return Err(ValidationError::InvalidUrl("widget.proxy_url"));
        }
        let email = self.contact_email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError::InvalidContactEmail);
        }
        Ok(())
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            proxy_url: default_proxy_url(),
            contact_email: default_contact_email(),
            turn_timeout_secs: default_turn_timeout(),
        }
    }
}

fn default_proxy_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_contact_email() -> String {
    DEFAULT_CONTACT_EMAIL.to_string()
}

fn default_turn_timeout() -> u64 {
    60
}
