//! Lead form configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::is_http_url;
use crate::adapters::forms::DEFAULT_FORM_URL;

/// Where the proxy forwards captured leads
#[derive(Debug, Clone, Deserialize)]
pub struct LeadConfig {
    /// Form submission endpoint
    #[serde(default = "default_form_url")]
    pub form_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl LeadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.form_url) {
            return Err(ValidationError::InvalidUrl("lead.form_url"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            form_url: default_form_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_form_url() -> String {
    DEFAULT_FORM_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}
