//! Framer Form Submitter - Forwards captured leads to a Framer form endpoint.
//!
//! The form accepts `{name, email, message, phone?}` as JSON. Any 2xx answer
//! counts as accepted; the body is not inspected.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::domain::conversation::LeadRecord;
use crate::ports::{LeadError, LeadReceipt, LeadSubmitter};

/// Hosted form the sales team reads.
pub const DEFAULT_FORM_URL: &str =
    "https://api.framer.com/forms/v1/forms/c4472cbf-dbcd-48e6-b6e7-3a2fc4631697/submit";

/// Configuration for the Framer form submitter.
#[derive(Debug, Clone)]
pub struct FramerFormConfig {
    /// Submission endpoint.
    pub form_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for FramerFormConfig {
    fn default() -> Self {
        Self {
            form_url: DEFAULT_FORM_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl FramerFormConfig {
    pub fn with_form_url(mut self, url: impl Into<String>) -> Self {
        self.form_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Submits leads to a Framer form.
pub struct FramerFormSubmitter {
    config: FramerFormConfig,
    client: Client,
}

impl FramerFormSubmitter {
    pub fn new(config: FramerFormConfig) -> Result<Self, LeadError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LeadError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl LeadSubmitter for FramerFormSubmitter {
    async fn submit(&self, lead: &LeadRecord) -> Result<LeadReceipt, LeadError> {
        tracing::debug!(has_phone = lead.phone().is_some(), "Submitting lead to Framer form");

        let response = self
            .client
            .post(&self.config.form_url)
            .json(lead)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LeadError::timeout(self.config.timeout)
                } else {
                    LeadError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Framer form rejected lead");
            return Err(LeadError::rejected(status.as_u16(), body));
        }

        Ok(LeadReceipt::default())
    }
}
