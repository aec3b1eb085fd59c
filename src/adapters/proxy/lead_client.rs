//! ProxyLeadClient - LeadSubmitter backed by the proxy's `/api/lead`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{endpoint, error_text};
use crate::domain::conversation::LeadRecord;
use crate::ports::{LeadError, LeadReceipt, LeadSubmitter};

/// Sends completed leads to the proxy service.
pub struct ProxyLeadClient {
    url: String,
    timeout: Duration,
    client: Client,
}

impl ProxyLeadClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LeadError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LeadError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: endpoint(base_url, "/api/lead"),
            timeout,
            client,
        })
    }
}

#[derive(Deserialize)]
struct LeadReply {
    #[serde(default)]
    success: bool,
    message: Option<String>,
}

#[async_trait]
impl LeadSubmitter for ProxyLeadClient {
    async fn submit(&self, lead: &LeadRecord) -> Result<LeadReceipt, LeadError> {
        let response = self
            .client
            .post(&self.url)
            .json(lead)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LeadError::timeout(self.timeout)
                } else {
                    LeadError::network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(LeadError::rejected(status.as_u16(), error_text(&body)));
        }

        let reply: LeadReply = serde_json::from_str(&body)
            .map_err(|e| LeadError::Parse(format!("Failed to parse proxy reply: {}", e)))?;
        if !reply.success {
            return Err(LeadError::rejected(status.as_u16(), body));
        }

        Ok(reply.message.map(LeadReceipt::new).unwrap_or_default())
    }
}
