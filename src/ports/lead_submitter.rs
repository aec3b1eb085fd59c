//! Lead Submitter Port - Interface for handing a captured lead to sales.
//!
//! The widget submits through the proxy service; the proxy service submits
//! to the form-ingestion provider. Both sides implement this port.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::conversation::LeadRecord;
use crate::domain::foundation::ValidationError;

/// Confirmation text shown to the visitor after a successful submission.
pub const LEAD_CONFIRMATION: &str =
    "Thank you! Your request has been submitted and our team will be in touch shortly.";

/// Port for submitting complete leads.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Submits the lead once and returns a human-readable receipt.
    async fn submit(&self, lead: &LeadRecord) -> Result<LeadReceipt, LeadError>;
}

/// Successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadReceipt {
    /// Text suitable for showing to the visitor.
    pub confirmation: String,
}

impl LeadReceipt {
    pub fn new(confirmation: impl Into<String>) -> Self {
        Self {
            confirmation: confirmation.into(),
        }
    }
}

impl Default for LeadReceipt {
    fn default() -> Self {
        Self::new(LEAD_CONFIRMATION)
    }
}

/// Lead submission errors.
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    /// The lead is missing a required field.
    #[error("invalid lead: {0}")]
    Invalid(#[from] ValidationError),

    /// The receiving service answered with a non-success status.
    #[error("submission rejected ({status}): {body}")]
    Rejected {
        /// HTTP status returned.
        status: u16,
        /// Response body or error text.
        body: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the receiving service's response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
}

impl LeadError {
    /// Creates a rejection error.
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a timeout error for the given limit.
    pub fn timeout(limit: Duration) -> Self {
        Self::Timeout {
            timeout_secs: limit.as_secs(),
        }
    }
}
