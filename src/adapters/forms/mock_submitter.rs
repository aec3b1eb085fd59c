//! Mock lead submitter for testing.
//!
//! Records every lead it receives and answers with a configurable receipt or
//! error.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::conversation::LeadRecord;
use crate::ports::{LeadError, LeadReceipt, LeadSubmitter};

/// Scripted lead submitter.
///
/// Clones share the same recorded submissions, so a test can keep one handle
/// while the controller owns another.
#[derive(Clone, Default)]
pub struct MockLeadSubmitter {
    confirmation: Option<String>,
    error: Arc<Mutex<Option<LeadError>>>,
    delay: Option<Duration>,
    submitted: Arc<Mutex<Vec<LeadRecord>>>,
}

impl MockLeadSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom confirmation text instead of the standard one.
    pub fn with_confirmation(mut self, text: &str) -> Self {
        self.confirmation = Some(text.to_string());
        self
    }

    /// Fails the next submission with the given error.
    pub fn with_error(self, error: LeadError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Waits before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Leads received so far, including ones that were answered with an error.
    pub fn submitted(&self) -> Vec<LeadRecord> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadSubmitter for MockLeadSubmitter {
    async fn submit(&self, lead: &LeadRecord) -> Result<LeadReceipt, LeadError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.submitted.lock().unwrap().push(lead.clone());

        if let Some(error) = self.error.lock().unwrap().take() {
            return Err(error);
        }

        Ok(match &self.confirmation {
            Some(text) => LeadReceipt::new(text.clone()),
            None => LeadReceipt::default(),
        })
    }
}
