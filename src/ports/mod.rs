//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the dialogue and the outside world. Adapters implement these ports.
//!
//! - `ChatProvider` - Answers a free-form visitor message
//! - `LeadSubmitter` - Hands a completed lead to the sales team

mod chat_provider;
mod lead_submitter;

pub use chat_provider::{ChatError, ChatProvider};
pub use lead_submitter::{LeadError, LeadReceipt, LeadSubmitter, LEAD_CONFIRMATION};
