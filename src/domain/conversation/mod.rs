//! Conversation domain module.
//!
//! The widget's dialogue: an append-only message log, two keyword
//! classifiers, the scripted lead-capture sub-dialogue and the mode machine
//! that decides which of them handles the next user turn.

mod lead;
mod message;
mod mode;
mod prompts;
mod session;
mod triggers;

pub use lead::{LeadDraft, LeadRecord, LeadStep, StepOutcome};
pub use message::{ChatMessage, MessageLog, MessageRole};
pub use mode::DialogueMode;
pub use prompts::{
    DialoguePrompts, DEFAULT_CONTACT_EMAIL, DESCRIPTION_REQUEST, EMAIL_REQUEST, LEAD_OFFER,
    NAME_REQUEST, PHONE_REQUEST,
};
pub use session::{DialogueSession, TurnPlan};
pub use triggers::{
    is_confirmation, is_lead_trigger, CONFIRMATION_PHRASES, LEAD_TRIGGER_PHRASES,
};
