//! The widget session: log, mode and lead draft for one mounted widget.
//!
//! The session decides what a user turn means without doing any I/O. It
//! returns a [`TurnPlan`] describing the single assistant reply to produce,
//! and the caller appends that reply with [`DialogueSession::complete_turn`]
//! once it is known.

use super::lead::{LeadDraft, LeadRecord, LeadStep, StepOutcome};
use super::message::{ChatMessage, MessageLog, MessageRole};
use super::mode::DialogueMode;
use super::prompts::{DialoguePrompts, LEAD_OFFER, NAME_REQUEST};
use super::triggers::{is_confirmation, is_lead_trigger};
use crate::domain::foundation::{SessionId, StateMachine};

/// What the assistant should answer to the turn just recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPlan {
    /// A scripted reply, available immediately.
    Reply(String),
    /// Forward the text to the chat provider and reply with its answer.
    Chat(String),
    /// Submit the completed lead and reply with the confirmation.
    SubmitLead(LeadRecord),
}

/// Session-scoped state, created when the widget mounts and dropped when it
/// unmounts.
#[derive(Debug, Clone)]
pub struct DialogueSession {
    id: SessionId,
    log: MessageLog,
    mode: DialogueMode,
    draft: LeadDraft,
    prompts: DialoguePrompts,
}

impl DialogueSession {
    pub fn new(prompts: DialoguePrompts) -> Self {
        Self {
            id: SessionId::new(),
            log: MessageLog::new(),
            mode: DialogueMode::default(),
            draft: LeadDraft::new(),
            prompts,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn mode(&self) -> DialogueMode {
        self.mode
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn prompts(&self) -> &DialoguePrompts {
        &self.prompts
    }

    /// Records the user turn and routes it according to the current mode.
    ///
    /// The mode (and draft) are updated before any outbound call is made, so
    /// a failed call never leaves the session half-way through a transition.
    pub fn begin_turn(&mut self, text: &str) -> (ChatMessage, TurnPlan) {
        let user = self.log.append(MessageRole::User, text);

        let plan = match self.mode {
            DialogueMode::Idle => {
                if is_lead_trigger(text) {
                    self.advance(DialogueMode::AwaitingConfirmation);
                    TurnPlan::Reply(LEAD_OFFER.to_string())
                } else {
                    self.advance(DialogueMode::Idle);
                    TurnPlan::Chat(text.to_string())
                }
            }
            DialogueMode::AwaitingConfirmation => {
                if is_confirmation(text) {
                    self.draft.clear();
                    self.advance(DialogueMode::CollectingLead(LeadStep::FIRST));
                    TurnPlan::Reply(NAME_REQUEST.to_string())
                } else {
                    self.advance(DialogueMode::Idle);
                    TurnPlan::Reply(self.prompts.decline())
                }
            }
            DialogueMode::CollectingLead(step) => match self.draft.accept(step, text) {
                StepOutcome::Ask(next) => {
                    self.advance(DialogueMode::CollectingLead(next));
                    TurnPlan::Reply(next.prompt().to_string())
                }
                StepOutcome::Complete(record) => {
                    self.advance(DialogueMode::Idle);
                    TurnPlan::SubmitLead(record)
                }
                StepOutcome::Rejected(err) => {
                    tracing::warn!(session = %self.id, error = %err, "Lead incomplete, not submitting");
                    self.advance(DialogueMode::Idle);
                    TurnPlan::Reply(self.prompts.submission_failure())
                }
            },
        };

        tracing::debug!(session = %self.id, mode = ?self.mode, "Routed user turn");
        (user, plan)
    }

    /// Appends the assistant reply for the turn begun last.
    pub fn complete_turn(&mut self, reply: impl Into<String>) -> ChatMessage {
        self.log.append(MessageRole::Assistant, reply)
    }

    fn advance(&mut self, target: DialogueMode) {
        match self.mode.transition_to(target) {
            Ok(next) => self.mode = next,
            Err(err) => {
                tracing::error!(session = %self.id, error = %err, "Rejected mode transition, resetting");
                self.mode = DialogueMode::Idle;
                self.draft.clear();
            }
        }
    }
}

impl Default for DialogueSession {
    fn default() -> Self {
        Self::new(DialoguePrompts::default())
    }
}
