//! DialogueController - Runs user turns for one mounted widget.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::domain::conversation::{
    ChatMessage, DialogueMode, DialoguePrompts, DialogueSession, LeadDraft, LeadRecord, TurnPlan,
    DEFAULT_CONTACT_EMAIL,
};
use crate::domain::foundation::SessionId;
use crate::ports::{ChatError, ChatProvider, LeadError, LeadSubmitter};

/// Controller settings.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Address offered in decline and failure messages.
    pub contact_email: String,
    /// Upper bound for each outbound call; `None` waits forever.
    pub turn_timeout: Option<Duration>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            turn_timeout: Some(Duration::from_secs(60)),
        }
    }
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn was recorded and answered.
    Replied {
        user: ChatMessage,
        reply: ChatMessage,
    },
    /// Nothing was recorded.
    Ignored(IgnoreReason),
}

impl TurnOutcome {
    /// The assistant message, if the turn was answered.
    pub fn reply(&self) -> Option<&ChatMessage> {
        match self {
            TurnOutcome::Replied { reply, .. } => Some(reply),
            TurnOutcome::Ignored(_) => None,
        }
    }
}

/// Why a submission was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input was empty after trimming.
    Blank,
    /// A previous turn is still waiting on an outbound call.
    Busy,
}

/// Owns one widget session and answers its turns one at a time.
///
/// Collaborator failures never escape: they are turned into an apologetic
/// assistant message and the session is left in a stable mode.
pub struct DialogueController {
    session_id: SessionId,
    session: Mutex<DialogueSession>,
    busy: AtomicBool,
    chat: Arc<dyn ChatProvider>,
    leads: Arc<dyn LeadSubmitter>,
    turn_timeout: Option<Duration>,
}

impl DialogueController {
    pub fn new(
        chat: Arc<dyn ChatProvider>,
        leads: Arc<dyn LeadSubmitter>,
        config: ControllerConfig,
    ) -> Self {
        let session = DialogueSession::new(DialoguePrompts::new(config.contact_email));
        tracing::debug!(session = %session.id(), "Widget session created");

        Self {
            session_id: session.id(),
            session: Mutex::new(session),
            busy: AtomicBool::new(false),
            chat,
            leads,
            turn_timeout: config.turn_timeout,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// True while a turn is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Snapshot of the message log.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.session.lock().await.log().messages().to_vec()
    }

    pub async fn mode(&self) -> DialogueMode {
        self.session.lock().await.mode()
    }

    /// Snapshot of the partially captured lead.
    pub async fn draft(&self) -> LeadDraft {
        self.session.lock().await.draft().clone()
    }

    /// Handles one user submission.
    ///
    /// Blank input and input arriving while a turn is in flight are ignored
    /// without touching the log. Otherwise the user message is appended,
    /// followed by exactly one assistant message.
    pub async fn submit(&self, input: &str) -> TurnOutcome {
        let text = input.trim();
        if text.is_empty() {
            return TurnOutcome::Ignored(IgnoreReason::Blank);
        }

        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!(session = %self.session_id, "Submission ignored while busy");
            return TurnOutcome::Ignored(IgnoreReason::Busy);
        };

        let (user, plan, prompts) = {
            let mut session = self.session.lock().await;
            let (user, plan) = session.begin_turn(text);
            (user, plan, session.prompts().clone())
        };

        let reply_text = match plan {
            TurnPlan::Reply(text) => text,
            TurnPlan::Chat(message) => match self.ask_chat(&message).await {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::warn!(session = %self.session_id, error = %err, "Chat provider failed");
                    prompts.chat_failure()
                }
            },
            TurnPlan::SubmitLead(lead) => match self.submit_lead(&lead).await {
                Ok(confirmation) => {
                    tracing::info!(session = %self.session_id, "Lead submitted");
                    confirmation
                }
                Err(err) => {
                    tracing::warn!(session = %self.session_id, error = %err, "Lead submission failed");
                    prompts.submission_failure()
                }
            },
        };

        let reply = self.session.lock().await.complete_turn(reply_text);
        TurnOutcome::Replied { user, reply }
    }

    async fn ask_chat(&self, message: &str) -> Result<String, ChatError> {
        let call = self.chat.send_message(message);
        match self.turn_timeout {
            Some(limit) => timeout(limit, call)
                .await
                .unwrap_or_else(|_| Err(ChatError::timeout(limit))),
            None => call.await,
        }
    }

    async fn submit_lead(&self, lead: &LeadRecord) -> Result<String, LeadError> {
        let call = self.leads.submit(lead);
        let receipt = match self.turn_timeout {
            Some(limit) => timeout(limit, call)
                .await
                .unwrap_or_else(|_| Err(LeadError::timeout(limit)))?,
            None => call.await?,
        };
        Ok(receipt.confirmation)
    }
}

impl Drop for DialogueController {
    fn drop(&mut self) {
        tracing::debug!(session = %self.session_id, "Widget session discarded");
    }
}

/// Holds the busy flag for the duration of a turn and clears it on every exit
/// path, including cancellation of the turn's future.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
