//! Dialogue mode state machine.

use serde::Serialize;

use super::lead::LeadStep;
use crate::domain::foundation::StateMachine;

/// Which handler owns the next user turn.
///
/// - `Idle`: turns go to the chat provider
/// - `AwaitingConfirmation`: the last reply offered to take the visitor's details
/// - `CollectingLead(step)`: walking the capture form; `step` is the field requested next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "mode", content = "step", rename_all = "snake_case")]
pub enum DialogueMode {
    #[default]
    Idle,
    AwaitingConfirmation,
    CollectingLead(LeadStep),
}

impl DialogueMode {
    /// Returns true while the capture form is running.
    pub fn is_collecting(&self) -> bool {
        matches!(self, Self::CollectingLead(_))
    }

    /// The step being requested, if collecting.
    pub fn lead_step(&self) -> Option<LeadStep> {
        match self {
            Self::CollectingLead(step) => Some(*step),
            _ => None,
        }
    }
}

impl StateMachine for DialogueMode {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogueMode::*;
        match (self, target) {
            // Plain chat turn, or a lead trigger
            (Idle, Idle) | (Idle, AwaitingConfirmation) => true,
            // Visitor accepts or declines the offer
            (AwaitingConfirmation, CollectingLead(LeadStep::Name))
            | (AwaitingConfirmation, Idle) => true,
            // One field per turn, forward only
            (CollectingLead(from), CollectingLead(to)) => from.next() == Some(*to),
            // Final answer triggers submission and always leaves capture
            (CollectingLead(LeadStep::Description), Idle) => true,
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueMode::*;
        match self {
            Idle => vec![Idle, AwaitingConfirmation],
            AwaitingConfirmation => vec![CollectingLead(LeadStep::FIRST), Idle],
            CollectingLead(step) => match step.next() {
                Some(next) => vec![CollectingLead(next)],
                None => vec![Idle],
            },
        }
    }
}
