//! Lead capture: the four-step form walked one field per user turn.

use serde::{Deserialize, Serialize};

use super::prompts::{DESCRIPTION_REQUEST, EMAIL_REQUEST, NAME_REQUEST, PHONE_REQUEST};
use crate::domain::foundation::ValidationError;

/// Field requested next while collecting a lead.
///
/// Steps only ever move forward: Name, Email, Phone, Description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStep {
    Name,
    Email,
    Phone,
    Description,
}

impl LeadStep {
    /// Step the capture starts at.
    pub const FIRST: LeadStep = LeadStep::Name;

    /// Zero-based position in the sequence.
    pub fn index(self) -> u8 {
        match self {
            LeadStep::Name => 0,
            LeadStep::Email => 1,
            LeadStep::Phone => 2,
            LeadStep::Description => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(LeadStep::Name),
            1 => Some(LeadStep::Email),
            2 => Some(LeadStep::Phone),
            3 => Some(LeadStep::Description),
            _ => None,
        }
    }

    /// The following step, or `None` after the description.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Prompt asking the visitor for this step's field.
    pub fn prompt(self) -> &'static str {
        match self {
            LeadStep::Name => NAME_REQUEST,
            LeadStep::Email => EMAIL_REQUEST,
            LeadStep::Phone => PHONE_REQUEST,
            LeadStep::Description => DESCRIPTION_REQUEST,
        }
    }
}

/// Result of feeding one answer into the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Field stored; ask for the given step next.
    Ask(LeadStep),
    /// Final field stored; the record is ready for submission.
    Complete(LeadRecord),
    /// Final step reached but a required field is missing.
    Rejected(ValidationError),
}

/// Partially collected lead, held by the session while capture is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    message: Option<String>,
}

impl LeadDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Stores the answer for `step` and says what comes next.
    ///
    /// The final step drains the draft, so it is empty afterwards whatever
    /// the outcome.
    pub fn accept(&mut self, step: LeadStep, input: &str) -> StepOutcome {
        let value = input.trim().to_string();
        match step {
            LeadStep::Name => self.name = Some(value),
            LeadStep::Email => self.email = Some(value),
            LeadStep::Phone => {
                self.phone = if is_phone_skip(&value) { None } else { Some(value) };
            }
            LeadStep::Description => self.message = Some(value),
        }

        match step.next() {
            Some(next) => StepOutcome::Ask(next),
            None => match LeadRecord::try_from(std::mem::take(self)) {
                Ok(record) => StepOutcome::Complete(record),
                Err(err) => StepOutcome::Rejected(err),
            },
        }
    }
}

/// True when the phone answer means "leave it out".
///
/// Blank answers and any answer containing "skip" or "no" count, so
/// "no thanks" and "none" both skip.
fn is_phone_skip(answer: &str) -> bool {
    let lowered = answer.trim().to_lowercase();
    lowered.is_empty() || lowered.contains("skip") || lowered.contains("no")
}

/// A complete lead, eligible for submission.
///
/// Name, email and message are always non-empty; phone is optional and is
/// omitted from the wire format when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    message: String,
}

impl LeadRecord {
    /// Builds a record, rejecting blank required fields.
    ///
    /// A blank phone is treated as absent.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = required("name", name.into())?;
        let email = required("email", email.into())?;
        let message = required("message", message.into())?;
        let phone = phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(Self {
            name,
            email,
            phone,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<LeadDraft> for LeadRecord {
    type Error = ValidationError;

    fn try_from(draft: LeadDraft) -> Result<Self, Self::Error> {
        LeadRecord::new(
            draft.name.unwrap_or_default(),
            draft.email.unwrap_or_default(),
            draft.phone,
            draft.message.unwrap_or_default(),
        )
    }
}

fn required(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod steps {
        use super::*;

        #[test]
        fn steps_advance_in_order() {
            assert_eq!(LeadStep::Name.next(), Some(LeadStep::Email));
            assert_eq!(LeadStep::Email.next(), Some(LeadStep::Phone));
            assert_eq!(LeadStep::Phone.next(), Some(LeadStep::Description));
            assert_eq!(LeadStep::Description.next(), None);
        }

        #[test]
        fn index_round_trips() {
            for i in 0..4 {
                assert_eq!(LeadStep::from_index(i).map(LeadStep::index), Some(i));
            }
            assert_eq!(LeadStep::from_index(4), None);
        }

        #[test]
        fn prompts_match_table() {
            assert_eq!(LeadStep::Email.prompt(), "What's your email address?");
            assert_eq!(LeadStep::Description.prompt(), "What do you need help with?");
            assert!(LeadStep::Phone.prompt().contains("optional"));
        }
    }

    mod draft {
        use super::*;

        fn walk(answers: [&str; 4]) -> (LeadDraft, Vec<StepOutcome>) {
            let mut draft = LeadDraft::new();
            let mut step = LeadStep::FIRST;
            let mut outcomes = Vec::new();
            for answer in answers {
                let outcome = draft.accept(step, answer);
                if let StepOutcome::Ask(next) = outcome {
                    step = next;
                }
                outcomes.push(outcome);
            }
            (draft, outcomes)
        }

        #[test]
        fn full_walk_produces_record_and_drains_draft() {
            let (draft, outcomes) = walk(["Jane Doe", "jane@x.com", "555-0100", "Need a chatbot"]);

            assert_eq!(outcomes[0], StepOutcome::Ask(LeadStep::Email));
            assert_eq!(outcomes[1], StepOutcome::Ask(LeadStep::Phone));
            assert_eq!(outcomes[2], StepOutcome::Ask(LeadStep::Description));
            let expected = LeadRecord::new(
                "Jane Doe",
                "jane@x.com",
                Some("555-0100".to_string()),
                "Need a chatbot",
            )
            .unwrap();
            assert_eq!(outcomes[3], StepOutcome::Complete(expected));
            assert!(draft.is_empty());
        }

        #[test]
        fn skip_leaves_phone_unset() {
            let (_, outcomes) = walk(["Jane Doe", "jane@x.com", "skip", "Need a chatbot"]);
            match &outcomes[3] {
                StepOutcome::Complete(record) => assert_eq!(record.phone(), None),
                other => panic!("expected complete record, got {:?}", other),
            }
        }

        #[test]
        fn phone_skip_words_are_case_insensitive() {
            for answer in ["SKIP", "No thanks", "none", "", "   "] {
                let mut draft = LeadDraft::new();
                draft.accept(LeadStep::Phone, answer);
                assert_eq!(draft.phone(), None, "answer {:?}", answer);
            }
        }

        #[test]
        fn phone_number_is_stored() {
            let mut draft = LeadDraft::new();
            draft.accept(LeadStep::Phone, " +1 555 0100 ");
            assert_eq!(draft.phone(), Some("+1 555 0100"));
        }

        #[test]
        fn answers_are_stored_verbatim_even_if_affirmative() {
            let mut draft = LeadDraft::new();
            draft.accept(LeadStep::Name, "yes");
            assert_eq!(draft.name(), Some("yes"));
        }

        #[test]
        fn missing_required_field_is_rejected_and_draft_drained() {
            let mut draft = LeadDraft::new();
            draft.accept(LeadStep::Name, "Jane");
            let outcome = draft.accept(LeadStep::Description, "Need a site");
            assert_eq!(
                outcome,
                StepOutcome::Rejected(ValidationError::empty_field("email"))
            );
            assert!(draft.is_empty());
        }
    }

    mod record {
        use super::*;

        #[test]
        fn blank_required_fields_are_rejected() {
            assert!(LeadRecord::new("", "a@b.c", None, "hi").is_err());
            assert!(LeadRecord::new("Jane", "  ", None, "hi").is_err());
            assert!(LeadRecord::new("Jane", "a@b.c", None, "").is_err());
        }

        #[test]
        fn blank_phone_becomes_none() {
            let record = LeadRecord::new("Jane", "a@b.c", Some(" ".to_string()), "hi").unwrap();
            assert_eq!(record.phone(), None);
        }

        #[test]
        fn serializes_without_absent_phone() {
            let record = LeadRecord::new("Jane", "a@b.c", None, "hi").unwrap();
            let json = serde_json::to_value(&record).unwrap();
            assert_eq!(
                json,
                serde_json::json!({"name": "Jane", "email": "a@b.c", "message": "hi"})
            );
        }

        #[test]
        fn serializes_phone_when_present() {
            let record =
                LeadRecord::new("Jane", "a@b.c", Some("555".to_string()), "hi").unwrap();
            let json = serde_json::to_value(&record).unwrap();
            assert_eq!(json["phone"], "555");
        }
    }
}
