//! Fixed texts the widget emits outside of LLM replies.

/// Offer made when a lead trigger is detected.
pub const LEAD_OFFER: &str = "I'd be happy to help! Would you like me to take down your details so our team can get back to you personally?";

/// First capture prompt, sent once the visitor accepts the offer.
pub const NAME_REQUEST: &str = "Great! Let's get your information. What's your full name?";

pub const EMAIL_REQUEST: &str = "What's your email address?";

pub const PHONE_REQUEST: &str =
    "What's your phone number? (optional, type \"skip\" if you'd rather not share it)";

pub const DESCRIPTION_REQUEST: &str = "What do you need help with?";

/// Address offered whenever the widget hands the visitor over to a human.
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@clonet.ai";

/// Texts that mention the human contact address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialoguePrompts {
    contact_email: String,
}

impl DialoguePrompts {
    pub fn new(contact_email: impl Into<String>) -> Self {
        Self {
            contact_email: contact_email.into(),
        }
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    /// Reply when the visitor turns down the capture offer.
    pub fn decline(&self) -> String {
        format!(
            "No problem! If you change your mind, you can always reach us at {}. Is there anything else I can help you with?",
            self.contact_email
        )
    }

    /// Reply substituted for a chat answer that could not be obtained.
    pub fn chat_failure(&self) -> String {
        format!(
            "Sorry, I'm having trouble responding right now. Please try again in a moment, or reach us directly at {}.",
            self.contact_email
        )
    }

    /// Reply substituted for a lead confirmation when submission fails.
    pub fn submission_failure(&self) -> String {
        format!(
            "Sorry, something went wrong while submitting your request. Please email us directly at {} and we'll get back to you as soon as possible.",
            self.contact_email
        )
    }
}

impl Default for DialoguePrompts {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_EMAIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks_mention_contact_address() {
        let prompts = DialoguePrompts::new("team@example.com");
        assert!(prompts.decline().contains("team@example.com"));
        assert!(prompts.chat_failure().contains("team@example.com"));
        assert!(prompts.submission_failure().contains("team@example.com"));
    }

    #[test]
    fn default_uses_default_contact() {
        assert_eq!(DialoguePrompts::default().contact_email(), DEFAULT_CONTACT_EMAIL);
    }
}
