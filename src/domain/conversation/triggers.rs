//! Keyword classifiers for visitor intent.
//!
//! Both classifiers lower-case the input and look for any listed phrase as a
//! plain substring. There is no tokenization and no negation handling:
//! "I don't need help" matches "need help".

/// Phrases that signal the visitor wants to be contacted or quoted.
pub const LEAD_TRIGGER_PHRASES: &[&str] = &[
    "i want a quote",
    "get a quote",
    "request a quote",
    "contact you",
    "contact us",
    "get in touch",
    "i need help",
    "need help",
    "do you do",
    "can you build",
    "work with you",
    "hire you",
    "talk to someone",
    "speak to someone",
    "book a call",
];

/// Phrases accepted as "yes, take my details".
pub const CONFIRMATION_PHRASES: &[&str] = &[
    "yes",
    "yeah",
    "yep",
    "sure",
    "ok",
    "okay",
    "please",
    "go ahead",
    "let's do that",
    "let's do it",
    "sounds good",
    "submit",
];

/// Returns true if the text asks for help, a quote or contact.
pub fn is_lead_trigger(text: &str) -> bool {
    contains_any(text, LEAD_TRIGGER_PHRASES)
}

/// Returns true if the text reads as an affirmative answer.
///
/// Anything else is treated as a decline.
pub fn is_confirmation(text: &str) -> bool {
    contains_any(text, CONFIRMATION_PHRASES)
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    phrases.iter().any(|phrase| lowered.contains(phrase))
}
