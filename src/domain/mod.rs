//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors, state machine trait)
//! - `conversation` - Message log, intent classifiers, lead capture and dialogue modes

pub mod conversation;
pub mod foundation;
