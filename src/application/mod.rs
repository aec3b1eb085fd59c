//! Application layer - Orchestrates the dialogue against its ports.
//!
//! The domain session decides what each turn means; the controller performs
//! the one outbound call a turn may need and records the outcome.

mod controller;

pub use controller::{ControllerConfig, DialogueController, IgnoreReason, TurnOutcome};
