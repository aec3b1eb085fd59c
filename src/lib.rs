//! Concierge - Website chat widget with scripted lead capture
//!
//! The widget routes each visitor turn either to a hosted language model or
//! through a four-step lead form. A small proxy service holds the model and
//! form credentials on the widget's behalf.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
