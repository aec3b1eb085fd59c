//! Proxy HTTP adapter - The endpoints the widget calls.
//!
//! Holds upstream credentials so the widget never sees them.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatRequest, ChatResponse, DiagnosticsResponse, ErrorResponse, LeadRequest, LeadResponse,
};
pub use handlers::{chat, diagnostics, health, submit_lead, Diagnostics, ProxyAppState};
pub use routes::routes as proxy_router;
