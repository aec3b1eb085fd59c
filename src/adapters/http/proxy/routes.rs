//! Route definitions for the proxy endpoints

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{chat, diagnostics, health, submit_lead, ProxyAppState};

/// Create the proxy router
///
/// # Endpoints
///
/// - `POST /api/chat` - Forward a message to the language model
/// - `POST /api/lead` - Forward a captured lead to the form provider
/// - `GET /api/test` - Configuration diagnostics
/// - `GET /health` - Liveness probe
pub fn routes() -> Router<ProxyAppState> {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/lead", post(submit_lead))
        .route("/api/test", get(diagnostics))
        .route("/health", get(health))
}
