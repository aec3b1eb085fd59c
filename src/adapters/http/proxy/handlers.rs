//! HTTP handlers for the proxy endpoints
//!
//! Each handler validates the body, calls one port and maps the port's error
//! to a status code plus `{"error": ...}` body.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::conversation::LeadRecord;
use crate::domain::foundation::Timestamp;
use crate::ports::{ChatError, ChatProvider, LeadError, LeadSubmitter};

use super::dto::{
    ChatRequest, ChatResponse, DiagnosticsResponse, ErrorResponse, LeadRequest, LeadResponse,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

const MESSAGE_REQUIRED: &str = "Message is required";
const KEY_NOT_CONFIGURED: &str = "OpenRouter API key not configured";
const INVALID_KEY: &str = "Invalid OpenRouter API key. Please check your API key configuration.";
const NO_MODEL_RESPONSE: &str = "No response from AI model - unexpected data structure";
const LEAD_FIELDS_REQUIRED: &str = "Name, email, and message are required";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Facts reported by the diagnostic endpoint, captured at startup.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub has_api_key: bool,
    pub api_key_length: usize,
    pub environment: String,
}

/// Shared state for the proxy handlers
#[derive(Clone)]
pub struct ProxyAppState {
    pub chat: Arc<dyn ChatProvider>,
    pub leads: Arc<dyn LeadSubmitter>,
    pub diagnostics: Diagnostics,
}

impl ProxyAppState {
    pub fn new(
        chat: Arc<dyn ChatProvider>,
        leads: Arc<dyn LeadSubmitter>,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            chat,
            leads,
            diagnostics,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Forward one visitor message to the language model
///
/// POST /api/chat
pub async fn chat(
    State(state): State<ProxyAppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(rejected_body)?;

    let message = req
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, MESSAGE_REQUIRED))?;

    let response = state.chat.send_message(&message).await.map_err(chat_error)?;

    Ok(Json(ChatResponse { response }))
}

/// Forward a captured lead to the form provider
///
/// POST /api/lead
pub async fn submit_lead(
    State(state): State<ProxyAppState>,
    body: Result<Json<LeadRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(rejected_body)?;

    let lead = LeadRecord::new(
        req.name.unwrap_or_default(),
        req.email.unwrap_or_default(),
        req.phone,
        req.message.unwrap_or_default(),
    )
    .map_err(|_| error(StatusCode::BAD_REQUEST, LEAD_FIELDS_REQUIRED))?;

    let receipt = state.leads.submit(&lead).await.map_err(lead_error)?;
    tracing::info!(has_phone = lead.phone().is_some(), "Lead forwarded");

    Ok(Json(LeadResponse {
        success: true,
        message: receipt.confirmation,
    }))
}

/// Report whether the proxy is configured, without revealing the key
///
/// GET /api/test
pub async fn diagnostics(State(state): State<ProxyAppState>) -> impl IntoResponse {
    let d = &state.diagnostics;
    Json(DiagnosticsResponse {
        has_api_key: d.has_api_key,
        api_key_length: d.api_key_length,
        environment: d.environment.clone(),
        timestamp: Timestamp::now().to_rfc3339(),
    })
}

/// Liveness probe
///
/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════════

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}

fn rejected_body(rejection: JsonRejection) -> ApiError {
    tracing::warn!(error = %rejection.body_text(), "Unreadable request body");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::server_error(rejection.body_text())),
    )
}

/// Relays the upstream status; unknown codes become 502.
fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

fn chat_error(err: ChatError) -> ApiError {
    match err {
        ChatError::NotConfigured(_) => error(StatusCode::INTERNAL_SERVER_ERROR, KEY_NOT_CONFIGURED),
        ChatError::InvalidRequest(_) => error(StatusCode::BAD_REQUEST, MESSAGE_REQUIRED),
        ChatError::AuthenticationFailed => error(StatusCode::UNAUTHORIZED, INVALID_KEY),
        ChatError::Upstream { status, body } => error(
            upstream_status(status),
            format!("OpenRouter API error ({}): {}", status, body),
        ),
        ChatError::EmptyReply => error(StatusCode::INTERNAL_SERVER_ERROR, NO_MODEL_RESPONSE),
        other @ (ChatError::Network(_) | ChatError::Parse(_) | ChatError::Timeout { .. }) => {
            tracing::error!(error = %other, "Chat request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::server_error(other)),
            )
        }
    }
}

fn lead_error(err: LeadError) -> ApiError {
    match err {
        LeadError::Invalid(_) => error(StatusCode::BAD_REQUEST, LEAD_FIELDS_REQUIRED),
        LeadError::Rejected { status, body } => error(
            upstream_status(status),
            format!("Form submission failed ({}): {}", status, body),
        ),
        other @ (LeadError::Network(_) | LeadError::Parse(_) | LeadError::Timeout { .. }) => {
            tracing::error!(error = %other, "Lead forwarding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::server_error(other)),
            )
        }
    }
}
