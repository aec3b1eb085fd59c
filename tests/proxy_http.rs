//! Integration tests for the proxy service.
//!
//! Runs the real router over the real upstream adapters, with `wiremock`
//! standing in for OpenRouter and the form provider, then drives a widget
//! controller against the served router.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use concierge::adapters::ai::{OpenRouterConfig, OpenRouterProvider};
use concierge::adapters::forms::{FramerFormConfig, FramerFormSubmitter};
use concierge::adapters::http::{build_router, Diagnostics, ProxyAppState};
use concierge::adapters::proxy::{ProxyChatClient, ProxyLeadClient};
use concierge::application::{ControllerConfig, DialogueController};
use concierge::config::ServerConfig;
use concierge::ports::LEAD_CONFIRMATION;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn router(upstream: &MockServer, api_key: Option<&str>) -> Router {
    let chat = OpenRouterProvider::new(
        OpenRouterConfig::new(api_key.map(str::to_string))
            .with_base_url(upstream.uri())
            .with_timeout(Duration::from_secs(2)),
    )
    .unwrap();
    let leads = FramerFormSubmitter::new(
        FramerFormConfig::default()
            .with_form_url(format!("{}/forms/submit", upstream.uri()))
            .with_timeout(Duration::from_secs(2)),
    )
    .unwrap();
    let state = ProxyAppState::new(
        Arc::new(chat),
        Arc::new(leads),
        Diagnostics {
            has_api_key: api_key.is_some(),
            api_key_length: api_key.map_or(0, str::len),
            environment: "development".to_string(),
        },
    );
    build_router(state, &ServerConfig::default())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn mount_completion(upstream: &MockServer, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(upstream)
        .await;
}

// =============================================================================
// /api/chat
// =============================================================================

#[tokio::test]
async fn chat_relays_model_reply() {
    let upstream = MockServer::start().await;
    mount_completion(
        &upstream,
        200,
        json!({"choices": [{"message": {"content": "We build chatbots."}}]}),
    )
    .await;

    let (status, body) = post_json(
        router(&upstream, Some("sk-or-test")),
        "/api/chat",
        json!({"message": "What do you build?"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "We build chatbots."}));
}

#[tokio::test]
async fn chat_without_key_never_reaches_upstream() {
    let upstream = MockServer::start().await;

    let (status, body) =
        post_json(router(&upstream, None), "/api/chat", json!({"message": "hi"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "OpenRouter API key not configured");
    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn chat_maps_upstream_unauthorized() {
    let upstream = MockServer::start().await;
    mount_completion(&upstream, 401, json!({"error": "bad key"})).await;

    let (status, body) = post_json(
        router(&upstream, Some("sk-or-wrong")),
        "/api/chat",
        json!({"message": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["error"],
        "Invalid OpenRouter API key. Please check your API key configuration."
    );
}

#[tokio::test]
async fn chat_reports_unexpected_shape() {
    let upstream = MockServer::start().await;
    mount_completion(&upstream, 200, json!({"choices": []})).await;

    let (status, body) =
        post_json(router(&upstream, Some("k")), "/api/chat", json!({"message": "hi"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "No response from AI model - unexpected data structure");
}

// =============================================================================
// /api/lead
// =============================================================================

#[tokio::test]
async fn lead_is_forwarded_to_form() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/forms/submit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&upstream)
        .await;

    let (status, body) = post_json(
        router(&upstream, Some("k")),
        "/api/lead",
        json!({"name": "Jane", "email": "jane@x.com", "message": "A bot"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": LEAD_CONFIRMATION}));
}

#[tokio::test]
async fn lead_form_failure_is_relayed() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/forms/submit"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&upstream)
        .await;

    let (status, body) = post_json(
        router(&upstream, Some("k")),
        "/api/lead",
        json!({"name": "Jane", "email": "jane@x.com", "message": "A bot"}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Form submission failed (503): maintenance");
}

// =============================================================================
// Widget against a served proxy
// =============================================================================

#[tokio::test]
async fn widget_talks_to_served_proxy() {
    let upstream = MockServer::start().await;
    mount_completion(
        &upstream,
        200,
        json!({"choices": [{"message": {"content": "Happy to explain."}}]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/forms/submit"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&upstream)
        .await;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let proxy_url = format!("http://{}", listener.local_addr().unwrap());
    let app = router(&upstream, Some("k"));
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let controller = DialogueController::new(
        Arc::new(ProxyChatClient::new(&proxy_url, Duration::from_secs(5)).unwrap()),
        Arc::new(ProxyLeadClient::new(&proxy_url, Duration::from_secs(5)).unwrap()),
        ControllerConfig::default(),
    );

    let first = controller.submit("How does pricing work?").await;
    assert_eq!(first.reply().unwrap().content(), "Happy to explain.");

    for text in ["I want a quote", "yes", "Jane", "jane@x.com", "skip"] {
        controller.submit(text).await;
    }
    let last = controller.submit("A support bot").await;

    assert_eq!(last.reply().unwrap().content(), LEAD_CONFIRMATION);
    assert_eq!(controller.messages().await.len(), 14);
}
