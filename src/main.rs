//! Proxy service entry point.
//!
//! Serves `/api/chat`, `/api/lead`, `/api/test` and `/health` for the widget.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;

use concierge::adapters::ai::{OpenRouterConfig, OpenRouterProvider};
use concierge::adapters::forms::{FramerFormConfig, FramerFormSubmitter};
use concierge::adapters::http::{build_router, Diagnostics, ProxyAppState};
use concierge::config::AppConfig;
use concierge::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server.log_level, config.server.json_logs());
    config.validate()?;

    if !config.ai.has_api_key() {
        tracing::warn!("No OpenRouter API key configured; /api/chat will answer with an error");
    }

    let chat = OpenRouterProvider::new(
        OpenRouterConfig::new(config.ai.openrouter_api_key.clone())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    )?;
    let leads = FramerFormSubmitter::new(
        FramerFormConfig::default()
            .with_form_url(config.lead.form_url.clone())
            .with_timeout(config.lead.timeout()),
    )?;
    let diagnostics = Diagnostics {
        has_api_key: config.ai.has_api_key(),
        api_key_length: config
            .ai
            .openrouter_api_key
            .as_deref()
            .map_or(0, |k| k.chars().count()),
        environment: config.server.environment.to_string(),
    };

    let state = ProxyAppState::new(Arc::new(chat), Arc::new(leads), diagnostics);
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = %config.server.environment, "Proxy service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Proxy service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
