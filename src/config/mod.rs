//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONCIERGE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use concierge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Proxy listening on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod lead;
mod server;
mod widget;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use lead::LeadConfig;
pub use server::{Environment, ServerConfig};
pub use widget::WidgetConfig;

use serde::Deserialize;

/// Plain variable name many deployments already use for the key.
const FALLBACK_API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Proxy server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenRouter configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Lead form configuration
    #[serde(default)]
    pub lead: LeadConfig,

    /// Widget runtime configuration
    #[serde(default)]
    pub widget: WidgetConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONCIERGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `OPENROUTER_API_KEY` when no prefixed key is set
    ///
    /// # Environment Variable Format
    ///
    /// - `CONCIERGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONCIERGE__AI__OPENROUTER_API_KEY=...` -> `ai.openrouter_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONCIERGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if !config.ai.has_api_key() {
            config.ai.openrouter_api_key = std::env::var(FALLBACK_API_KEY_VAR)
                .ok()
                .filter(|k| !k.is_empty());
        }

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.lead.validate()?;
        self.widget.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
