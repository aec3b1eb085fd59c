//! Terminal front end for the chat widget.
//!
//! Mounts one dialogue controller, reads visitor lines from stdin and prints
//! every appended message. The session is discarded at end of input.

use std::error::Error;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use concierge::adapters::proxy::{ProxyChatClient, ProxyLeadClient};
use concierge::application::{ControllerConfig, DialogueController, TurnOutcome};
use concierge::config::AppConfig;
use concierge::domain::conversation::{ChatMessage, MessageRole};
use concierge::telemetry::init_tracing;

const GREETING: &str = "Hi! Ask me anything about our services, or say \"I want a quote\" to get in touch.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server.log_level, config.server.json_logs());
    config.widget.validate()?;

    let request_timeout = config.widget.turn_timeout().unwrap_or(config.ai.timeout());
    let chat = ProxyChatClient::new(&config.widget.proxy_url, request_timeout)?;
    let leads = ProxyLeadClient::new(&config.widget.proxy_url, request_timeout)?;

    let controller = DialogueController::new(
        Arc::new(chat),
        Arc::new(leads),
        ControllerConfig {
            contact_email: config.widget.contact_email.clone(),
            turn_timeout: config.widget.turn_timeout(),
        },
    );

    println!("{}", GREETING);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let TurnOutcome::Replied { user, reply } = controller.submit(&line).await {
            render(&user);
            render(&reply);
        }
    }

    Ok(())
}

fn render(message: &ChatMessage) {
    let who = match message.role() {
        MessageRole::User => "you",
        MessageRole::Assistant => "assistant",
    };
    println!("[{}] {}: {}", message.created_at().clock(), who, message.content());
}
