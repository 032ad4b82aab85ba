//! One-shot chat completion command

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;
use scribe_core::domain::chat::ChatMessage;

/// Ask a single question without any assistant or thread
pub async fn handle_ask(config: &Config, prompt: &str, system: Option<String>) -> Result<()> {
    let client = config.client();

    let mut messages = Vec::new();
    if let Some(system) = system {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(prompt));

    let completion = client
        .create_chat_completion(&config.model, messages)
        .await
        .context("Chat completion request failed")?;

    match completion.first_content() {
        Some(content) => println!("{}", content),
        None => println!("{}", "The model returned no choices.".yellow()),
    }

    Ok(())
}
