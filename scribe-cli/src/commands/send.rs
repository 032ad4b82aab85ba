//! Send-message command
//!
//! Posts a message into an existing thread, runs the assistant, and prints
//! the reply. The thread is kept so the conversation can continue.

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;
use scribe_client::{SummarizeOutcome, Summarizer};
use scribe_core::dto::thread::CreateMessage;

/// Send a message and wait for the assistant's reply
pub async fn handle_send(
    config: &Config,
    message: &str,
    assistant_id: &str,
    thread_id: &str,
) -> Result<()> {
    let client = config.client();
    let summarizer = Summarizer::new(config.poller());

    let outcome = summarizer
        .run_exchange(&client, thread_id, assistant_id, CreateMessage::user(message))
        .await
        .context("Exchange failed")?;

    match outcome {
        SummarizeOutcome::Summary(reply) => println!("{}", reply),
        SummarizeOutcome::RunEnded(status) => {
            println!(
                "{}",
                format!("Run ended with status '{}'. Unable to complete the request.", status)
                    .red()
            );
        }
    }

    Ok(())
}
