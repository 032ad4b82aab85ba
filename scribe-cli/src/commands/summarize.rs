//! End-to-end summarize command
//!
//! Uploads a document, attaches it to the assistant, and runs the full
//! thread workflow: message with file, run, poll, print, delete thread.

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;
use scribe_client::{SummarizeOutcome, Summarizer};

/// Summarize a document in a throwaway thread
pub async fn handle_summarize(
    config: &Config,
    file: &Path,
    assistant_id: &str,
    prompt: &str,
) -> Result<()> {
    let client = config.client();

    let handle = client
        .upload_file(file, "assistants")
        .await
        .with_context(|| format!("Failed to upload {}", file.display()))?;
    println!("{} Uploaded {} as {}", "✓".green(), handle.filename, handle.id.dimmed());

    client
        .attach_file_to_assistant(assistant_id, &handle.id)
        .await
        .with_context(|| format!("Failed to attach file to assistant {}", assistant_id))?;

    let summarizer = Summarizer::new(config.poller());
    let outcome = summarizer
        .summarize(&client, assistant_id, &handle.id, prompt)
        .await
        .context("Summarize workflow failed")?;

    match outcome {
        SummarizeOutcome::Summary(summary) => {
            println!();
            println!("{}", summary);
        }
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
