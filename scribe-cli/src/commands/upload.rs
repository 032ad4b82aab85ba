//! Document upload command

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;

/// Upload a document and attach it to an assistant
pub async fn handle_upload(config: &Config, file: &Path, assistant_id: &str) -> Result<()> {
    let client = config.client();

    let handle = client
        .upload_file(file, "assistants")
        .await
        .with_context(|| format!("Failed to upload {}", file.display()))?;

    client
        .attach_file_to_assistant(assistant_id, &handle.id)
        .await
        .with_context(|| format!("Failed to attach file to assistant {}", assistant_id))?;

    println!(
        "{} Uploaded {} ({} bytes) as {}",
        "✓".green(),
        handle.filename,
        handle.bytes,
        handle.id.cyan()
    );
    println!("  Attached to assistant {}", assistant_id.dimmed());

    Ok(())
}
