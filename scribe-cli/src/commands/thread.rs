//! Thread command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// Thread subcommands
#[derive(Subcommand)]
pub enum ThreadCommands {
    /// Create a new, empty thread
    Create,
    /// Retrieve a thread
    Get {
        /// Thread id
        id: String,
    },
    /// Delete a thread and its messages
    Delete {
        /// Thread id
        id: String,
    },
}

/// Handle thread commands
pub async fn handle_thread_command(command: ThreadCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        ThreadCommands::Create => {
            let thread = client.create_thread().await.context("Failed to create thread")?;
            println!("{} Created thread {}", "✓".green(), thread.id.cyan());
            Ok(())
        }
        ThreadCommands::Get { id } => {
            let thread = client
                .get_thread(&id)
                .await
                .with_context(|| format!("Failed to retrieve thread {}", id))?;
            println!("{}", "Thread:".bold());
            println!("  ID:      {}", thread.id.cyan());
            println!(
                "  Created: {}",
                thread.created_at.format("%Y-%m-%d %H:%M:%S")
            );
            Ok(())
        }
        ThreadCommands::Delete { id } => {
            let deleted = client
                .delete_thread(&id)
                .await
                .with_context(|| format!("Failed to delete thread {}", id))?;
            if deleted.deleted {
                println!("{} Deleted thread {}", "✓".green(), deleted.id);
            } else {
                println!("{} Thread {} was not deleted", "✗".red(), deleted.id);
            }
            Ok(())
        }
    }
}
