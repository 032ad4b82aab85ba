//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod ask;
mod assistant;
mod send;
mod summarize;
mod thread;
mod upload;

pub use assistant::AssistantCommands;
pub use thread::ThreadCommands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Ask a one-shot question (plain chat completion, no assistant)
    Ask {
        /// The question or prompt
        prompt: String,

        /// Optional system prompt
        #[arg(long)]
        system: Option<String>,
    },
    /// Assistant management
    Assistant {
        #[command(subcommand)]
        command: AssistantCommands,
    },
    /// Upload a document and attach it to an assistant
    Upload {
        /// Path to the document
        file: PathBuf,

        /// Assistant to attach the file to
        #[arg(long)]
        assistant: String,
    },
    /// Thread management
    Thread {
        #[command(subcommand)]
        command: ThreadCommands,
    },
    /// Send a message in an existing thread and wait for the reply
    Send {
        /// The message to send
        message: String,

        /// Assistant to run over the thread
        #[arg(long)]
        assistant: String,

        /// Thread to post into
        #[arg(long)]
        thread: String,
    },
    /// Upload a document and summarize it in a throwaway thread
    Summarize {
        /// Path to the document
        file: PathBuf,

        /// Assistant to run, must have the retrieval tool enabled
        #[arg(long)]
        assistant: String,

        /// What to ask about the document
        #[arg(long, default_value = "Summarize this document.")]
        prompt: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Ask { prompt, system } => ask::handle_ask(config, &prompt, system).await,
        Commands::Assistant { command } => assistant::handle_assistant_command(command, config).await,
        Commands::Upload { file, assistant } => upload::handle_upload(config, &file, &assistant).await,
        Commands::Thread { command } => thread::handle_thread_command(command, config).await,
        Commands::Send {
            message,
            assistant,
            thread,
        } => send::handle_send(config, &message, &assistant, &thread).await,
        Commands::Summarize {
            file,
            assistant,
            prompt,
        } => summarize::handle_summarize(config, &file, &assistant, &prompt).await,
    }
}
