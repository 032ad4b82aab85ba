//! Scribe CLI
//!
//! Command-line interface for summarizing documents through a hosted AI
//! assistant: upload a file, run the assistant over it in a throwaway
//! thread, and print the reply.

mod commands;
mod config;
mod instructions;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scribe")]
#[command(about = "Assistant-backed document summarizer", long_about = None)]
struct Cli {
    /// API credential
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the vendor API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = scribe_client::DEFAULT_BASE_URL)]
    base_url: String,

    /// Model for chat completions and newly created assistants
    #[arg(long, env = "SCRIBE_MODEL", default_value = "gpt-4-turbo-preview")]
    model: String,

    /// Seconds between run status fetches
    #[arg(long, default_value_t = 1)]
    poll_interval: u64,

    /// Seconds to wait for a run to finish before giving up
    #[arg(long, default_value_t = 300)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scribe_cli=info,scribe_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_key: cli.api_key,
        base_url: cli.base_url,
        model: cli.model,
        poll_interval: Duration::from_secs(cli.poll_interval),
        timeout: Duration::from_secs(cli.timeout),
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
