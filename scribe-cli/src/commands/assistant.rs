//! Assistant command handlers
//!
//! Handles assistant lifecycle commands: creating from an instruction
//! preset or file, listing, and deleting.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Config;
use crate::instructions::InstructionPreset;
use scribe_client::OpenAiClient;
use scribe_core::domain::assistant::Assistant;
use scribe_core::dto::assistant::{AssistantTool, CreateAssistant};

/// Assistant subcommands
#[derive(Subcommand)]
pub enum AssistantCommands {
    /// Create a new assistant with the retrieval tool enabled
    Create {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Short description
        #[arg(long)]
        description: Option<String>,

        /// Built-in instruction preset
        #[arg(long, value_enum, default_value = "summary")]
        instructions: InstructionPreset,

        /// Read instructions from a file instead of a preset
        #[arg(long, conflicts_with = "instructions")]
        instructions_file: Option<PathBuf>,
    },
    /// List all assistants
    List,
    /// Delete an assistant
    Delete {
        /// Assistant id
        id: String,
    },
    /// Delete every assistant owned by this API key
    Clear,
}

/// Handle assistant commands
pub async fn handle_assistant_command(command: AssistantCommands, config: &Config) -> Result<()> {
    let client = config.client();

    match command {
        AssistantCommands::Create {
            name,
            description,
            instructions,
            instructions_file,
        } => {
            create_assistant(&client, config, name, description, instructions, instructions_file)
                .await
        }
        AssistantCommands::List => list_assistants(&client).await,
        AssistantCommands::Delete { id } => delete_assistant(&client, &id).await,
        AssistantCommands::Clear => clear_assistants(&client).await,
    }
}

/// Create an assistant from a preset or an instructions file
async fn create_assistant(
    client: &OpenAiClient,
    config: &Config,
    name: Option<String>,
    description: Option<String>,
    preset: InstructionPreset,
    instructions_file: Option<PathBuf>,
) -> Result<()> {
    let instructions = match instructions_file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read instructions from {}", path.display()))?,
        None => preset.text().to_string(),
    };

    let assistant = client
        .create_assistant(CreateAssistant {
            model: config.model.clone(),
            name,
            description,
            instructions: Some(instructions),
            tools: vec![AssistantTool::retrieval()],
        })
        .await
        .context("Failed to create assistant")?;

    println!("{}", "Assistant created:".bold());
    print_assistant(&assistant);

    Ok(())
}

/// List all assistants
async fn list_assistants(client: &OpenAiClient) -> Result<()> {
    let assistants = client.list_assistants().await?;

    if assistants.is_empty() {
        println!("{}", "No assistants found.".yellow());
    } else {
        println!("{}", format!("Found {} assistant(s):", assistants.len()).bold());
        println!();
        for assistant in assistants {
            print_assistant(&assistant);
        }
    }

    Ok(())
}

/// Delete a single assistant
async fn delete_assistant(client: &OpenAiClient, id: &str) -> Result<()> {
    let deleted = client
        .delete_assistant(id)
        .await
        .with_context(|| format!("Failed to delete assistant {}", id))?;

    if deleted.deleted {
        println!("{} Deleted assistant {}", "✓".green(), deleted.id);
    } else {
        println!("{} Assistant {} was not deleted", "✗".red(), deleted.id);
    }

    Ok(())
}

/// Delete every assistant owned by this API key
async fn clear_assistants(client: &OpenAiClient) -> Result<()> {
    let assistants = client.list_assistants().await?;

    if assistants.is_empty() {
        println!("{}", "Nothing to clear.".yellow());
        return Ok(());
    }

    for assistant in &assistants {
        client
            .delete_assistant(&assistant.id)
            .await
            .with_context(|| format!("Failed to delete assistant {}", assistant.id))?;
        println!("{} Deleted {}", "✓".green(), assistant.id.dimmed());
    }

    println!("{}", format!("Cleared {} assistant(s).", assistants.len()).bold());

    Ok(())
}

/// Print one assistant record
fn print_assistant(assistant: &Assistant) {
    println!("  {} {}", "▸".cyan(), assistant.id.cyan());
    if let Some(name) = &assistant.name {
        println!("    Name:    {}", name);
    }
    if let Some(description) = &assistant.description {
        println!("    About:   {}", description.dimmed());
    }
    println!("    Model:   {}", assistant.model);
    println!(
        "    Created: {}",
        assistant
            .created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    println!();
}
