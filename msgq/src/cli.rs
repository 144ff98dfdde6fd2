//! CLI parser and command runner.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use message_store::{MessageKind, MessageQuery, MessageRepository};
use tracing::info;

#[derive(Parser)]
#[command(name = "msgq")]
#[command(about = "Message lookup CLI: find, type, id, list, search, stats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file of messages (overrides MESSAGES_FILE; default is the built-in samples).
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Look up by id when QUERY is numeric, otherwise by type.
    Find {
        #[arg(allow_hyphen_values = true)]
        query: String,
    },
    /// All messages of one type (Image or Video).
    Type { kind: String },
    /// The message with this id, or null.
    Id {
        #[arg(allow_hyphen_values = true)]
        id: i64,
    },
    /// All messages in order.
    List,
    /// Messages whose content contains KEYWORD.
    Search {
        keyword: String,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Counts per type and duplicate ids.
    Stats,
}

/// Runs one command against `repo` and returns pretty JSON for stdout.
pub fn run(command: &Commands, repo: &MessageRepository) -> Result<String> {
    let json = match command {
        Commands::Find { query } => {
            let query = MessageQuery::parse(query);
            info!(?query, "find");
            serde_json::to_string_pretty(&repo.query(&query))?
        }
        Commands::Type { kind } => {
            let kind: MessageKind = kind
                .parse()
                .with_context(|| format!("Expected one of: {}", kind_names()))?;
            serde_json::to_string_pretty(&repo.find_by_type(kind))?
        }
        Commands::Id { id } => serde_json::to_string_pretty(&repo.find_by_id(*id))?,
        Commands::List => serde_json::to_string_pretty(repo.records())?,
        Commands::Search { keyword, limit } => {
            serde_json::to_string_pretty(&repo.search_messages(keyword, *limit))?
        }
        Commands::Stats => serde_json::to_string_pretty(&repo.stats())?,
    };
    Ok(json)
}

fn kind_names() -> String {
    MessageKind::ALL
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
