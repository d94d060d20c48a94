//! Profile Scout CLI
//!
//! Public profile lookup and contact extraction from the terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use scout_core::replies;
use scout_runtime::{Scout, ScoutConfig, ScoutContext};

/// Printed between reply chunks
const CHUNK_SEPARATOR: &str = "\n----------------------------------------\n";

#[derive(Parser)]
#[command(name = "profile-scout")]
#[command(author, version, about = "Profile Scout: public profile lookup and contact extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1")]
    verbose: u8,

    /// TOML config file (or set SCOUT_CONFIG env var)
    #[arg(short, long, env = "SCOUT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one profile URL or handle
    Lookup {
        /// Profile URL, @handle or bare handle
        input: String,
    },

    /// Answer messages read line by line from stdin, like the chat bot
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = ScoutConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let ctx = ScoutContext::new(config).context("building HTTP client")?;
    let scout = Scout::new(ctx);

    match cli.command {
        Commands::Lookup { input } => {
            let chunks = scout.respond(&input).await;
            println!("{}", chunks.join(CHUNK_SEPARATOR));
        }
        Commands::Chat => {
            run_chat(&scout).await?;
        }
    }

    Ok(())
}

/// Minimal stand-in for the chat transport: `/start` and `/help` are
/// commands, other slash commands are ignored, everything else is a lookup.
async fn run_chat(scout: &Scout) -> Result<()> {
    println!("🤖 Bot is running...");
    println!("Send /start to begin\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let chunks = match command_name(text) {
            Some("start") => vec![replies::WELCOME.to_string()],
            Some("help") => vec![replies::HELP.to_string()],
            Some(_) => continue,
            None => scout.respond(text).await,
        };

        for chunk in chunks {
            println!("{chunk}");
            println!("{CHUNK_SEPARATOR}");
        }
    }

    Ok(())
}

/// `"/help@bot extra"` -> `Some("help")`
fn command_name(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('/')?;
    let word = rest.split_whitespace().next().unwrap_or_default();
    Some(word.split('@').next().unwrap_or_default())
}
