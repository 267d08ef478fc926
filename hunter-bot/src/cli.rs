//! Command-line interface for the bot binary.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "hunter-bot", about = "DexHunter & Cardano Telegram bot")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (REPL + sentiment worker)
    Run {
        /// Telegram bot token; overrides BOT_TOKEN from the environment
        #[arg(long)]
        token: Option<String>,
    },
}

/// Loads configuration with an optional token override from the CLI.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
