//! # DexHunter & Cardano Telegram bot
//!
//! Wires the command handlers, vendor API clients (DexHunter, Koios,
//! CoinGecko), and the periodic sentiment worker. Loads config from env and
//! runs the Telegram REPL.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod format;
pub mod handlers;
pub mod runner;
pub mod sentiment;
pub mod telegram;
pub mod worker;

// Re-export CLI
pub use cli::{load_config, Cli, Commands};

// Re-export core
pub use core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerError, HandlerResponse, Message,
    MessageDirection, Result, ToCoreMessage, ToCoreUser, User,
};

// Re-export chain
pub use chain::HandlerChain;

// Re-export telegram
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};

pub use config::BotConfig;
pub use runner::run_bot;

pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use handlers::{Command, CommandHandler, FallbackHandler, LoggingHandler, TrendingPeriod};
pub use sentiment::{render_update, sentiment_value, Classification};
pub use worker::{SentimentSource, SentimentWorker};
