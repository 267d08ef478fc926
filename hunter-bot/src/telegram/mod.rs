//! Telegram layer: teloxide adapters, [`crate::core::Bot`] implementation,
//! and the long-polling REPL runner. Handles only Telegram connectivity and
//! handler-chain execution.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
