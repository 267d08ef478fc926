//! Handler implementations: logging, command dispatch, unknown-text fallback.

mod command_handler;
mod commands;
mod fallback_handler;
mod logging_handler;

pub use command_handler::CommandHandler;
pub use commands::{Command, TrendingPeriod, WELCOME_TEXT};
pub use fallback_handler::FallbackHandler;
pub use logging_handler::LoggingHandler;
