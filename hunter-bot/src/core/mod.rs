//! Core abstractions: [`Bot`], [`Handler`], message and user types, errors,
//! and tracing initialization. Transport-agnostic; the telegram module maps
//! these onto teloxide.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};
