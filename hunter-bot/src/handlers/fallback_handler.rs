//! Terminal handler: any non-empty text that no earlier handler consumed
//! gets the unknown-command hint.

use std::sync::Arc;

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;

const UNKNOWN_HINT: &str = "❌ Unknown command. Use /start to see available commands.";

/// Replies with a hint for unrecognized text and stops the chain.
pub struct FallbackHandler {
    bot: Arc<dyn Bot>,
}

impl FallbackHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for FallbackHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.trim().is_empty() {
            return Ok(HandlerResponse::Stop);
        }
        self.bot.reply_to(message, UNKNOWN_HINT).await?;
        Ok(HandlerResponse::Reply(UNKNOWN_HINT.to_string()))
    }
}
