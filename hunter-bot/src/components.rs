//! Component factory: builds the vendor clients, Telegram adapter, and
//! handler chain from config. Isolates assembly logic from the runner.

use std::sync::Arc;

use anyhow::Result;
use coingecko_client::CoinGeckoClient;
use dexhunter_client::DexHunterClient;
use koios_client::KoiosClient;
use tracing::{error, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot as CoreBot;
use crate::handlers::{CommandHandler, FallbackHandler, LoggingHandler};
use crate::telegram::TelegramBotAdapter;

/// Core dependencies for run_bot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn CoreBot>,
    pub dexhunter: Arc<DexHunterClient>,
    pub koios: Arc<KoiosClient>,
    pub coingecko: Arc<CoinGeckoClient>,
}

/// Builds BotComponents from config.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = teloxide::Bot::new(config.bot_token.clone());
        if let Some(ref url_str) = config.telegram_api_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            }
        } else {
            bot
        }
    };

    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let dexhunter = Arc::new(DexHunterClient::with_base_url(
        config.dexhunter_api_url.clone(),
    ));
    let koios = Arc::new(KoiosClient::with_base_url(config.koios_api_url.clone()));
    let coingecko = Arc::new(CoinGeckoClient::with_base_url(
        config.coingecko_api_url.clone(),
    ));

    Ok(BotComponents {
        teloxide_bot,
        bot,
        dexhunter,
        koios,
        coingecko,
    })
}

/// Builds the handler chain (logging → commands → fallback).
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    let command_handler = Arc::new(CommandHandler::new(
        components.bot.clone(),
        components.dexhunter.clone(),
        components.koios.clone(),
        components.coingecko.clone(),
    ));
    let fallback_handler = Arc::new(FallbackHandler::new(components.bot.clone()));

    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler::new()))
        .add_handler(command_handler)
        .add_handler(fallback_handler)
}
