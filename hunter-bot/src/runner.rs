//! Main entry: init logging, validate config, build components, start the
//! sentiment worker, then run the Telegram REPL.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::telegram::run_repl;
use crate::worker::SentimentWorker;

/// Runs the bot until the process is stopped: REPL for inbound commands plus
/// the background sentiment worker.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    if let Some(parent) = Path::new(&config.log_file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    init_tracing(config.log_file.as_str())?;

    info!(
        channel_id = config.channel_id,
        poll_secs = config.worker_poll_secs,
        retry_secs = config.worker_retry_secs,
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let handler_chain = build_handler_chain(&components);

    let worker = SentimentWorker::new(
        components.bot.clone(),
        components.dexhunter.clone(),
        config.channel_id,
        Duration::from_secs(config.worker_poll_secs),
        Duration::from_secs(config.worker_retry_secs),
    );
    worker.start();

    info!("Bot started successfully");

    run_repl(components.teloxide_bot.clone(), handler_chain).await?;

    worker.stop();
    Ok(())
}
