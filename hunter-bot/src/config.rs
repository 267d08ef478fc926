//! Bot configuration loaded from environment variables.

use anyhow::{bail, Context, Result};
use std::env;

/// Runtime configuration. Secrets come from the environment; everything else
/// has a default matching production.
pub struct BotConfig {
    pub bot_token: String,
    /// Destination chat for sentiment worker notifications.
    pub channel_id: i64,
    pub dexhunter_api_url: String,
    pub koios_api_url: String,
    pub coingecko_api_url: String,
    /// Steady-state worker poll interval in seconds.
    pub worker_poll_secs: u64,
    /// Error backoff interval in seconds (shorter than the poll interval).
    pub worker_retry_secs: u64,
    pub log_file: String,
    /// Optional Telegram Bot API base URL (tests point it at a mock server).
    /// Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads configuration from environment variables. A token passed in
    /// (e.g. from the CLI) overrides `BOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let channel_id = env::var("CHANNEL_ID")
            .context("CHANNEL_ID not set")?
            .parse::<i64>()
            .context("CHANNEL_ID must be a numeric chat id")?;
        let dexhunter_api_url = env::var("DEXHUNTER_API_URL")
            .unwrap_or_else(|_| dexhunter_client::DEFAULT_API_URL.to_string());
        let koios_api_url = env::var("KOIOS_API_URL")
            .unwrap_or_else(|_| koios_client::DEFAULT_API_URL.to_string());
        let coingecko_api_url = env::var("COINGECKO_API_URL")
            .unwrap_or_else(|_| coingecko_client::DEFAULT_API_URL.to_string());
        let worker_poll_secs = env::var("WORKER_POLL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        let worker_retry_secs = env::var("WORKER_RETRY_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/hunter-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            channel_id,
            dexhunter_api_url,
            koios_api_url,
            coingecko_api_url,
            worker_poll_secs,
            worker_retry_secs,
            log_file,
            telegram_api_url,
        })
    }

    /// Rejects configurations the bot cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            bail!("bot_token must not be empty");
        }
        if self.channel_id == 0 {
            bail!("channel_id must be a real chat id");
        }
        if self.worker_poll_secs == 0 || self.worker_retry_secs == 0 {
            bail!("worker intervals must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "BOT_TOKEN",
            "CHANNEL_ID",
            "DEXHUNTER_API_URL",
            "KOIOS_API_URL",
            "COINGECKO_API_URL",
            "WORKER_POLL_SECS",
            "WORKER_RETRY_SECS",
            "LOG_FILE",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("CHANNEL_ID", "-1001234567890");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.channel_id, -1001234567890);
        assert_eq!(config.dexhunter_api_url, "https://api-us.dexhunterv3.app");
        assert_eq!(config.koios_api_url, "https://api.koios.rest/api/v1");
        assert_eq!(config.coingecko_api_url, "https://api.coingecko.com/api/v3");
        assert_eq!(config.worker_poll_secs, 60);
        assert_eq!(config.worker_retry_secs, 10);
        assert_eq!(config.log_file, "logs/hunter-bot.log");
        assert!(config.telegram_api_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("CHANNEL_ID", "42");
        env::set_var("DEXHUNTER_API_URL", "http://localhost:9001");
        env::set_var("WORKER_POLL_SECS", "5");
        env::set_var("WORKER_RETRY_SECS", "1");
        env::set_var("TELEGRAM_API_URL", "http://localhost:9002");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "custom_token");
        assert_eq!(config.channel_id, 42);
        assert_eq!(config.dexhunter_api_url, "http://localhost:9001");
        assert_eq!(config.worker_poll_secs, 5);
        assert_eq!(config.worker_retry_secs, 1);
        assert_eq!(
            config.telegram_api_url.as_deref(),
            Some("http://localhost:9002")
        );
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("CHANNEL_ID", "42");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "override_token");
    }

    #[test]
    #[serial]
    fn test_missing_channel_id_is_error() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        assert!(BotConfig::load(None).is_err());
    }

    #[test]
    #[serial]
    fn test_validate_rejects_zero_intervals() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("CHANNEL_ID", "42");

        let mut config = BotConfig::load(None).unwrap();
        config.worker_poll_secs = 0;
        assert!(config.validate().is_err());
    }
}
