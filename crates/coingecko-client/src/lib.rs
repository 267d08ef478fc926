//! # CoinGecko price client
//!
//! Minimal reqwest wrapper for the CoinGecko simple-price endpoint; only the
//! ADA quote (USD price, 24h volume, market cap) is consumed.

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::debug;

/// Default production API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// ADA quote from `/simple/price`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdaPrice {
    pub usd: f64,
    #[serde(default)]
    pub usd_24h_vol: Option<f64>,
    #[serde(default)]
    pub usd_market_cap: Option<f64>,
}

#[derive(Deserialize)]
struct SimplePriceResponse {
    cardano: Option<AdaPrice>,
}

/// CoinGecko REST client. Cheap to clone; base URL injectable for tests.
#[derive(Clone)]
pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoinGeckoClient {
    /// Creates a client against the production API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL.to_string())
    }

    /// Creates a client against the given base URL (no trailing slash).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetches the current ADA price in USD with 24h volume and market cap.
    pub async fn ada_price(&self) -> anyhow::Result<AdaPrice> {
        let url = format!("{}/simple/price", self.base_url);
        debug!(url = %url, "CoinGecko simple price request");

        let response: SimplePriceResponse = self
            .http
            .get(&url)
            .query(&[
                ("ids", "cardano"),
                ("vs_currencies", "usd"),
                ("include_24hr_vol", "true"),
                ("include_market_cap", "true"),
            ])
            .send()
            .await
            .context("CoinGecko price request failed")?
            .error_for_status()
            .context("CoinGecko price returned error status")?
            .json()
            .await
            .context("Invalid CoinGecko price payload")?;

        match response.cardano {
            Some(price) => Ok(price),
            None => bail!("CoinGecko response has no cardano entry"),
        }
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}
