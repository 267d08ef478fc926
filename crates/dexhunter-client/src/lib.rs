//! # DexHunter API client
//!
//! Thin reqwest wrapper around the DexHunter DEX-aggregator REST API:
//! trending pairs, swap estimates, and the global buy/sell activity stats
//! that the sentiment worker polls.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default production API base URL.
pub const DEFAULT_API_URL: &str = "https://api-us.dexhunterv3.app";

/// DEXes excluded from swap estimates.
pub const BLACKLISTED_DEXES: &[&str] = &["CERRA", "MUESLISWAP", "GENIUS"];

/// Browser-like User-Agent; the API rejects default client user agents.
const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// One trending pair row from `/swap/trending`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingPair {
    pub token_id: String,
    #[serde(default)]
    pub current_period_volume: f64,
    #[serde(default)]
    pub volume_change_percentage: f64,
    #[serde(default)]
    pub price_change_percentage: f64,
    #[serde(default)]
    pub current_period_closing_price: f64,
    #[serde(default)]
    pub amount_buys: u64,
    #[serde(default)]
    pub amount_sales: u64,
}

/// Swap estimate from `/swap/estimate`. Fields the API omits stay `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct SwapEstimate {
    #[serde(default)]
    pub token_in_symbol: Option<String>,
    #[serde(default)]
    pub token_out_symbol: Option<String>,
    #[serde(default)]
    pub amount_out: Option<f64>,
    #[serde(default)]
    pub price_impact: Option<f64>,
    /// Human-readable DEX routing summary.
    #[serde(default)]
    pub route_summary: Option<String>,
}

/// One global buy/sell activity record from `/stats/global`.
///
/// Volumes and counts cover the upstream-defined rolling window; the endpoint
/// returns records most-recent-first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GlobalStats {
    #[serde(default)]
    pub global_buy_volume: f64,
    #[serde(default)]
    pub global_sell_volume: f64,
    #[serde(default)]
    pub global_buy_count: u64,
    #[serde(default)]
    pub global_sell_count: u64,
    /// Total trades in the window.
    #[serde(default)]
    pub count: u64,
}

#[derive(Serialize)]
struct TrendingRequest<'a> {
    sort: &'a str,
    period: &'a str,
}

#[derive(Serialize)]
struct EstimateRequest<'a> {
    amount_in: f64,
    token_in: &'a str,
    token_out: &'a str,
    slippage: f64,
    blacklisted_dexes: &'a [&'a str],
}

/// DexHunter REST client. Cheap to clone; the base URL is injectable so
/// tests can point it at a mock server.
#[derive(Clone)]
pub struct DexHunterClient {
    http: reqwest::Client,
    base_url: String,
}

impl DexHunterClient {
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

    /// Fetches trending pairs for the given period (`5m`, `1h`, `24h`),
    /// sorted by volume.
    pub async fn trending(&self, period: &str) -> anyhow::Result<Vec<TrendingPair>> {
        let url = format!("{}/swap/trending", self.base_url);
        debug!(url = %url, period = %period, "DexHunter trending request");

        let pairs = self
            .http
            .post(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&TrendingRequest {
                sort: "VOLUME_AMOUNT",
                period,
            })
            .send()
            .await
            .context("DexHunter trending request failed")?
            .error_for_status()
            .context("DexHunter trending returned error status")?
            .json()
            .await
            .context("Invalid DexHunter trending payload")?;

        Ok(pairs)
    }

    /// Fetches a swap estimate for `amount_in` of `token_in` into `token_out`
    /// with the given slippage percentage. Blacklisted DEXes are excluded.
    pub async fn estimate(
        &self,
        amount_in: f64,
        token_in: &str,
        token_out: &str,
        slippage: f64,
    ) -> anyhow::Result<SwapEstimate> {
        let url = format!("{}/swap/estimate", self.base_url);
        debug!(url = %url, amount_in, token_in = %token_in, token_out = %token_out, "DexHunter estimate request");

        let estimate = self
            .http
            .post(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&EstimateRequest {
                amount_in,
                token_in,
                token_out,
                slippage,
                blacklisted_dexes: BLACKLISTED_DEXES,
            })
            .send()
            .await
            .context("DexHunter estimate request failed")?
            .error_for_status()
            .context("DexHunter estimate returned error status")?
            .json()
            .await
            .context("Invalid DexHunter estimate payload")?;

        Ok(estimate)
    }

    /// Fetches global buy/sell activity records, most-recent-first.
    pub async fn global_stats(&self) -> anyhow::Result<Vec<GlobalStats>> {
        let url = format!("{}/stats/global", self.base_url);
        debug!(url = %url, "DexHunter global stats request");

        let stats = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .context("DexHunter global stats request failed")?
            .error_for_status()
            .context("DexHunter global stats returned error status")?
            .json()
            .await
            .context("Invalid DexHunter global stats payload")?;

        Ok(stats)
    }
}

impl Default for DexHunterClient {
    fn default() -> Self {
        Self::new()
    }
}
