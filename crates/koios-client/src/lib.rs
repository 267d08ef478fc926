//! # Koios API client
//!
//! Thin reqwest wrapper around the Koios Cardano indexer REST API (v1):
//! chain tip, epoch info, address info, and native-asset info.
//!
//! Koios returns lovelace sums as JSON strings; those fields are kept as
//! `String` and converted at render time.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default production API base URL.
pub const DEFAULT_API_URL: &str = "https://api.koios.rest/api/v1";

/// Latest block summary from `/tip`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainTip {
    pub hash: String,
    pub epoch_no: u64,
    pub abs_slot: u64,
    pub epoch_slot: u64,
    pub block_no: u64,
    pub block_time: i64,
}

/// Epoch summary from `/epoch_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct EpochInfo {
    pub epoch_no: u64,
    /// Total output in lovelace (text numeric).
    pub out_sum: String,
    /// Total fees in lovelace (text numeric).
    pub fees: String,
    pub tx_count: u64,
    pub blk_count: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub first_block_time: i64,
    pub last_block_time: i64,
    #[serde(default)]
    pub active_stake: Option<String>,
    #[serde(default)]
    pub total_rewards: Option<String>,
    #[serde(default)]
    pub avg_blk_reward: Option<String>,
}

/// Address summary from `/address_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressInfo {
    pub address: String,
    /// Balance in lovelace (text numeric).
    pub balance: String,
    #[serde(default)]
    pub stake_address: Option<String>,
    #[serde(default)]
    pub script_address: bool,
    #[serde(default)]
    pub asset_list: Vec<AddressAsset>,
}

/// One native asset held by an address.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressAsset {
    pub policy_id: String,
    #[serde(default)]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub fingerprint: Option<String>,
    pub quantity: String,
}

/// Native-asset details from `/asset_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetInfo {
    pub policy_id: String,
    #[serde(default)]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub asset_name_ascii: Option<String>,
    #[serde(default)]
    pub fingerprint: Option<String>,
    #[serde(default)]
    pub total_supply: Option<String>,
    #[serde(default)]
    pub token_registry_metadata: Option<TokenRegistryMetadata>,
}

/// Off-chain token registry metadata attached to an asset.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRegistryMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
}

#[derive(Serialize)]
struct AddressInfoRequest<'a> {
    _addresses: Vec<&'a str>,
}

#[derive(Serialize)]
struct AssetInfoRequest<'a> {
    _asset_list: Vec<[&'a str; 2]>,
}

/// Koios REST client. Cheap to clone; base URL injectable for tests.
#[derive(Clone)]
pub struct KoiosClient {
    http: reqwest::Client,
    base_url: String,
}

impl KoiosClient {
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

    /// Fetches the latest block information.
    pub async fn tip(&self) -> anyhow::Result<ChainTip> {
        let url = format!("{}/tip", self.base_url);
        debug!(url = %url, "Koios tip request");

        let tips: Vec<ChainTip> = self
            .http
            .get(&url)
            .send()
            .await
            .context("Koios tip request failed")?
            .error_for_status()
            .context("Koios tip returned error status")?
            .json()
            .await
            .context("Invalid Koios tip payload")?;

        match tips.into_iter().next() {
            Some(tip) => Ok(tip),
            None => bail!("Koios tip returned no rows"),
        }
    }

    /// Fetches summary information for the given epoch.
    pub async fn epoch_info(&self, epoch_no: u64) -> anyhow::Result<EpochInfo> {
        let url = format!("{}/epoch_info", self.base_url);
        debug!(url = %url, epoch_no, "Koios epoch info request");

        let epochs: Vec<EpochInfo> = self
            .http
            .get(&url)
            .query(&[("_epoch_no", epoch_no.to_string())])
            .send()
            .await
            .context("Koios epoch info request failed")?
            .error_for_status()
            .context("Koios epoch info returned error status")?
            .json()
            .await
            .context("Invalid Koios epoch info payload")?;

        match epochs.into_iter().next() {
            Some(info) => Ok(info),
            None => bail!("Koios returned no rows for epoch {}", epoch_no),
        }
    }

    /// Fetches balance and asset information for one address.
    pub async fn address_info(&self, address: &str) -> anyhow::Result<AddressInfo> {
        let url = format!("{}/address_info", self.base_url);
        debug!(url = %url, address = %address, "Koios address info request");

        let infos: Vec<AddressInfo> = self
            .http
            .post(&url)
            .json(&AddressInfoRequest {
                _addresses: vec![address],
            })
            .send()
            .await
            .context("Koios address info request failed")?
            .error_for_status()
            .context("Koios address info returned error status")?
            .json()
            .await
            .context("Invalid Koios address info payload")?;

        match infos.into_iter().next() {
            Some(info) => Ok(info),
            None => bail!("Koios returned no rows for address"),
        }
    }

    /// Fetches asset details for `(policy_id, asset_name_hex)` pairs.
    pub async fn asset_info(&self, assets: &[(String, String)]) -> anyhow::Result<Vec<AssetInfo>> {
        let url = format!("{}/asset_info", self.base_url);
        debug!(url = %url, asset_count = assets.len(), "Koios asset info request");

        let asset_list = assets
            .iter()
            .map(|(policy, name)| [policy.as_str(), name.as_str()])
            .collect();

        let infos = self
            .http
            .post(&url)
            .json(&AssetInfoRequest {
                _asset_list: asset_list,
            })
            .send()
            .await
            .context("Koios asset info request failed")?
            .error_for_status()
            .context("Koios asset info returned error status")?
            .json()
            .await
            .context("Invalid Koios asset info payload")?;

        Ok(infos)
    }
}

impl Default for KoiosClient {
    fn default() -> Self {
        Self::new()
    }
}
