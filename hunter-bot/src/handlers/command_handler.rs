//! Command dispatch: parses slash commands, calls the vendor clients, and
//! replies with rendered text. Every upstream failure becomes a plain error
//! reply, never a crash.

use std::sync::Arc;

use async_trait::async_trait;
use coingecko_client::{AdaPrice, CoinGeckoClient};
use dexhunter_client::{DexHunterClient, SwapEstimate, TrendingPair};
use koios_client::{AddressInfo, AssetInfo, ChainTip, EpochInfo, KoiosClient};
use tracing::{error, instrument};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::format::{
    format_ada, format_number, format_price, format_timestamp, group_thousands, shorten_token_id,
    split_message, TELEGRAM_MESSAGE_LIMIT,
};
use crate::handlers::commands::{Command, TrendingPeriod, WELCOME_TEXT};

/// Maps slash commands to vendor-client calls and rendered replies.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    dexhunter: Arc<DexHunterClient>,
    koios: Arc<KoiosClient>,
    coingecko: Arc<CoinGeckoClient>,
}

impl CommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        dexhunter: Arc<DexHunterClient>,
        koios: Arc<KoiosClient>,
        coingecko: Arc<CoinGeckoClient>,
    ) -> Self {
        Self {
            bot,
            dexhunter,
            koios,
            coingecko,
        }
    }

    async fn dispatch(&self, message: &Message, command: Command) -> Result<String> {
        let reply = match command {
            Command::Start => WELCOME_TEXT.to_string(),
            Command::Invalid(text) => text,
            Command::Trending(period) => {
                self.bot
                    .reply_to(message, "Fetching trending pairs... 🔍")
                    .await?;
                match self.dexhunter.trending(period.as_str()).await {
                    Ok(pairs) => render_trending(&pairs, period),
                    Err(e) => {
                        error!(error = %e, period = period.as_str(), "Trending lookup failed");
                        format!("Error fetching trending pairs: {e}")
                    }
                }
            }
            Command::Estimate {
                amount,
                token_in,
                token_out,
            } => {
                self.bot
                    .reply_to(message, "Calculating swap estimate... 🔄")
                    .await?;
                match self
                    .dexhunter
                    .estimate(amount, &token_in, &token_out, 5.0)
                    .await
                {
                    Ok(estimate) => render_estimate(amount, &estimate),
                    Err(e) => {
                        error!(error = %e, "Swap estimate failed");
                        format!("Error getting estimate: {e}")
                    }
                }
            }
            Command::Tip => {
                self.bot
                    .reply_to(message, "Fetching latest block information... 🔍")
                    .await?;
                match self.koios.tip().await {
                    Ok(tip) => render_tip(&tip),
                    Err(e) => {
                        error!(error = %e, "Chain tip lookup failed");
                        format!("Error: {e}")
                    }
                }
            }
            Command::AdaPrice(assets) => {
                self.bot
                    .reply_to(
                        message,
                        &format!(
                            "Fetching ADA price and asset information for {} assets... 💰",
                            assets.len()
                        ),
                    )
                    .await?;
                let result = async {
                    let price = self.coingecko.ada_price().await?;
                    let infos = self.koios.asset_info(&assets).await?;
                    anyhow::Ok((price, infos))
                }
                .await;
                match result {
                    Ok((price, infos)) => render_price(&price, &infos),
                    Err(e) => {
                        error!(error = %e, "ADA price lookup failed");
                        format!("Error: {e}")
                    }
                }
            }
            Command::Epoch(epoch_no) => {
                self.bot
                    .reply_to(message, "Fetching epoch information... ⏳")
                    .await?;
                let result = async {
                    let epoch_no = match epoch_no {
                        Some(n) => n,
                        // No argument: current epoch from the chain tip.
                        None => self.koios.tip().await?.epoch_no,
                    };
                    self.koios.epoch_info(epoch_no).await
                }
                .await;
                match result {
                    Ok(info) => render_epoch(&info),
                    Err(e) => {
                        error!(error = %e, "Epoch lookup failed");
                        format!("Error: {e}")
                    }
                }
            }
            Command::Address(address) => {
                self.bot
                    .reply_to(message, "Fetching address information... 🔍")
                    .await?;
                match self.koios.address_info(&address).await {
                    Ok(info) => render_address(&info),
                    Err(e) => {
                        error!(error = %e, "Address lookup failed");
                        format!("Error: {e}")
                    }
                }
            }
        };
        Ok(reply)
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = Command::parse(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };

        let reply = self.dispatch(message, command).await?;
        for chunk in split_message(&reply, TELEGRAM_MESSAGE_LIMIT) {
            self.bot.reply_to(message, &chunk).await?;
        }
        Ok(HandlerResponse::Reply(reply))
    }
}

fn render_trending(pairs: &[TrendingPair], period: TrendingPeriod) -> String {
    let mut text = format!("🔥 Trending Pairs ({}):\n\n", period.as_str());

    for pair in pairs.iter().take(10) {
        text.push_str(&format!(
            "📊 Token: {}\n\
             💰 Current Price: {}\n\
             📈 Volume: ${}\n\
             📊 Volume Change: {}%\n\
             💹 Price Change: {}%\n\
             🔄 Trades: {} buys, {} sales\n\n\
             ----\n\n",
            shorten_token_id(&pair.token_id),
            format_price(pair.current_period_closing_price),
            format_number(pair.current_period_volume, 2),
            format_number(pair.volume_change_percentage, 2),
            format_number(pair.price_change_percentage, 2),
            pair.amount_buys,
            pair.amount_sales,
        ));
    }

    if pairs.is_empty() {
        text.push_str("No trending pairs found for this period.");
    }
    text
}

fn render_estimate(amount_in: f64, estimate: &SwapEstimate) -> String {
    let amount_out = estimate
        .amount_out
        .map(|v| format_number(v, 2))
        .unwrap_or_else(|| "N/A".to_string());
    let price_impact = estimate
        .price_impact
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "💱 Swap Estimate:\n\n\
         Input: {} {}\n\
         Output: {} {}\n\
         Price Impact: {}%\n\
         Route: {}",
        amount_in,
        estimate.token_in_symbol.as_deref().unwrap_or("N/A"),
        amount_out,
        estimate.token_out_symbol.as_deref().unwrap_or("N/A"),
        price_impact,
        estimate.route_summary.as_deref().unwrap_or("N/A"),
    )
}

fn render_tip(tip: &ChainTip) -> String {
    format!(
        "🎯 Latest Block Information:\n\n\
         Block: {}\n\
         Hash: {}\n\
         Slot: {}\n\
         Epoch: {}",
        tip.block_no, tip.hash, tip.abs_slot, tip.epoch_no
    )
}

fn render_price(price: &AdaPrice, assets: &[AssetInfo]) -> String {
    let mut text = String::from("💎 Cardano (ADA) Information:\n\n");

    text.push_str(&format!("💰 Price: ${}\n", price.usd));
    text.push_str(&format!(
        "📊 24h Volume: ${}\n",
        price
            .usd_24h_vol
            .map(|v| format_number(v, 2))
            .unwrap_or_else(|| "N/A".to_string())
    ));
    text.push_str(&format!(
        "💹 Market Cap: ${}\n\n",
        price
            .usd_market_cap
            .map(|v| format_number(v, 2))
            .unwrap_or_else(|| "N/A".to_string())
    ));

    if !assets.is_empty() {
        text.push_str("🏦 Asset Information:\n");
        for asset in assets {
            text.push_str(&format!(
                "\nPolicy ID: {}\n\
                 Asset Name: {}\n\
                 Fingerprint: {}\n\
                 Total Supply: {}\n",
                asset.policy_id,
                asset.asset_name_ascii.as_deref().unwrap_or("N/A"),
                asset.fingerprint.as_deref().unwrap_or("N/A"),
                asset.total_supply.as_deref().unwrap_or("N/A"),
            ));
            if let Some(meta) = &asset.token_registry_metadata {
                text.push_str("Metadata:\n");
                if let Some(name) = &meta.name {
                    text.push_str(&format!("- Name: {name}\n"));
                }
                if let Some(description) = &meta.description {
                    text.push_str(&format!("- Description: {description}\n"));
                }
            }
            text.push_str("----\n");
        }
    }
    text
}

fn render_epoch(info: &EpochInfo) -> String {
    format!(
        "📊 Epoch Information\n\n\
         🔢 Epoch Number: {}\n\n\
         ⏰ Time Details\n\
         ▪️ Start: {}\n\
         ▪️ End: {}\n\
         ▪️ First Block: {}\n\
         ▪️ Last Block: {}\n\n\
         💰 Stake & Rewards\n\
         ▪️ Active Stake: {} ADA\n\
         ▪️ Total Rewards: {} ADA\n\
         ▪️ Avg Block Reward: {} ADA\n\n\
         📦 Blocks & Transactions\n\
         ▪️ Block Count: {}\n\
         ▪️ Transaction Count: {}\n\
         ▪️ Total Fees: {} ADA\n\
         ▪️ Total Output: {} ADA",
        info.epoch_no,
        format_timestamp(info.start_time),
        format_timestamp(info.end_time),
        format_timestamp(info.first_block_time),
        format_timestamp(info.last_block_time),
        format_ada(info.active_stake.as_deref().unwrap_or("")),
        format_ada(info.total_rewards.as_deref().unwrap_or("")),
        format_ada(info.avg_blk_reward.as_deref().unwrap_or("")),
        group_thousands(info.blk_count),
        group_thousands(info.tx_count),
        format_ada(&info.fees),
        format_ada(&info.out_sum),
    )
}

fn render_address(info: &AddressInfo) -> String {
    let mut text = format!(
        "📍 Address Information:\n\n\
         Balance: {} ADA\n\
         Stake Address: {}\n\
         Script Address: {}\n",
        format_ada(&info.balance),
        info.stake_address.as_deref().unwrap_or("N/A"),
        if info.script_address { "Yes" } else { "No" },
    );

    if !info.asset_list.is_empty() {
        text.push_str("\n🎭 Tokens:\n");
        for asset in info.asset_list.iter().take(5) {
            text.push_str(&format!(
                "- {}: {}\n",
                asset
                    .asset_name
                    .as_deref()
                    .or(asset.fingerprint.as_deref())
                    .unwrap_or("unknown"),
                asset.quantity,
            ));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_trending_lists_top_pairs() {
        let pairs = vec![TrendingPair {
            token_id: "750900e4999ebe0d58f19b634768ba25e525aaf12403bfe8fe130501424f4f4b"
                .to_string(),
            current_period_volume: 123456.78,
            volume_change_percentage: 12.5,
            price_change_percentage: -3.2,
            current_period_closing_price: 0.0042,
            amount_buys: 120,
            amount_sales: 80,
        }];
        let text = render_trending(&pairs, TrendingPeriod::FiveMinutes);

        assert!(text.contains("Trending Pairs (5m)"));
        assert!(text.contains("750900e499...4f4b"));
        assert!(text.contains("0.00420000"));
        assert!(text.contains("$123,456.78"));
        assert!(text.contains("120 buys, 80 sales"));
    }

    #[test]
    fn test_render_trending_empty() {
        let text = render_trending(&[], TrendingPeriod::OneHour);
        assert!(text.contains("No trending pairs found"));
    }

    #[test]
    fn test_render_estimate_handles_missing_fields() {
        let estimate = SwapEstimate {
            token_in_symbol: Some("ADA".to_string()),
            token_out_symbol: None,
            amount_out: Some(2450.3),
            price_impact: None,
            route_summary: None,
        };
        let text = render_estimate(100.0, &estimate);

        assert!(text.contains("Input: 100 ADA"));
        assert!(text.contains("Output: 2,450.30 N/A"));
        assert!(text.contains("Price Impact: N/A%"));
        assert!(text.contains("Route: N/A"));
    }

    #[test]
    fn test_render_estimate_includes_route_summary() {
        let estimate = SwapEstimate {
            token_in_symbol: Some("ADA".to_string()),
            token_out_symbol: Some("BOOK".to_string()),
            amount_out: Some(2450.3),
            price_impact: Some(0.8),
            route_summary: Some("Minswap 60% > SundaeSwap 40%".to_string()),
        };
        let text = render_estimate(100.0, &estimate);

        assert!(text.contains("Price Impact: 0.80%"));
        assert!(text.contains("Route: Minswap 60% > SundaeSwap 40%"));
    }

    #[test]
    fn test_render_tip() {
        let tip = ChainTip {
            hash: "abc123".to_string(),
            epoch_no: 520,
            abs_slot: 140000000,
            epoch_slot: 120000,
            block_no: 10500000,
            block_time: 1735689600,
        };
        let text = render_tip(&tip);

        assert!(text.contains("Block: 10500000"));
        assert!(text.contains("Hash: abc123"));
        assert!(text.contains("Epoch: 520"));
    }

    #[test]
    fn test_render_address_limits_tokens_to_five() {
        let info = AddressInfo {
            address: "addr1qxyz".to_string(),
            balance: "12345678901".to_string(),
            stake_address: Some("stake1uxyz".to_string()),
            script_address: false,
            asset_list: (0..7)
                .map(|i| koios_client::AddressAsset {
                    policy_id: "p".to_string(),
                    asset_name: Some(format!("token{i}")),
                    fingerprint: None,
                    quantity: "1".to_string(),
                })
                .collect(),
        };
        let text = render_address(&info);

        assert!(text.contains("Balance: 12,345.68 ADA"));
        assert!(text.contains("token4"));
        assert!(!text.contains("token5"));
    }
}
