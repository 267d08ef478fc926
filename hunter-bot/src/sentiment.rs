//! Market sentiment derived from global buy/sell activity: the 0–100 value,
//! its classification bands, and the rendered channel notification.

use chrono::{DateTime, Utc};
use dexhunter_client::GlobalStats;

use crate::format::{format_volume, group_thousands};

/// Width of the rendered progress bar in glyphs.
const PROGRESS_BAR_WIDTH: usize = 20;

/// Derives the sentiment value in [0, 100] from a stats record: the buy
/// share of total volume, scaled to 100 and rounded half-up (`f64::round`).
/// The rounded integer is also the worker's dedup key, so moves below one
/// percentage point never trigger a notification. Zero total volume is
/// neutral (50).
pub fn sentiment_value(stats: &GlobalStats) -> u8 {
    let total = stats.global_buy_volume + stats.global_sell_volume;
    if total <= 0.0 {
        return 50;
    }
    let value = (stats.global_buy_volume / total * 100.0).round();
    value.clamp(0.0, 100.0) as u8
}

/// Sentiment band for a value. Bands are half-open: [0,25) Extreme Fear,
/// [25,40) Fear, [40,60) Neutral, [60,75) Greed, [75,100] Extreme Greed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
    ExtremeGreed,
}

impl Classification {
    /// Total mapping from sentiment value to band.
    pub fn from_value(value: u8) -> Self {
        match value {
            0..=24 => Classification::ExtremeFear,
            25..=39 => Classification::Fear,
            40..=59 => Classification::Neutral,
            60..=74 => Classification::Greed,
            _ => Classification::ExtremeGreed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::ExtremeFear => "Extreme Fear",
            Classification::Fear => "Fear",
            Classification::Neutral => "Neutral",
            Classification::Greed => "Greed",
            Classification::ExtremeGreed => "Extreme Greed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Classification::ExtremeFear => "😱",
            Classification::Fear => "😨",
            Classification::Neutral => "😐",
            Classification::Greed => "🤑",
            Classification::ExtremeGreed => "🤯",
        }
    }

    /// Color glyph used next to volume lines.
    pub fn color(&self) -> &'static str {
        match self {
            Classification::ExtremeFear => "🟦",
            Classification::Fear => "🟨",
            Classification::Neutral => "⬜️",
            Classification::Greed => "🟧",
            Classification::ExtremeGreed => "🟥",
        }
    }
}

/// Renders the fixed-width two-glyph progress bar for a value.
pub fn progress_bar(value: u8) -> String {
    let filled = (value as usize * PROGRESS_BAR_WIDTH) / 100;
    let empty = PROGRESS_BAR_WIDTH - filled;
    format!("{}{}", "█".repeat(filled), "▒".repeat(empty))
}

/// Renders the HTML sentiment notification pushed to the channel.
pub fn render_update(stats: &GlobalStats, at: DateTime<Utc>) -> String {
    let value = sentiment_value(stats);
    let classification = Classification::from_value(value);
    let emoji = classification.emoji();
    let color = classification.color();

    let total_volume = stats.global_buy_volume + stats.global_sell_volume;
    let bar = progress_bar(value);

    format!(
        "━━━━━━━━━━━━━━━━━━━━━\n\
         🎯 <b>MARKET SENTIMENT INDEX</b> {emoji}\n\
         ━━━━━━━━━━━━━━━━━━━━━\n\n\
         📊 <b>Current Status</b>\n\
         • Sentiment: {label} {emoji}\n\
         • Value: {value}%\n\
         • Indicator: <b>[</b>{bar}<b>]</b> {value}%\n\n\
         💹 <b>Volume Analysis</b>\n\
         • Buy Volume:  {color} {buy_vol}\n\
         • Sell Volume: {color} {sell_vol}\n\
         • Total Volume: {total_vol}\n\n\
         📈 <b>Trade Statistics</b>\n\
         • Buy Orders:  {buys}\n\
         • Sell Orders: {sells}\n\
         • Total Trades: {trades}\n\n\
         ━━━━━━━━━━━━━━━━━━━━━\n\
         🕒 <i>Last Updated: {updated}</i>\n\
         ━━━━━━━━━━━━━━━━━━━━━\n\
         🔥 <b>Want more market insights?</b>\n\
         📢 Join @cardano_hunter now!\n\
         ━━━━━━━━━━━━━━━━━━━━━",
        label = classification.label(),
        buy_vol = format_volume(stats.global_buy_volume),
        sell_vol = format_volume(stats.global_sell_volume),
        total_vol = format_volume(total_volume),
        buys = group_thousands(stats.global_buy_count),
        sells = group_thousands(stats.global_sell_count),
        trades = group_thousands(stats.count),
        updated = at.format("%Y-%m-%d %H:%M:%S"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(buy: f64, sell: f64) -> GlobalStats {
        GlobalStats {
            global_buy_volume: buy,
            global_sell_volume: sell,
            global_buy_count: 0,
            global_sell_count: 0,
            count: 0,
        }
    }

    #[test]
    fn test_zero_volume_is_neutral() {
        assert_eq!(sentiment_value(&stats(0.0, 0.0)), 50);
    }

    #[test]
    fn test_value_is_rounded_buy_share() {
        assert_eq!(sentiment_value(&stats(70.0, 30.0)), 70);
        assert_eq!(sentiment_value(&stats(71.0, 29.0)), 71);
        assert_eq!(sentiment_value(&stats(40.0, 60.0)), 40);
        // 2/3 → 66.66…% rounds to 67
        assert_eq!(sentiment_value(&stats(2.0, 1.0)), 67);
        assert_eq!(sentiment_value(&stats(100.0, 0.0)), 100);
        assert_eq!(sentiment_value(&stats(0.0, 100.0)), 0);
    }

    #[test]
    fn test_classification_bands() {
        assert_eq!(Classification::from_value(10), Classification::ExtremeFear);
        assert_eq!(Classification::from_value(30), Classification::Fear);
        assert_eq!(Classification::from_value(50), Classification::Neutral);
        assert_eq!(Classification::from_value(65), Classification::Greed);
        assert_eq!(Classification::from_value(90), Classification::ExtremeGreed);
    }

    #[test]
    fn test_classification_boundaries_are_half_open() {
        assert_eq!(Classification::from_value(24), Classification::ExtremeFear);
        assert_eq!(Classification::from_value(25), Classification::Fear);
        assert_eq!(Classification::from_value(40), Classification::Neutral);
        assert_eq!(Classification::from_value(60), Classification::Greed);
        assert_eq!(Classification::from_value(75), Classification::ExtremeGreed);
        assert_eq!(Classification::from_value(100), Classification::ExtremeGreed);
    }

    #[test]
    fn test_progress_bar_width_and_fill() {
        let bar = progress_bar(70);
        assert_eq!(bar.chars().count(), 20);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 14);

        assert_eq!(progress_bar(0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(progress_bar(100).chars().filter(|c| *c == '▒').count(), 0);
    }

    #[test]
    fn test_render_update_content_contract() {
        let stats = GlobalStats {
            global_buy_volume: 2_500_000_000.0,
            global_sell_volume: 750_000.0,
            global_buy_count: 4021,
            global_sell_count: 1980,
            count: 6001,
        };
        let at = chrono::DateTime::from_timestamp(1701345600, 0).unwrap();
        let text = render_update(&stats, at);

        assert!(text.contains("2.50B"));
        assert!(text.contains("0.75M"));
        assert!(text.contains("4,021"));
        assert!(text.contains("1,980"));
        assert!(text.contains("6,001"));
        assert!(text.contains("Extreme Greed"));
        assert!(text.contains("Value: 100%"));
        assert!(text.contains("2023-11-30 12:00:00"));
    }
}
