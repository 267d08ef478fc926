//! Shared pure formatting helpers for rendered replies: volume abbreviation,
//! thousands grouping, lovelace conversion, timestamps, token-id shortening,
//! and Telegram-limit message splitting.

use chrono::DateTime;

/// Telegram hard limit for a single message.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Abbreviates a volume: `>= 1e9` as billions, otherwise as millions, both
/// with two decimals (2_500_000_000 → "2.50B", 750_000 → "0.75M").
pub fn format_volume(volume: f64) -> String {
    if volume >= 1_000_000_000.0 {
        format!("{:.2}B", volume / 1_000_000_000.0)
    } else {
        format!("{:.2}M", volume / 1_000_000.0)
    }
}

/// Groups an integer with thousands separators (1234567 → "1,234,567").
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a non-negative float with thousands separators and the given
/// number of decimals (1234567.891, 2 → "1,234,567.89").
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.max(0.0));
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => format!(
            "{}.{}",
            group_thousands(int_part.parse().unwrap_or(0)),
            frac_part
        ),
        None => group_thousands(fixed.parse().unwrap_or(0)),
    }
}

/// Converts a lovelace amount (text numeric, 1 ADA = 1_000_000 lovelace) to
/// an ADA string with thousands separators and two decimals. Unparseable
/// input renders as "0.00".
pub fn format_ada(lovelace: &str) -> String {
    match lovelace.parse::<f64>() {
        Ok(value) => format_number(value / 1_000_000.0, 2),
        Err(_) => "0.00".to_string(),
    }
}

/// Renders a unix timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "Invalid timestamp".to_string(),
    }
}

/// Renders a token price: 8 decimals below 0.01, else 4.
pub fn format_price(price: f64) -> String {
    if price < 0.01 {
        format!("{:.8}", price)
    } else {
        format!("{:.4}", price)
    }
}

/// Shortens a long token id to `first10...last4`; short ids pass through.
pub fn shorten_token_id(token_id: &str) -> String {
    if token_id.len() > 14 {
        format!(
            "{}...{}",
            &token_id[..10],
            &token_id[token_id.len() - 4..]
        )
    } else {
        token_id.to_string()
    }
}

/// Splits text into chunks of at most `limit` characters (char-boundary
/// safe) so long replies fit the Telegram message limit.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    if text.len() <= limit {
        return vec![text.to_string()];
    }
    let mut chunks = Vec::new();
    let mut current = String::with_capacity(limit);
    let mut count = 0;
    for ch in text.chars() {
        if count == limit {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
