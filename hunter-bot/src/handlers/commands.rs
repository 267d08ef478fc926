//! Command grammar: typed parsing of `/command args` text.

/// Reply for `/start` and the fallback hint.
pub const WELCOME_TEXT: &str = "Welcome to DexHunter & Cardano Bot! 🚀\n\n\
DexHunter Commands:\n\
/trending - Get trending pairs (default 5m)\n\
/trending_1h - Get trending pairs (1h)\n\
/trending_24h - Get trending pairs (24h)\n\
/estimate <amount> <token_in> <token_out> - Get swap estimate\n\n\
Cardano Commands:\n\
/tip - Get latest block information\n\
/adaprice <policy_id> <asset_name> [...] - Get ADA price and asset info\n\
/epoch [number] - Get epoch information\n\
/address <address> - Get address information";

const ESTIMATE_USAGE: &str = "❌ Invalid format. Use: /estimate <amount> <token_in> <token_out>";
const ADDRESS_USAGE: &str = "❌ Invalid format. Use: /address <cardano_address>";
const EPOCH_USAGE: &str = "❌ Invalid format. Use: /epoch [epoch_number]";
const UNKNOWN_COMMAND: &str = "❌ Unknown command. Use /start to see available commands.";

const ADAPRICE_USAGE: &str = "❌ Invalid format. Use:\n\
/adaprice <policy_id> <asset_name> [policy_id2 asset_name2...]\n\n\
Example:\n\
/adaprice 750900e4999ebe0d58f19b634768ba25e525aaf12403bfe8fe130501 424f4f4b\n\n\
Note: You can query multiple assets at once by providing policy_id and asset_name pairs";

/// Trending window accepted by the DexHunter API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingPeriod {
    FiveMinutes,
    OneHour,
    TwentyFourHours,
}

impl TrendingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingPeriod::FiveMinutes => "5m",
            TrendingPeriod::OneHour => "1h",
            TrendingPeriod::TwentyFourHours => "24h",
        }
    }
}

/// One parsed bot command. `Invalid` carries the reply text for malformed or
/// unrecognized slash commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Trending(TrendingPeriod),
    Estimate {
        amount: f64,
        token_in: String,
        token_out: String,
    },
    Tip,
    AdaPrice(Vec<(String, String)>),
    Epoch(Option<u64>),
    Address(String),
    Invalid(String),
}

impl Command {
    /// Parses message text into a command. Returns `None` for non-command
    /// text (the chain falls through to the next handler). A `@botname`
    /// suffix on the command word is tolerated (group chats).
    pub fn parse(text: &str) -> Option<Command> {
        let trimmed = text.trim();
        if !trimmed.starts_with('/') {
            return None;
        }

        let mut parts = trimmed.split_whitespace();
        let word = parts.next()?;
        let name = word.split('@').next().unwrap_or(word);
        let args: Vec<&str> = parts.collect();

        let command = match name {
            "/start" => Command::Start,
            "/trending" => Command::Trending(TrendingPeriod::FiveMinutes),
            "/trending_1h" => Command::Trending(TrendingPeriod::OneHour),
            "/trending_24h" => Command::Trending(TrendingPeriod::TwentyFourHours),
            "/estimate" => match args.as_slice() {
                [amount, token_in, token_out] => match amount.parse::<f64>() {
                    Ok(amount) => Command::Estimate {
                        amount,
                        token_in: token_in.to_string(),
                        token_out: token_out.to_string(),
                    },
                    Err(_) => Command::Invalid(ESTIMATE_USAGE.to_string()),
                },
                _ => Command::Invalid(ESTIMATE_USAGE.to_string()),
            },
            "/tip" => Command::Tip,
            "/adaprice" => {
                if args.is_empty() {
                    Command::Invalid(ADAPRICE_USAGE.to_string())
                } else {
                    let assets: Vec<(String, String)> = args
                        .chunks_exact(2)
                        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
                        .collect();
                    if assets.is_empty() {
                        Command::Invalid("❌ No valid asset pairs provided".to_string())
                    } else {
                        Command::AdaPrice(assets)
                    }
                }
            }
            "/epoch" => match args.as_slice() {
                [] => Command::Epoch(None),
                [number] => match number.parse::<u64>() {
                    Ok(n) => Command::Epoch(Some(n)),
                    Err(_) => Command::Invalid(EPOCH_USAGE.to_string()),
                },
                _ => Command::Invalid(EPOCH_USAGE.to_string()),
            },
            "/address" => match args.as_slice() {
                [address] => Command::Address(address.to_string()),
                _ => Command::Invalid(ADDRESS_USAGE.to_string()),
            },
            _ => Command::Invalid(UNKNOWN_COMMAND.to_string()),
        };

        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_command_text_is_none() {
        assert_eq!(Command::parse("hello there"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_trending_periods() {
        assert_eq!(
            Command::parse("/trending"),
            Some(Command::Trending(TrendingPeriod::FiveMinutes))
        );
        assert_eq!(
            Command::parse("/trending_1h"),
            Some(Command::Trending(TrendingPeriod::OneHour))
        );
        assert_eq!(
            Command::parse("/trending_24h"),
            Some(Command::Trending(TrendingPeriod::TwentyFourHours))
        );
        assert_eq!(TrendingPeriod::TwentyFourHours.as_str(), "24h");
    }

    #[test]
    fn test_botname_suffix_is_stripped() {
        assert_eq!(Command::parse("/tip@hunter_bot"), Some(Command::Tip));
    }

    #[test]
    fn test_estimate_args() {
        assert_eq!(
            Command::parse("/estimate 100 ADA BOOK"),
            Some(Command::Estimate {
                amount: 100.0,
                token_in: "ADA".to_string(),
                token_out: "BOOK".to_string(),
            })
        );
        assert!(matches!(
            Command::parse("/estimate 100"),
            Some(Command::Invalid(_))
        ));
        assert!(matches!(
            Command::parse("/estimate lots ADA BOOK"),
            Some(Command::Invalid(_))
        ));
    }

    #[test]
    fn test_adaprice_pairs() {
        assert_eq!(
            Command::parse("/adaprice policy1 name1 policy2 name2"),
            Some(Command::AdaPrice(vec![
                ("policy1".to_string(), "name1".to_string()),
                ("policy2".to_string(), "name2".to_string()),
            ]))
        );
        // Trailing unpaired policy id is dropped.
        assert_eq!(
            Command::parse("/adaprice policy1 name1 dangling"),
            Some(Command::AdaPrice(vec![(
                "policy1".to_string(),
                "name1".to_string()
            )]))
        );
        assert!(matches!(
            Command::parse("/adaprice"),
            Some(Command::Invalid(_))
        ));
    }

    #[test]
    fn test_epoch_optional_number() {
        assert_eq!(Command::parse("/epoch"), Some(Command::Epoch(None)));
        assert_eq!(Command::parse("/epoch 520"), Some(Command::Epoch(Some(520))));
        assert!(matches!(
            Command::parse("/epoch soon"),
            Some(Command::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_command_is_invalid() {
        assert!(matches!(
            Command::parse("/definitely_not_a_command"),
            Some(Command::Invalid(_))
        ));
    }
}
