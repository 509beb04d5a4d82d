//! # Intent Parsing
//!
//! Turns raw message text into an [`Intent`].
//! Greeting always wins over a lookup: "hello executives bitcoin" is a greeting.

use crate::domain::types::Intent;

const GREETING_TRIGGER: &str = "hello";
const EXECUTIVES_PREFIX: &str = "executives";

impl Intent {
    pub fn parse(message: &str) -> Self {
        let text = message.trim();
        let lower = text.to_lowercase();

        if lower.contains(GREETING_TRIGGER) {
            return Intent::Greeting;
        }

        if lower.starts_with(EXECUTIVES_PREFIX) {
            return match coin_argument(text) {
                Some(coin) => Intent::Executives { coin },
                None => Intent::ExecutivesUsage,
            };
        }

        Intent::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Executives { .. } => "executives",
            Intent::ExecutivesUsage => "executives_usage",
            Intent::Unknown => "unknown",
        }
    }
}

/// Everything after the first whitespace run, trimmed and lowercased.
fn coin_argument(text: &str) -> Option<String> {
    let (_, rest) = text.split_once(char::is_whitespace)?;
    let coin = rest.trim();
    if coin.is_empty() {
        None
    } else {
        Some(coin.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executives(coin: &str) -> Intent {
        Intent::Executives {
            coin: coin.to_string(),
        }
    }

    #[test]
    fn test_greeting_is_substring_match() {
        assert_eq!(Intent::parse("hello"), Intent::Greeting);
        assert_eq!(Intent::parse("Hello there"), Intent::Greeting);
        assert_eq!(Intent::parse("say HELLO there"), Intent::Greeting);
        assert_eq!(Intent::parse("othello"), Intent::Greeting);
    }

    #[test]
    fn test_greeting_wins_over_executives() {
        assert_eq!(Intent::parse("hello executives bitcoin"), Intent::Greeting);
        assert_eq!(Intent::parse("executives hello"), Intent::Greeting);
    }

    #[test]
    fn test_executives_with_coin() {
        assert_eq!(Intent::parse("executives bitcoin"), executives("bitcoin"));
        assert_eq!(Intent::parse("  Executives   Ethereum  "), executives("ethereum"));
        assert_eq!(Intent::parse("EXECUTIVES\tsolana"), executives("solana"));
        assert_eq!(Intent::parse("executives usd coin"), executives("usd coin"));
    }

    #[test]
    fn test_executives_prefix_only_needs_to_start_the_text() {
        // The first token is dropped whatever it is, as long as the text starts with the prefix.
        assert_eq!(Intent::parse("executivesfoo bar"), executives("bar"));
    }

    #[test]
    fn test_executives_without_coin() {
        assert_eq!(Intent::parse("executives"), Intent::ExecutivesUsage);
        assert_eq!(Intent::parse("executives   "), Intent::ExecutivesUsage);
        assert_eq!(Intent::parse("executivesbitcoin"), Intent::ExecutivesUsage);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(Intent::parse("foo bar"), Intent::Unknown);
        assert_eq!(Intent::parse(""), Intent::Unknown);
        assert_eq!(Intent::parse("show executives bitcoin"), Intent::Unknown);
    }
}
