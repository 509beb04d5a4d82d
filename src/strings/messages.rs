//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Every answer the agent prints comes from here.

pub const GREETING: &str = "Hello, welcome to NEAR AI!";
pub const UNKNOWN_COMMAND: &str = "I'm sorry, I didn't understand your message.";
pub const EXECUTIVES_USAGE: &str = "Please provide a coin name. Usage: 'executives <coin>'";
pub const INPUT_PROMPT: &str = "Enter a message for the agent: ";

pub const SOCIALS_HEADER: &str = "Socials:";
pub const NO_SOCIALS: &str = "No social links available.";
pub const TEAM_HEADER: &str = "Executives/Team:";
pub const NO_TEAM: &str = "No team information available on Coingecko API";

pub fn coin_header(name: &str, symbol: &str) -> String {
    format!("Coin: {name} ({symbol})")
}

pub fn fetch_failed(err: &str) -> String {
    format!("Error fetching coin data: {err}")
}
