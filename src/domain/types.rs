//! # Domain Types
//!
//! Common data structures used across the application logic:
//! the parsed intent, the remote metadata model and the record we render.

use serde::Deserialize;

/// What the user asked for, as decided by `Intent::parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    /// Lookup with a trimmed, lowercased, non-empty coin id.
    Executives { coin: String },
    /// Lookup requested but no coin id given.
    ExecutivesUsage,
    Unknown,
}

/// Coin metadata as returned by the remote service.
///
/// Every field is optional. Defaults applied when building a [`CoinRecord`]:
/// - `name`: the title-cased coin id
/// - `symbol`: empty string
/// - `links`: no social links
/// - `team`: no team entries
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CoinMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub links: Option<CoinLinks>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team: Vec<TeamEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CoinLinks {
    #[serde(default, deserialize_with = "null_as_default")]
    pub homepage: Vec<String>,
    #[serde(default)]
    pub twitter_screen_name: Option<String>,
    #[serde(default)]
    pub facebook_username: Option<String>,
    #[serde(default)]
    pub subreddit_url: Option<String>,
    #[serde(default)]
    pub telegram_channel_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TeamEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A team member with both name and position present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    pub position: String,
}

/// The subset of coin metadata we display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinRecord {
    pub name: String,
    pub symbol: String,
    /// (label, value) pairs in display order.
    pub socials: Vec<(String, String)>,
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Timeout,
    Connect,
    Status(u16),
    Decode,
    Request,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::Connect => "connect",
            FetchErrorKind::Status(_) => "status",
            FetchErrorKind::Decode => "decode",
            FetchErrorKind::Request => "request",
        }
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchErrorKind::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Failure talking to the metadata service.
#[derive(Debug, Clone)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}
