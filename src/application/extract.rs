//! # Record Extraction
//!
//! Builds the displayable [`CoinRecord`] out of the raw [`CoinMetadata`],
//! applying the per-field defaults.

use crate::application::utils::{field_label, title_case};
use crate::domain::types::{CoinLinks, CoinMetadata, CoinRecord, TeamMember};

const HOMEPAGE_LABEL: &str = "Homepage";

impl CoinRecord {
    pub fn from_metadata(coin_id: &str, meta: &CoinMetadata) -> Self {
        let name = meta
            .name
            .clone()
            .unwrap_or_else(|| title_case(coin_id));
        let symbol = meta.symbol.as_deref().unwrap_or_default().to_uppercase();

        let socials = meta.links.as_ref().map(collect_socials).unwrap_or_default();

        let team = meta
            .team
            .iter()
            .filter_map(|entry| match (non_empty(&entry.name), non_empty(&entry.position)) {
                (Some(name), Some(position)) => Some(TeamMember {
                    name: name.to_string(),
                    position: position.to_string(),
                }),
                _ => None,
            })
            .collect();

        Self {
            name,
            symbol,
            socials,
            team,
        }
    }
}

fn collect_socials(links: &CoinLinks) -> Vec<(String, String)> {
    let mut out = Vec::new();

    if let Some(homepage) = links.homepage.first()
        && !homepage.is_empty()
    {
        out.push((HOMEPAGE_LABEL.to_string(), homepage.clone()));
    }

    let handles = [
        ("twitter_screen_name", &links.twitter_screen_name),
        ("facebook_username", &links.facebook_username),
        ("subreddit_url", &links.subreddit_url),
        ("telegram_channel_identifier", &links.telegram_channel_identifier),
    ];
    for (field, value) in handles {
        if let Some(value) = non_empty(value) {
            out.push((field_label(field), value.to_string()));
        }
    }

    out
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
