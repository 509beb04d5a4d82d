//! # CoinGecko Adapter
//!
//! Implements the `CoinMetadataProvider` trait against the public CoinGecko REST API:
//! `GET <base>/coins/<id>?localization=false`.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::domain::config::CoingeckoConfig;
use crate::domain::traits::CoinMetadataProvider;
use crate::domain::types::{CoinMetadata, FetchError, FetchErrorKind};
use crate::strings::logs;

pub struct CoingeckoClient {
    http: Client,
    base_url: Url,
}

impl CoingeckoClient {
    /// Build a client (and its HTTP client) from configuration.
    pub fn new(config: &CoingeckoConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http = builder.build()?;
        Self::with_http_client(http, &config.base_url)
    }

    /// Use a prebuilt HTTP client; its timeout applies to every lookup.
    pub fn with_http_client(http: Client, base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid CoinGecko base URL '{}': {}", base_url, e))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Invalid CoinGecko base URL '{}'", base_url);
        }
        Ok(Self { http, base_url })
    }

    /// The coin id becomes a single, percent-encoded path segment.
    fn coin_url(&self, coin_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("coins").push(coin_id);
        }
        url.query_pairs_mut().append_pair("localization", "false");
        url
    }
}

#[async_trait]
impl CoinMetadataProvider for CoingeckoClient {
    async fn coin(&self, coin_id: &str) -> Result<CoinMetadata, FetchError> {
        let url = self.coin_url(coin_id);
        tracing::debug!("{}", logs::fetching_coin(url.as_str()));

        let response = self.http.get(url).send().await?.error_for_status()?;
        tracing::debug!("{}", logs::coin_fetched(coin_id, response.status().as_u16()));

        Ok(response.json::<CoinMetadata>().await?)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            FetchErrorKind::Timeout
        } else if let Some(status) = e.status() {
            FetchErrorKind::Status(status.as_u16())
        } else if e.is_connect() {
            FetchErrorKind::Connect
        } else if e.is_decode() {
            FetchErrorKind::Decode
        } else {
            FetchErrorKind::Request
        };
        FetchError::new(kind, e.to_string())
    }
}
