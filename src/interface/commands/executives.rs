//! # Executives Command
//!
//! Handles `executives <coin>`.
//! Fetches coin metadata once and renders socials and team; failures become the answer text.

use crate::application::formatter::CoinFormatter;
use crate::domain::traits::CoinMetadataProvider;
use crate::domain::types::CoinRecord;
use crate::strings::{logs, messages};

pub async fn handle_executives(coins: &dyn CoinMetadataProvider, coin: &str) -> String {
    match coins.coin(coin).await {
        Ok(meta) => CoinFormatter::format(&CoinRecord::from_metadata(coin, &meta)),
        Err(e) => {
            tracing::warn!(
                kind = e.kind.as_str(),
                status = e.kind.status(),
                "{}",
                logs::fetch_failed(coin, &e.to_string())
            );
            messages::fetch_failed(&e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::coingecko::CoingeckoClient;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, timeout: Duration) -> CoingeckoClient {
        let http = reqwest::Client::builder().timeout(timeout).build().unwrap();
        CoingeckoClient::with_http_client(http, &server.uri()).unwrap()
    }

    #[tokio::test]
    async fn test_renders_remote_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/bitcoin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Bitcoin",
                "symbol": "btc",
                "links": {"homepage": ["https://bitcoin.org"], "twitter_screen_name": "bitcoin"},
                "team": [{"name": "Alice", "position": "CEO"}, {"name": "Bob"}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let out = handle_executives(&client, "bitcoin").await;

        assert_eq!(
            out,
            concat!(
                "Coin: Bitcoin (BTC)\n",
                "Socials:\n",
                "  Homepage: https://bitcoin.org\n",
                "  Twitter Screen Name: bitcoin\n",
                "Executives/Team:\n",
                "  Alice - CEO\n"
            )
        );
    }

    #[tokio::test]
    async fn test_timeout_becomes_answer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/bitcoin"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_millis(200));
        let expected = match client.coin("bitcoin").await {
            Err(e) => format!("Error fetching coin data: {e}"),
            Ok(_) => panic!("expected a timeout"),
        };

        let out = handle_executives(&client, "bitcoin").await;
        assert_eq!(out, expected);
    }

    #[tokio::test]
    async fn test_server_error_becomes_answer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let out = handle_executives(&client, "bitcoin").await;

        assert!(out.starts_with("Error fetching coin data: "));
        assert!(out.contains("500"));
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_answer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_secs(5));
        let out = handle_executives(&client, "bitcoin").await;

        assert!(out.starts_with("Error fetching coin data: "));
    }
}
