//! # Domain Traits
//!
//! Abstract interfaces for core system components.
//! Allows for pluggable implementations in the Infrastructure layer (and mocks in tests).

use async_trait::async_trait;

use crate::domain::types::{CoinMetadata, FetchError};

/// Abstract interface for a coin metadata source (e.g., CoinGecko)
#[async_trait]
pub trait CoinMetadataProvider: Send + Sync {
    /// Fetch metadata for a lowercase coin id
    async fn coin(&self, coin_id: &str) -> Result<CoinMetadata, FetchError>;
}
