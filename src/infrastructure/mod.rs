//! # Infrastructure Layer
//!
//! Adapters for external services.

pub mod coingecko;
