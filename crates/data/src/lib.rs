//! Market data access for the DCA simulator.
//!
//! This crate supplies the simulation with daily candles and the latest
//! price:
//! - [`MarketDataProvider`] abstracts the upstream source
//! - [`providers::BinanceProvider`] reads Binance public REST endpoints
//! - [`CachedProvider`] adds an injectable TTL cache in front of any provider

/// TTL cache decorator.
pub mod cache;
/// Provider configuration.
pub mod config;
/// Upstream data providers.
pub mod providers;

pub use cache::{CachedProvider, CandleKey};
pub use config::{BinanceConfig, CacheConfig};

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use dca_domain::{Candle, Price};

/// Source of daily candles and spot prices.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches daily candles covering `start..=end` (UTC days).
    ///
    /// The returned candles are sorted ascending by `open_time` and unique
    /// per day. Days the upstream has no data for are simply missing.
    ///
    /// # Errors
    /// Returns an error if the upstream request or decoding fails.
    async fn fetch_candles(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Candle>>;

    /// Fetches the latest traded price.
    ///
    /// # Errors
    /// Returns an error if the upstream request or decoding fails.
    async fn fetch_latest_price(&self, symbol: &str) -> Result<Price>;
}
