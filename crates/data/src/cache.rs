//! TTL cache in front of a [`MarketDataProvider`].
//!
//! Candle ranges are keyed by `(symbol, start_ms, end_ms)`; latest prices
//! by symbol with a much shorter TTL. The cache is an ordinary value owned
//! by whoever builds it, so tests can wrap a stub provider directly.

use crate::MarketDataProvider;
use crate::config::CacheConfig;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use dca_domain::time::{end_of_day_millis, midnight_millis};
use dca_domain::{Candle, Price};
use moka::future::Cache;
use std::sync::Arc;
use tracing::debug;

/// Cache key for a candle range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandleKey {
    /// Trading pair, e.g. `BTCUSDT`.
    pub symbol: String,
    /// Range start, epoch ms.
    pub start_ms: i64,
    /// Range end, epoch ms.
    pub end_ms: i64,
}

impl CandleKey {
    /// Builds the key for the UTC days `start..=end`.
    #[must_use]
    pub fn new(symbol: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.to_string(),
            start_ms: midnight_millis(start),
            end_ms: end_of_day_millis(end),
        }
    }
}

/// Provider decorator that caches candles and latest prices.
pub struct CachedProvider<P> {
    inner: P,
    candles: Cache<CandleKey, Arc<Vec<Candle>>>,
    prices: Cache<String, Price>,
}

impl<P: MarketDataProvider> CachedProvider<P> {
    /// Wraps `inner` with caches built from `config`.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let candles = Cache::builder()
            .max_capacity(config.max_candle_entries)
            .time_to_live(config.candle_ttl)
            .build();
        let prices = Cache::builder().time_to_live(config.price_ttl).build();

        Self {
            inner,
            candles,
            prices,
        }
    }

    /// Returns the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Drops every cached entry.
    pub fn invalidate_all(&self) {
        self.candles.invalidate_all();
        self.prices.invalidate_all();
    }
}

#[async_trait]
impl<P: MarketDataProvider> MarketDataProvider for CachedProvider<P> {
    async fn fetch_candles(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Candle>> {
        let key = CandleKey::new(symbol, start, end);
        if let Some(cached) = self.candles.get(&key).await {
            debug!(?key, "Candle cache hit");
            return Ok(cached.as_ref().clone());
        }

        let candles = self.inner.fetch_candles(symbol, start, end).await?;
        self.candles.insert(key, Arc::new(candles.clone())).await;
        Ok(candles)
    }

    async fn fetch_latest_price(&self, symbol: &str) -> Result<Price> {
        if let Some(price) = self.prices.get(symbol).await {
            debug!(symbol, "Price cache hit");
            return Ok(price);
        }

        let price = self.inner.fetch_latest_price(symbol).await?;
        self.prices.insert(symbol.to_string(), price).await;
        Ok(price)
    }
}
