//! Configuration for market data access.
//!
//! Values come from the environment (optionally via `.env`) with defaults
//! that work against the public Binance API.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Configuration for [`BinanceProvider`](crate::providers::BinanceProvider).
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    /// REST base URL.
    pub base_url: String,
    /// Timeout for a single klines page.
    pub klines_timeout: Duration,
    /// Timeout for a ticker request.
    pub ticker_timeout: Duration,
    /// Maximum candles per klines request.
    pub page_limit: u16,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.binance.com".to_string(),
            klines_timeout: Duration::from_secs(15),
            ticker_timeout: Duration::from_secs(8),
            page_limit: 1000, // Binance maximum
        }
    }
}

impl BinanceConfig {
    /// Reads overrides from `BINANCE_BASE_URL`, `BINANCE_KLINES_TIMEOUT_SECS`
    /// and `BINANCE_TICKER_TIMEOUT_SECS`.
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            base_url: env::var("BINANCE_BASE_URL").unwrap_or(defaults.base_url),
            klines_timeout: env_secs("BINANCE_KLINES_TIMEOUT_SECS")?
                .unwrap_or(defaults.klines_timeout),
            ticker_timeout: env_secs("BINANCE_TICKER_TIMEOUT_SECS")?
                .unwrap_or(defaults.ticker_timeout),
            page_limit: defaults.page_limit,
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Configuration for [`CachedProvider`](crate::cache::CachedProvider).
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a candle range stays cached.
    pub candle_ttl: Duration,
    /// How long a latest price stays cached.
    pub price_ttl: Duration,
    /// Maximum cached candle ranges.
    pub max_candle_entries: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            candle_ttl: Duration::from_secs(60 * 60), // 1 hour
            price_ttl: Duration::from_secs(10),
            max_candle_entries: 256,
        }
    }
}

impl CacheConfig {
    /// Reads overrides from `CANDLE_CACHE_TTL_SECS` and `PRICE_CACHE_TTL_SECS`.
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            candle_ttl: env_secs("CANDLE_CACHE_TTL_SECS")?.unwrap_or(defaults.candle_ttl),
            price_ttl: env_secs("PRICE_CACHE_TTL_SECS")?.unwrap_or(defaults.price_ttl),
            max_candle_entries: defaults.max_candle_entries,
        })
    }

    /// Sets both TTLs.
    #[must_use]
    pub fn with_ttls(mut self, candle_ttl: Duration, price_ttl: Duration) -> Self {
        self.candle_ttl = candle_ttl;
        self.price_ttl = price_ttl;
        self
    }
}

fn env_secs(key: &str) -> Result<Option<Duration>> {
    match env::var(key) {
        Ok(raw) => parse_secs(&raw)
            .map(Some)
            .with_context(|| format!("{key} must be a whole number of seconds")),
        Err(_) => Ok(None),
    }
}

fn parse_secs(raw: &str) -> Result<Duration> {
    let secs = u64::from_str(raw.trim())?;
    Ok(Duration::from_secs(secs))
}
