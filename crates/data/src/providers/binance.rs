//! Binance public REST provider.

use crate::MarketDataProvider;
use crate::config::BinanceConfig;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use dca_domain::time::{MS_PER_DAY, date_from_millis, end_of_day_millis, midnight_millis};
use dca_domain::{Candle, Price};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// First day with BTCUSDT daily candles (2017-09-01T00:00:00Z).
pub const EARLIEST_CANDLE_MS: i64 = 1_504_224_000_000;

/// Moves `start` forward to the earliest day with candle data.
#[must_use]
pub fn clamp_to_earliest(start: NaiveDate) -> NaiveDate {
    if midnight_millis(start) >= EARLIEST_CANDLE_MS {
        return start;
    }
    date_from_millis(EARLIEST_CANDLE_MS).unwrap_or(start)
}

/// Splits `start_ms..=end_ms` into request windows of at most `limit` days.
///
/// Each window starts on a day boundary relative to `start_ms`; the last
/// window ends exactly at `end_ms`.
#[must_use]
pub fn kline_windows(start_ms: i64, end_ms: i64, limit: u16) -> Vec<(i64, i64)> {
    let span = i64::from(limit.max(1) - 1) * MS_PER_DAY;
    let mut windows = Vec::new();
    let mut cursor = start_ms;
    while cursor <= end_ms {
        let window_end = end_ms.min(cursor + span);
        windows.push((cursor, window_end));
        cursor = window_end + MS_PER_DAY;
    }
    windows
}

#[derive(Debug, Deserialize)]
struct TickerPrice {
    symbol: String,
    price: String,
}

/// Binance spot market data over the public REST API.
///
/// Candles come from `/api/v3/klines` with a `1d` interval, paged by
/// [`BinanceConfig::page_limit`]; the latest price from
/// `/api/v3/ticker/price`.
#[derive(Debug, Clone)]
pub struct BinanceProvider {
    client: Client,
    config: BinanceConfig,
}

impl BinanceProvider {
    /// Creates a new provider.
    #[must_use]
    pub fn new(config: BinanceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a provider with a caller-supplied HTTP client.
    #[must_use]
    pub fn with_client(client: Client, config: BinanceConfig) -> Self {
        Self { client, config }
    }

    async fn fetch_klines_page(
        &self,
        symbol: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<Candle>> {
        let url = format!("{}/api/v3/klines", self.config.base_url);
        let limit = self.config.page_limit.to_string();
        let start = start_ms.to_string();
        let end = end_ms.to_string();

        let rows: Vec<Vec<Value>> = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", "1d"),
                ("startTime", start.as_str()),
                ("endTime", end.as_str()),
                ("limit", limit.as_str()),
            ])
            .timeout(self.config.klines_timeout)
            .send()
            .await
            .with_context(|| format!("klines request for {symbol} failed"))?
            .error_for_status()
            .with_context(|| format!("klines request for {symbol} was rejected"))?
            .json()
            .await
            .context("klines response is not a JSON array of arrays")?;

        debug!(symbol, start_ms, end_ms, rows = rows.len(), "Fetched klines page");

        rows.iter().map(|row| parse_kline(row)).collect()
    }
}

#[async_trait]
impl MarketDataProvider for BinanceProvider {
    async fn fetch_candles(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Candle>> {
        let start_ms = midnight_millis(clamp_to_earliest(start));
        let end_ms = end_of_day_millis(end);

        let mut candles = Vec::new();
        for (window_start, window_end) in kline_windows(start_ms, end_ms, self.config.page_limit) {
            let page = self
                .fetch_klines_page(symbol, window_start, window_end)
                .await?;
            candles.extend(page);
        }

        candles.sort_by_key(|candle| candle.open_time);
        candles.dedup_by_key(|candle| candle.open_time);

        info!(symbol, %start, %end, candles = candles.len(), "Fetched daily candles");
        Ok(candles)
    }

    async fn fetch_latest_price(&self, symbol: &str) -> Result<Price> {
        let url = format!("{}/api/v3/ticker/price", self.config.base_url);

        let ticker: TickerPrice = self
            .client
            .get(&url)
            .query(&[("symbol", symbol)])
            .timeout(self.config.ticker_timeout)
            .send()
            .await
            .with_context(|| format!("ticker request for {symbol} failed"))?
            .error_for_status()
            .with_context(|| format!("ticker request for {symbol} was rejected"))?
            .json()
            .await
            .context("ticker response is malformed")?;

        let price = parse_decimal(&ticker.price)
            .with_context(|| format!("invalid price for {}", ticker.symbol))?;
        debug!(symbol = %ticker.symbol, %price, "Fetched latest price");
        Ok(Price::new(price))
    }
}

/// Parses one kline row: `[openTime, open, high, low, close, volume, closeTime, ...]`.
fn parse_kline(row: &[Value]) -> Result<Candle> {
    if row.len() < 7 {
        return Err(anyhow!("kline row has {} fields, expected at least 7", row.len()));
    }

    Ok(Candle {
        open_time: integer_field(&row[0], "openTime")?,
        open: Price::new(decimal_field(&row[1], "open")?),
        high: Price::new(decimal_field(&row[2], "high")?),
        low: Price::new(decimal_field(&row[3], "low")?),
        close: Price::new(decimal_field(&row[4], "close")?),
        volume: decimal_field(&row[5], "volume")?,
        close_time: integer_field(&row[6], "closeTime")?,
    })
}

fn integer_field(value: &Value, name: &str) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| anyhow!("kline field {name} is not an integer: {value}"))
}

fn decimal_field(value: &Value, name: &str) -> Result<Decimal> {
    let parsed = match value {
        Value::String(s) => parse_decimal(s),
        Value::Number(n) => parse_decimal(&n.to_string()),
        _ => Err(anyhow!("unexpected JSON type")),
    };
    parsed.with_context(|| format!("kline field {name} is not a decimal: {value}"))
}

fn parse_decimal(raw: &str) -> Result<Decimal> {
    raw.trim()
        .parse::<Decimal>()
        .with_context(|| format!("cannot parse '{raw}' as a decimal"))
}
