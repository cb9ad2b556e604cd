//! Upstream market data providers.

mod binance;

pub use binance::{BinanceProvider, EARLIEST_CANDLE_MS, clamp_to_earliest, kline_windows};
