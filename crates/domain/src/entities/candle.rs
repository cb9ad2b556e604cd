use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A daily OHLCV observation.
///
/// `open_time` and `close_time` are epoch milliseconds in UTC; `open_time`
/// is the start of the represented day. Only `open_time` and `close` feed
/// the simulation, the rest is carried through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    pub open_time: i64,

    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,

    pub volume: Decimal,
    pub close_time: i64,
}

impl Candle {
    /// Creates a candle where every price equals `close`.
    ///
    /// Handy when only closing prices are known.
    #[must_use]
    pub fn from_close(open_time: i64, close: Price) -> Self {
        Self {
            open_time,
            open: close,
            high: close,
            low: close,
            close,
            volume: Decimal::ZERO,
            close_time: open_time + crate::time::MS_PER_DAY - 1,
        }
    }
}
