use crate::entities::candle::Candle;
use crate::enums::Frequency;
use crate::value_objects::price::Price;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Input to a single DCA simulation.
///
/// `candles` must be sorted ascending by `open_time` and unique per day;
/// the engine does not re-sort them.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    /// First purchase date (inclusive, UTC).
    pub start_date: NaiveDate,
    /// Last possible purchase date (inclusive, UTC).
    pub end_date: NaiveDate,
    /// Purchase frequency.
    pub frequency: Frequency,
    /// Quote-currency amount spent on every purchase.
    pub amount: Decimal,
    /// Daily candles covering the range.
    pub candles: Vec<Candle>,
    /// Latest market price, if known.
    pub latest_price: Option<Price>,
}

impl SimulationRequest {
    /// Creates a request without a latest price.
    #[must_use]
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        frequency: Frequency,
        amount: Decimal,
        candles: Vec<Candle>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            frequency,
            amount,
            candles,
            latest_price: None,
        }
    }

    /// Sets the latest market price.
    #[must_use]
    pub fn with_latest_price(mut self, price: Price) -> Self {
        self.latest_price = Some(price);
        self
    }
}
