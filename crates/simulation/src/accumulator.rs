//! Running totals across DCA purchases.
//!
//! The accumulator keeps full-precision totals and emits rounded
//! [`PurchaseEvent`] rows; rounding never feeds back into the totals.

use chrono::NaiveDate;
use dca_domain::math::rounding::{round_btc, round_usd};
use dca_domain::{Price, PurchaseEvent, SimulationError};
use rust_decimal::Decimal;

/// Tracks invested capital and BTC held as purchases are recorded.
#[derive(Debug, Clone)]
pub struct DcaAccumulator {
    /// Quote-currency amount spent per purchase.
    amount: Decimal,
    /// Total invested so far.
    total_invested: Decimal,
    /// BTC held so far.
    btc_accumulated: Decimal,
    /// One row per recorded purchase.
    chart_data: Vec<PurchaseEvent>,
}

impl DcaAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            total_invested: Decimal::ZERO,
            btc_accumulated: Decimal::ZERO,
            chart_data: Vec::new(),
        }
    }

    /// Records a purchase of `amount` at `price` on `date`.
    ///
    /// Totals are left untouched when an error is returned.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidInput`] if `price` is not positive
    /// or a running total leaves the decimal range.
    pub fn record_purchase(
        &mut self,
        date: NaiveDate,
        price: Price,
    ) -> Result<&PurchaseEvent, SimulationError> {
        if !price.is_positive() {
            return Err(SimulationError::InvalidInput(format!(
                "non-positive price {price} for {date}"
            )));
        }

        let btc_bought = self
            .amount
            .checked_div(price.value)
            .ok_or_else(|| overflow("BTC bought"))?;
        let total_invested = self
            .total_invested
            .checked_add(self.amount)
            .ok_or_else(|| overflow("total invested"))?;
        let btc_accumulated = self
            .btc_accumulated
            .checked_add(btc_bought)
            .ok_or_else(|| overflow("BTC accumulated"))?;
        let portfolio_value = btc_accumulated
            .checked_mul(price.value)
            .ok_or_else(|| overflow("portfolio value"))?;

        self.total_invested = total_invested;
        self.btc_accumulated = btc_accumulated;

        self.chart_data.push(PurchaseEvent {
            date,
            price_at_buy: price,
            invested: round_usd(self.total_invested),
            btc_accumulated: round_btc(self.btc_accumulated),
            portfolio_value_at_date: round_usd(portfolio_value),
        });

        Ok(&self.chart_data[self.chart_data.len() - 1])
    }

    /// Quote-currency amount spent per purchase.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Total invested, unrounded.
    #[must_use]
    pub fn total_invested(&self) -> Decimal {
        self.total_invested
    }

    /// BTC held, unrounded.
    #[must_use]
    pub fn btc_accumulated(&self) -> Decimal {
        self.btc_accumulated
    }

    /// Number of purchases recorded.
    #[must_use]
    pub fn purchase_count(&self) -> usize {
        self.chart_data.len()
    }

    /// Average cost per BTC.
    ///
    /// # Errors
    /// - [`SimulationError::NoPurchasesMade`] while no BTC is held.
    /// - [`SimulationError::InvalidInput`] if the ratio leaves the decimal range.
    pub fn avg_buy_price(&self) -> Result<Decimal, SimulationError> {
        if self.btc_accumulated.is_zero() {
            return Err(SimulationError::NoPurchasesMade);
        }
        self.total_invested
            .checked_div(self.btc_accumulated)
            .ok_or_else(|| overflow("average buy price"))
    }

    /// Consumes the accumulator, returning the recorded rows.
    #[must_use]
    pub fn into_chart_data(self) -> Vec<PurchaseEvent> {
        self.chart_data
    }
}

/// Error for a quantity that does not fit in a [`Decimal`].
pub(crate) fn overflow(quantity: &str) -> SimulationError {
    SimulationError::InvalidInput(format!("{quantity} overflows decimal range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_accumulator() {
        let acc = DcaAccumulator::new(dec!(100));
        assert_eq!(acc.purchase_count(), 0);
        assert!(acc.btc_accumulated().is_zero());
        assert_eq!(acc.avg_buy_price(), Err(SimulationError::NoPurchasesMade));
        assert_eq!(acc.amount(), dec!(100));
    }

    #[test]
    fn test_running_totals() {
        let mut acc = DcaAccumulator::new(dec!(100));

        let first = acc.record_purchase(date(2022, 1, 1), Price::new(dec!(100))).unwrap();
        assert_eq!(first.invested, dec!(100));
        assert_eq!(first.btc_accumulated, dec!(1));
        assert_eq!(first.portfolio_value_at_date, dec!(100));

        let second = acc.record_purchase(date(2022, 1, 8), Price::new(dec!(200))).unwrap();
        assert_eq!(second.invested, dec!(200));
        assert_eq!(second.btc_accumulated, dec!(1.5));
        // Running BTC is valued at the price of this purchase.
        assert_eq!(second.portfolio_value_at_date, dec!(300));

        assert_eq!(acc.total_invested(), dec!(200));
        assert_eq!(acc.btc_accumulated(), dec!(1.5));
        assert_eq!(acc.avg_buy_price().map(round_usd), Ok(dec!(133.33)));
    }

    #[test]
    fn test_rows_are_rounded_but_totals_are_not() {
        let mut acc = DcaAccumulator::new(dec!(100));
        let row = acc.record_purchase(date(2022, 1, 1), Price::new(dec!(30000))).unwrap();

        // 100 / 30000 = 0.00333333...
        assert_eq!(row.btc_accumulated, dec!(0.00333333));
        assert!(acc.btc_accumulated() > dec!(0.00333333));
        assert!(acc.btc_accumulated() < dec!(0.00333334));
    }

    #[test]
    fn test_rejects_zero_price() {
        let mut acc = DcaAccumulator::new(dec!(100));
        let err = acc
            .record_purchase(date(2022, 1, 1), Price::new(Decimal::ZERO))
            .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
        assert_eq!(acc.purchase_count(), 0);
    }

    #[test]
    fn test_division_overflow_is_invalid_input() {
        let mut acc = DcaAccumulator::new(dec!(100000000000000000000));
        let err = acc
            .record_purchase(date(2022, 1, 1), Price::new(dec!(0.000000001)))
            .unwrap_err();

        assert!(matches!(err, SimulationError::InvalidInput(ref msg) if msg.contains("overflows")));
        assert_eq!(acc.purchase_count(), 0);
        assert!(acc.btc_accumulated().is_zero());
    }

    #[test]
    fn test_total_overflow_keeps_previous_totals() {
        let mut acc = DcaAccumulator::new(Decimal::MAX);
        acc.record_purchase(date(2022, 1, 1), Price::new(Decimal::MAX))
            .unwrap();

        let err = acc
            .record_purchase(date(2022, 1, 2), Price::new(Decimal::MAX))
            .unwrap_err();

        assert!(matches!(err, SimulationError::InvalidInput(_)));
        assert_eq!(acc.purchase_count(), 1);
        assert_eq!(acc.total_invested(), Decimal::MAX);
    }
}
