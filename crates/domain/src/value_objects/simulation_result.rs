use crate::enums::Frequency;
use crate::value_objects::price::Price;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One purchase and the running totals right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseEvent {
    /// Purchase date (UTC).
    pub date: NaiveDate,
    /// Close of the candle the purchase was priced at.
    pub price_at_buy: Price,
    /// Running total invested, 2 dp.
    pub invested: Decimal,
    /// Running BTC held, 8 dp.
    pub btc_accumulated: Decimal,
    /// Running BTC valued at `price_at_buy`, 2 dp.
    pub portfolio_value_at_date: Decimal,
}

/// Aggregate outcome of a DCA simulation.
///
/// Optional fields are `None` when no latest price was supplied; they
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub total_invested: Decimal,
    pub btc_accumulated: Decimal,
    pub avg_buy_price: Decimal,
    pub latest_price: Option<Decimal>,
    pub current_value: Option<Decimal>,
    /// Unrounded ratio, e.g. `0.5` for +50%.
    pub roi: Option<Decimal>,
    /// Value of investing `total_invested` on the first purchase date.
    pub lump_sum_value: Option<Decimal>,
    pub chart_data: Vec<PurchaseEvent>,
}

impl SimulationResult {
    /// Number of purchases made.
    #[must_use]
    pub fn purchase_count(&self) -> usize {
        self.chart_data.len()
    }

    /// DCA value minus lump-sum value; positive when DCA did better.
    #[must_use]
    pub fn dca_vs_lump_sum(&self) -> Option<Decimal> {
        match (self.current_value, self.lump_sum_value) {
            (Some(current), Some(lump_sum)) => Some(current - lump_sum),
            _ => None,
        }
    }
}

/// A result together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub frequency: Frequency,
    pub amount: Decimal,
    #[serde(flatten)]
    pub result: SimulationResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn sample_result(latest: bool) -> SimulationResult {
        SimulationResult {
            total_invested: dec!(200),
            btc_accumulated: dec!(1.5),
            avg_buy_price: dec!(133.33),
            latest_price: latest.then_some(dec!(200)),
            current_value: latest.then_some(dec!(300)),
            roi: latest.then_some(dec!(0.5)),
            lump_sum_value: latest.then_some(dec!(400)),
            chart_data: vec![PurchaseEvent {
                date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                price_at_buy: Price::new(dec!(100)),
                invested: dec!(100),
                btc_accumulated: dec!(1),
                portfolio_value_at_date: dec!(100),
            }],
        }
    }

    #[test]
    fn test_result_serializes_camel_case_numbers() {
        let value = serde_json::to_value(sample_result(true)).unwrap();

        assert_eq!(value["totalInvested"], json!(200.0));
        assert_eq!(value["avgBuyPrice"], json!(133.33));
        assert_eq!(value["roi"], json!(0.5));
        assert_eq!(value["chartData"][0]["date"], json!("2022-01-01"));
        assert_eq!(value["chartData"][0]["priceAtBuy"], json!(100.0));
        assert_eq!(value["chartData"][0]["portfolioValueAtDate"], json!(100.0));
    }

    #[test]
    fn test_absent_optionals_serialize_as_null() {
        let value = serde_json::to_value(sample_result(false)).unwrap();

        assert!(value["latestPrice"].is_null());
        assert!(value["currentValue"].is_null());
        assert!(value["roi"].is_null());
        assert!(value["lumpSumValue"].is_null());
    }

    #[test]
    fn test_dca_vs_lump_sum() {
        assert_eq!(sample_result(true).dca_vs_lump_sum(), Some(dec!(-100)));
        assert_eq!(sample_result(false).dca_vs_lump_sum(), None);
    }

    #[test]
    fn test_report_flattens_result() {
        let report = SimulationReport {
            start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2022, 1, 8).unwrap(),
            frequency: Frequency::Weekly,
            amount: dec!(100),
            result: sample_result(true),
        };
        let value = serde_json::to_value(report).unwrap();

        assert_eq!(value["startDate"], json!("2022-01-01"));
        assert_eq!(value["frequency"], json!("weekly"));
        assert_eq!(value["amount"], json!(100.0));
        assert_eq!(value["btcAccumulated"], json!(1.5));
        assert!(value["chartData"].is_array());
    }
}
