//! DCA simulation entry point.
//!
//! Purchase dates come from [`generate_dates`], each date is priced with
//! [`find_price_at_or_before`] at its UTC midnight, and the running totals
//! are folded into a [`SimulationResult`]. Dates with no candle at or
//! before them are skipped.

use crate::accumulator::{DcaAccumulator, overflow};
use crate::lookup::find_price_at_or_before;
use crate::schedule::generate_dates;
use dca_domain::math::rounding::{round_btc, round_usd};
use dca_domain::time::midnight_millis;
use dca_domain::{Price, SimulationError, SimulationRequest, SimulationResult};
use rust_decimal::Decimal;
use tracing::debug;

/// Runs a DCA simulation.
///
/// # Errors
/// - [`SimulationError::InvalidInput`] when there are no candles, the
///   per-purchase amount is not positive, a matched candle has a
///   non-positive close, or a total leaves the decimal range.
/// - [`SimulationError::NoPurchasesMade`] when no purchase date could be
///   priced.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    if request.candles.is_empty() {
        return Err(SimulationError::InvalidInput(
            "candles must be a non-empty sequence".to_string(),
        ));
    }
    if request.amount <= Decimal::ZERO {
        return Err(SimulationError::InvalidInput(format!(
            "amount must be positive, got {}",
            request.amount
        )));
    }

    let dates = generate_dates(request.start_date, request.end_date, request.frequency);
    let mut accumulator = DcaAccumulator::new(request.amount);

    for date in &dates {
        let target_ms = midnight_millis(*date);
        let Some(candle) = find_price_at_or_before(&request.candles, target_ms) else {
            debug!(date = %date, "No candle at or before purchase date, skipping");
            continue;
        };
        accumulator.record_purchase(*date, candle.close)?;
    }

    let avg_buy_price = accumulator.avg_buy_price()?;

    let total_invested = accumulator.total_invested();
    let btc_accumulated = accumulator.btc_accumulated();
    let latest_price = request.latest_price.filter(Price::is_positive);

    let current_value = latest_price
        .map(|price| {
            btc_accumulated
                .checked_mul(price.value)
                .ok_or_else(|| overflow("current value"))
        })
        .transpose()?;
    let roi = current_value
        .map(|value| {
            value
                .checked_sub(total_invested)
                .and_then(|gain| gain.checked_div(total_invested))
                .ok_or_else(|| overflow("ROI"))
        })
        .transpose()?;

    let first_price = dates
        .first()
        .and_then(|date| find_price_at_or_before(&request.candles, midnight_millis(*date)))
        .map(|candle| candle.close)
        .filter(Price::is_positive);
    let lump_sum_value = match (first_price, latest_price) {
        (Some(first), Some(latest)) => Some(
            total_invested
                .checked_div(first.value)
                .and_then(|btc| btc.checked_mul(latest.value))
                .ok_or_else(|| overflow("lump-sum value"))?,
        ),
        _ => None,
    };

    debug!(
        scheduled = dates.len(),
        purchases = accumulator.purchase_count(),
        %total_invested,
        %btc_accumulated,
        "DCA simulation complete"
    );

    Ok(SimulationResult {
        total_invested: round_usd(total_invested),
        btc_accumulated: round_btc(btc_accumulated),
        avg_buy_price: round_usd(avg_buy_price),
        latest_price: latest_price.map(|price| round_usd(price.value)),
        current_value: current_value.map(round_usd),
        roi,
        lump_sum_value: lump_sum_value.map(round_usd),
        chart_data: accumulator.into_chart_data(),
    })
}
