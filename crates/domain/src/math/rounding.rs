use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for quote-currency (USDT) amounts.
pub const USD_DECIMALS: u32 = 2;
/// Decimal places for base-asset (BTC) quantities.
pub const BTC_DECIMALS: u32 = 8;

/// Rounds a quote-currency amount for presentation.
#[must_use]
pub fn round_usd(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(USD_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a base-asset quantity for presentation.
#[must_use]
pub fn round_btc(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(BTC_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}
