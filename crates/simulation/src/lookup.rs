//! Point-in-time candle lookup.

use dca_domain::Candle;

/// Finds the latest candle whose `open_time` is at or before `target_ms`.
///
/// `candles` must be sorted ascending by `open_time`. Runs in O(log n).
/// Returns `None` when every candle opens after the target.
#[must_use]
pub fn find_price_at_or_before(candles: &[Candle], target_ms: i64) -> Option<&Candle> {
    let after = candles.partition_point(|candle| candle.open_time <= target_ms);
    after.checked_sub(1).and_then(|idx| candles.get(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dca_domain::Price;
    use dca_domain::time::MS_PER_DAY;
    use rust_decimal::Decimal;

    const DAY0: i64 = 1_640_995_200_000; // 2022-01-01T00:00:00Z

    fn candles(days: &[i64]) -> Vec<Candle> {
        days.iter()
            .map(|d| Candle::from_close(DAY0 + d * MS_PER_DAY, Price::new(Decimal::from(100 + d))))
            .collect()
    }

    #[test]
    fn test_exact_match_is_preferred() {
        let series = candles(&[0, 1, 2, 3]);
        let found = find_price_at_or_before(&series, DAY0 + 2 * MS_PER_DAY).unwrap();
        assert_eq!(found.open_time, DAY0 + 2 * MS_PER_DAY);
        assert_eq!(found.close.value, Decimal::from(102));
    }

    #[test]
    fn test_falls_back_to_earlier_candle_across_gap() {
        let series = candles(&[0, 1, 5, 6]);
        let found = find_price_at_or_before(&series, DAY0 + 3 * MS_PER_DAY).unwrap();
        assert_eq!(found.open_time, DAY0 + MS_PER_DAY);
    }

    #[test]
    fn test_target_after_last_candle_returns_last() {
        let series = candles(&[0, 1, 2]);
        let found = find_price_at_or_before(&series, DAY0 + 30 * MS_PER_DAY).unwrap();
        assert_eq!(found.open_time, DAY0 + 2 * MS_PER_DAY);
    }

    #[test]
    fn test_none_when_all_candles_are_later() {
        let series = candles(&[3, 4, 5]);
        assert!(find_price_at_or_before(&series, DAY0 + 2 * MS_PER_DAY).is_none());
        assert!(find_price_at_or_before(&series, DAY0 + 3 * MS_PER_DAY - 1).is_none());
    }

    #[test]
    fn test_empty_series() {
        assert!(find_price_at_or_before(&[], DAY0).is_none());
    }

    #[test]
    fn test_every_target_in_long_series() {
        let days: Vec<i64> = (0..500).collect();
        let series = candles(&days);
        for d in &days {
            let target = DAY0 + d * MS_PER_DAY + MS_PER_DAY / 2;
            let found = find_price_at_or_before(&series, target).unwrap();
            assert_eq!(found.open_time, DAY0 + d * MS_PER_DAY);
        }
    }
}
