//! UTC calendar helpers.
//!
//! Every date in the simulator is a UTC calendar day. Timestamps are epoch
//! milliseconds, matching the candle feed.

use crate::error::DateParseError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Epoch milliseconds of 00:00:00 UTC on `date`.
#[must_use]
pub fn midnight_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Epoch milliseconds of the last millisecond of `date` in UTC.
#[must_use]
pub fn end_of_day_millis(date: NaiveDate) -> i64 {
    midnight_millis(date) + MS_PER_DAY - 1
}

/// UTC calendar day containing `millis`.
#[must_use]
pub fn date_from_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

/// Today's date in UTC.
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp into its UTC calendar day.
///
/// # Errors
/// Returns [`DateParseError`] when neither format matches.
pub fn parse_utc_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| DateParseError {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_midnight_millis() {
        // 2022-01-01T00:00:00Z
        assert_eq!(midnight_millis(date(2022, 1, 1)), 1_640_995_200_000);
        assert_eq!(
            midnight_millis(date(2022, 1, 2)) - midnight_millis(date(2022, 1, 1)),
            MS_PER_DAY
        );
    }

    #[test]
    fn test_end_of_day_millis() {
        assert_eq!(
            end_of_day_millis(date(2022, 1, 1)),
            midnight_millis(date(2022, 1, 2)) - 1
        );
    }

    #[test]
    fn test_date_from_millis_roundtrip() {
        let d = date(2024, 2, 29);
        assert_eq!(date_from_millis(midnight_millis(d)), Some(d));
        assert_eq!(date_from_millis(end_of_day_millis(d)), Some(d));
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_utc_date("2022-01-31"), Ok(date(2022, 1, 31)));
        assert_eq!(parse_utc_date(" 2022-01-31 "), Ok(date(2022, 1, 31)));
    }

    #[test]
    fn test_parse_timestamp_normalizes_to_utc_day() {
        assert_eq!(
            parse_utc_date("2022-01-31T23:30:00-02:00"),
            Ok(date(2022, 2, 1))
        );
        assert_eq!(parse_utc_date("2022-01-31T10:00:00Z"), Ok(date(2022, 1, 31)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_utc_date("31/01/2022").unwrap_err();
        assert_eq!(err.input, "31/01/2022");
    }
}
