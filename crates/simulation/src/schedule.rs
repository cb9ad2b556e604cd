//! Purchase date generation.
//!
//! Dates are UTC calendar days. The n-th date is always derived from the
//! start date rather than from the previous date, so monthly schedules
//! keep the start's day-of-month after passing through a short month:
//! starting on Jan 31 yields Jan 31, Feb 28 (or 29), Mar 31, Apr 30, ...
//! Stepping one month from the previous date instead would drift to the
//! 28th after February (Jan 31, Feb 28, Mar 28, ...).

use chrono::{Days, Months, NaiveDate};
use dca_domain::Frequency;

/// Iterator over purchase dates between two inclusive bounds.
///
/// Yields nothing when `start > end`.
#[derive(Debug, Clone)]
pub struct PurchaseSchedule {
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
    index: u32,
    exhausted: bool,
}

impl PurchaseSchedule {
    /// Creates a schedule from `start` to `end`, both inclusive.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate, frequency: Frequency) -> Self {
        Self {
            start,
            end,
            frequency,
            index: 0,
            exhausted: false,
        }
    }

    /// Date of the `n`-th purchase counting from the start, ignoring the end bound.
    ///
    /// Returns `None` past the representable calendar range.
    #[must_use]
    pub fn nth_date(&self, n: u32) -> Option<NaiveDate> {
        match self.frequency {
            Frequency::Daily => self.start.checked_add_days(Days::new(u64::from(n))),
            Frequency::Weekly => self.start.checked_add_days(Days::new(7 * u64::from(n))),
            Frequency::Monthly => self.start.checked_add_months(Months::new(n)),
        }
    }
}

impl Iterator for PurchaseSchedule {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.nth_date(self.index) {
            Some(date) if date <= self.end => {
                self.index += 1;
                Some(date)
            }
            _ => {
                self.exhausted = true;
                None
            }
        }
    }
}

/// Generates the ordered purchase dates for a range and frequency.
///
/// Both bounds are inclusive; `start` is always the first date when
/// `start <= end`. An inverted range yields an empty vector.
#[must_use]
pub fn generate_dates(start: NaiveDate, end: NaiveDate, frequency: Frequency) -> Vec<NaiveDate> {
    PurchaseSchedule::new(start, end, frequency).collect()
}
