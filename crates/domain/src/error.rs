use thiserror::Error;

/// Terminal failures of a simulation run.
///
/// A missing candle for a single purchase date is not an error; the date
/// is skipped. It only surfaces here when every date was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Input cannot be simulated (e.g. no candles).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Date range and frequency produced no purchases.
    #[error("No purchases were made in the selected date range/frequency.")]
    NoPurchasesMade,
}

/// Failure to read a calendar date from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date '{input}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
pub struct DateParseError {
    pub input: String,
}
