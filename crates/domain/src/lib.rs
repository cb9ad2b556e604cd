//! Domain model for the DCA simulator.
//!
//! This crate holds the types shared by every other crate in the workspace:
//! - Daily price candles and price value objects
//! - Purchase frequency
//! - Simulation request, per-purchase rows and aggregate results
//! - Error taxonomy for a simulation run
//! - UTC calendar helpers and presentation rounding

/// Market data entities.
pub mod entities;
/// Enumerations.
pub mod enums;
/// Error types.
pub mod error;
/// Numeric helpers.
pub mod math;
/// UTC calendar helpers.
pub mod time;
/// Value objects.
pub mod value_objects;

pub use entities::Candle;
pub use enums::Frequency;
pub use error::{DateParseError, SimulationError};
pub use value_objects::{
    price::Price,
    simulation_request::SimulationRequest,
    simulation_result::{PurchaseEvent, SimulationReport, SimulationResult},
};
