//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use dca_simulation::prelude::*;
//! ```

// Engine
pub use crate::engine::simulate;

// Accumulation
pub use crate::accumulator::DcaAccumulator;

// Lookup
pub use crate::lookup::find_price_at_or_before;

// Scheduling
pub use crate::schedule::{PurchaseSchedule, generate_dates};

// Domain types used in every call
pub use dca_domain::{
    Candle, Frequency, Price, PurchaseEvent, SimulationError, SimulationRequest, SimulationResult,
};
