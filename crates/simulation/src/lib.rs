//! DCA calculation engine.
//!
//! This crate turns a [`SimulationRequest`](dca_domain::SimulationRequest)
//! into a [`SimulationResult`](dca_domain::SimulationResult):
//! - Purchase date generation for daily, weekly and monthly schedules
//! - Point-in-time price lookup over ascending daily candles
//! - Running cost-basis accumulation
//! - Summary statistics and the lump-sum comparator
//!
//! Everything here is synchronous and free of shared state.

/// Prelude module for convenient imports.
pub mod prelude;

/// Running totals across purchases.
pub mod accumulator;
/// Simulation entry point.
pub mod engine;
/// Point-in-time candle lookup.
pub mod lookup;
/// Purchase date generation.
pub mod schedule;
