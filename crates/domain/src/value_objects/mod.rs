pub mod price;
pub mod simulation_request;
pub mod simulation_result;

pub use price::Price;
pub use simulation_request::SimulationRequest;
pub use simulation_result::{PurchaseEvent, SimulationReport, SimulationResult};
