pub mod planner;
pub mod state;

pub use planner::{EngineError, TripPlanner};
pub use state::EngineState;
