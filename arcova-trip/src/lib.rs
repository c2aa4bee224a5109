pub mod cart;
pub mod gate;
pub mod store;

pub use cart::TripCart;
pub use gate::{AuthGateCoordinator, GateState};
pub use store::TripStore;
