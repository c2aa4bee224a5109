pub mod display;
pub mod models;

pub use models::identity::{AuthSession, User, UserRole};
pub use models::property::{Property, PropertyStatus, PropertySummary, RoomType, RoomTypeStatus};
pub use models::travel::{CabinClass, CarRental, Flight, FlightEndpoint, Transmission};
pub use models::trip::{TripItem, TripItemKind};
