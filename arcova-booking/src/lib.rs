pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{BookingError, BookingManager};
pub use models::{traveller_stats, Booking, BookingStatus, StayRequest, TravellerStats};
pub use repository::BookingRepository;
