pub mod app_config;
pub mod auth;
pub mod booking_repo;
pub mod catalog_repo;
pub mod fixtures;
pub mod storage;

pub use auth::AuthStore;
pub use booking_repo::FixtureBookingRepository;
pub use catalog_repo::FixtureTravelRepository;
pub use storage::{JsonFileStore, MemoryStore, StorageBackend, StorageError};
