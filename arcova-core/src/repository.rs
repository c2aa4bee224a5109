use async_trait::async_trait;

use crate::TransportError;
use arcova_shared::{CarRental, Flight, Property, RoomType};

/// Read side of the hotel inventory. Backed by a network data service in
/// production and by deterministic in-memory fixtures in this repository.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn fetch_hotel_catalog(&self) -> Result<Vec<Property>, TransportError>;

    async fn fetch_room_types(&self, property_id: &str) -> Result<Vec<RoomType>, TransportError>;
}

#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn fetch_flights(&self) -> Result<Vec<Flight>, TransportError>;
}

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn fetch_cars(&self) -> Result<Vec<CarRental>, TransportError>;
}
