use async_trait::async_trait;

use crate::fixtures;
use arcova_core::{CarRepository, CatalogRepository, FlightRepository, TransportError};
use arcova_shared::{CarRental, Flight, Property, RoomType};

/// Fixture-backed implementation of the travel inventory boundary. Stands in
/// for the hotel/flight/car data services; swap for a network-backed
/// implementation without touching the engine.
#[derive(Default)]
pub struct FixtureTravelRepository;

impl FixtureTravelRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogRepository for FixtureTravelRepository {
    async fn fetch_hotel_catalog(&self) -> Result<Vec<Property>, TransportError> {
        Ok(fixtures::properties())
    }

    async fn fetch_room_types(&self, property_id: &str) -> Result<Vec<RoomType>, TransportError> {
        Ok(fixtures::room_types()
            .into_iter()
            .filter(|rt| rt.property_id == property_id)
            .collect())
    }
}

#[async_trait]
impl FlightRepository for FixtureTravelRepository {
    async fn fetch_flights(&self) -> Result<Vec<Flight>, TransportError> {
        Ok(fixtures::flights())
    }
}

#[async_trait]
impl CarRepository for FixtureTravelRepository {
    async fn fetch_cars(&self) -> Result<Vec<CarRental>, TransportError> {
        Ok(fixtures::cars())
    }
}
