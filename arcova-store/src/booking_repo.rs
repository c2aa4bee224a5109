use async_trait::async_trait;

use crate::fixtures;
use arcova_booking::{Booking, BookingRepository};
use arcova_core::TransportError;

/// Fixture-backed reservation history.
#[derive(Default)]
pub struct FixtureBookingRepository;

impl FixtureBookingRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BookingRepository for FixtureBookingRepository {
    async fn fetch_bookings(&self, traveller_id: &str) -> Result<Vec<Booking>, TransportError> {
        Ok(fixtures::bookings()
            .into_iter()
            .filter(|b| b.traveller_id == traveller_id)
            .collect())
    }
}
