use async_trait::async_trait;

use crate::models::Booking;
use arcova_core::TransportError;

/// Read side of a traveller's reservation history.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn fetch_bookings(&self, traveller_id: &str) -> Result<Vec<Booking>, TransportError>;
}
