use chrono::Utc;
use uuid::Uuid;

use crate::models::{traveller_stats, Booking, BookingStatus, RoomTypeSummary, StayRequest, TravellerStats};
use crate::repository::BookingRepository;
use arcova_catalog::{nights_between, PricingResolver};
use arcova_core::TransportError;

/// Manages a traveller's reservations and their terminal transitions.
pub struct BookingManager {
    bookings: Vec<Booking>,
    resolver: PricingResolver,
    /// Platform commission withheld from the host, as a fraction of total.
    commission_rate: f64,
    /// Bumped on every mutation so cached lists and dashboard aggregates
    /// know to refresh.
    revision: u64,
}

impl BookingManager {
    pub fn new(resolver: PricingResolver, commission_rate: f64) -> Self {
        Self {
            bookings: Vec::new(),
            resolver,
            commission_rate,
            revision: 0,
        }
    }

    /// Hydrate from the data service.
    pub async fn load(
        repo: &dyn BookingRepository,
        traveller_id: &str,
        resolver: PricingResolver,
        commission_rate: f64,
    ) -> Result<Self, TransportError> {
        let bookings = repo.fetch_bookings(traveller_id).await?;
        tracing::debug!(count = bookings.len(), traveller_id, "hydrated bookings");
        Ok(Self {
            bookings,
            resolver,
            commission_rate,
            revision: 0,
        })
    }

    /// All bookings, or exact-status matches when a filter is given.
    pub fn list_bookings(&self, status_filter: Option<BookingStatus>) -> Vec<Booking> {
        match status_filter {
            Some(status) => self
                .bookings
                .iter()
                .filter(|b| b.status == status)
                .cloned()
                .collect(),
            None => self.bookings.clone(),
        }
    }

    /// Most recently booked first.
    pub fn recent_bookings(&self, limit: usize) -> Vec<Booking> {
        let mut bookings = self.bookings.clone();
        bookings.sort_by(|a, b| b.booked_at.cmp(&a.booked_at));
        bookings.truncate(limit);
        bookings
    }

    pub fn get_booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Confirm a stay: validates the selection, prices it, and records the
    /// booking. Validation rejects before any state changes.
    pub fn confirm_booking(&mut self, request: StayRequest) -> Result<Booking, BookingError> {
        let nights = nights_between(request.check_in, request.check_out);
        if nights <= 0 {
            return Err(BookingError::Validation(
                "check-out must be after check-in".to_string(),
            ));
        }
        if request.guests == 0 {
            return Err(BookingError::Validation(
                "at least one guest is required".to_string(),
            ));
        }
        if request.guests > request.room_type.max_guests {
            return Err(BookingError::Validation(format!(
                "{} sleeps at most {} guests",
                request.room_type.name, request.room_type.max_guests
            )));
        }
        if request.room_type.total_rooms == 0 {
            return Err(BookingError::Validation(format!(
                "{} has no rooms to book",
                request.room_type.name
            )));
        }

        // nights > 0 was checked above, so a quote always exists here
        let quote = self
            .resolver
            .compute_quote(&request.room_type, nights)
            .ok_or_else(|| BookingError::Validation("stay is not quotable".to_string()))?;

        let commission = (quote.total_cents as f64 * self.commission_rate).round() as i64;
        let booking = Booking {
            id: format!("bk-{}", Uuid::new_v4()),
            traveller_id: request.traveller_id,
            property_id: request.property.id.clone(),
            room_type_id: request.room_type.id.clone(),
            check_in: request.check_in,
            check_out: request.check_out,
            nights,
            guests: request.guests,
            status: BookingStatus::Confirmed,
            total_price_cents: quote.total_cents,
            net_revenue_cents: quote.total_cents - commission,
            booked_at: Utc::now(),
            cancelled_at: None,
            property: Some(request.property),
            room_type: Some(RoomTypeSummary::of(&request.room_type)),
        };

        tracing::info!(booking_id = %booking.id, total_cents = booking.total_price_cents, "booking confirmed");
        self.bookings.push(booking.clone());
        self.revision += 1;
        Ok(booking)
    }

    /// `confirmed -> cancelled` only. Zeroes net revenue and stamps the
    /// cancellation time.
    pub fn cancel_booking(&mut self, id: &str) -> Result<&Booking, BookingError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        if booking.status != BookingStatus::Confirmed {
            return Err(BookingError::InvalidTransition {
                from: booking.status.to_string(),
                to: BookingStatus::Cancelled.to_string(),
            });
        }

        booking.status = BookingStatus::Cancelled;
        booking.net_revenue_cents = 0;
        booking.cancelled_at = Some(Utc::now());
        self.revision += 1;

        tracing::info!(booking_id = id, "booking cancelled");
        Ok(&*booking)
    }

    pub fn stats(&self) -> TravellerStats {
        traveller_stats(&self.bookings)
    }

    /// Cache key for consumers holding derived views: any change to the
    /// booking set changes the revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("booking not found: {0}")]
    NotFound(String),

    #[error("invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcova_shared::{PropertyStatus, PropertySummary, RoomType, RoomTypeStatus};
    use chrono::NaiveDate;

    fn summary() -> PropertySummary {
        PropertySummary {
            id: "prop-1".to_string(),
            name: "The Grand Palazzo".to_string(),
            city: "Venice".to_string(),
            country: "Italy".to_string(),
            star_rating: 5,
            thumbnail_url: String::new(),
            amenities: vec![],
            status: PropertyStatus::Active,
            base_price_cents: 45000,
        }
    }

    fn room(total_rooms: i32) -> RoomType {
        RoomType {
            id: "rt-1".to_string(),
            property_id: "prop-1".to_string(),
            name: "Classic Room".to_string(),
            description: String::new(),
            max_guests: 2,
            total_rooms,
            base_price_cents: 10000,
            amenities: vec![],
            status: RoomTypeStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn request(check_in: (u32, u32), check_out: (u32, u32), guests: u32) -> StayRequest {
        StayRequest {
            traveller_id: "usr-1".to_string(),
            property: summary(),
            room_type: room(8),
            check_in: NaiveDate::from_ymd_opt(2026, check_in.0, check_in.1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, check_out.0, check_out.1).unwrap(),
            guests,
        }
    }

    fn manager() -> BookingManager {
        BookingManager::new(PricingResolver::default(), 0.15)
    }

    #[test]
    fn test_confirm_prices_the_stay() {
        let mut manager = manager();
        let booking = manager.confirm_booking(request((3, 15), (3, 18), 2)).unwrap();

        // 3 nights x 10000 + 15% tax
        assert_eq!(booking.nights, 3);
        assert_eq!(booking.total_price_cents, 34500);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(
            booking.net_revenue_cents,
            34500 - (34500f64 * 0.15).round() as i64
        );
    }

    #[test]
    fn test_confirm_rejects_inverted_dates() {
        let mut manager = manager();
        let err = manager.confirm_booking(request((3, 18), (3, 15), 2)).unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
        assert!(manager.list_bookings(None).is_empty());
    }

    #[test]
    fn test_confirm_rejects_overflowing_guests() {
        let mut manager = manager();
        let err = manager.confirm_booking(request((3, 15), (3, 18), 4)).unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
    }

    #[test]
    fn test_cancel_only_from_confirmed() {
        let mut manager = manager();
        let id = manager
            .confirm_booking(request((3, 15), (3, 20), 2))
            .unwrap()
            .id;

        let cancelled = manager.cancel_booking(&id).unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        assert_eq!(cancelled.net_revenue_cents, 0);
        assert!(cancelled.cancelled_at.is_some());

        // Already cancelled: rejected as an invalid transition
        let err = manager.cancel_booking(&id).unwrap_err();
        assert!(matches!(err, BookingError::InvalidTransition { .. }));
    }

    #[test]
    fn test_cancel_unknown_id() {
        let mut manager = manager();
        let err = manager.cancel_booking("bk-missing").unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }

    #[test]
    fn test_revision_bumps_on_mutation() {
        let mut manager = manager();
        assert_eq!(manager.revision(), 0);

        let id = manager
            .confirm_booking(request((3, 15), (3, 20), 2))
            .unwrap()
            .id;
        assert_eq!(manager.revision(), 1);

        manager.cancel_booking(&id).unwrap();
        assert_eq!(manager.revision(), 2);
    }

    #[test]
    fn test_stats_after_cancellation() {
        let mut manager = manager();
        let keep = manager.confirm_booking(request((3, 15), (3, 20), 2)).unwrap();
        let to_cancel = manager.confirm_booking(request((4, 1), (4, 5), 2)).unwrap();
        manager.cancel_booking(&to_cancel.id).unwrap();

        let stats = manager.stats();
        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.spent_cents, keep.total_price_cents);
    }
}
