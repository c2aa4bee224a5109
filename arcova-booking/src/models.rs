use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use arcova_shared::{PropertySummary, RoomType};

/// `Confirmed` is the only live state; every transition out of it is
/// terminal. Bookings are never deleted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no_show",
        };
        f.write_str(s)
    }
}

/// Room-type projection carried on a joined booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeSummary {
    pub id: String,
    pub name: String,
    pub max_guests: u32,
}

impl RoomTypeSummary {
    pub fn of(room_type: &RoomType) -> Self {
        Self {
            id: room_type.id.clone(),
            name: room_type.name.clone(),
            max_guests: room_type.max_guests,
        }
    }
}

/// A confirmed reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub traveller_id: String,
    pub property_id: String,
    pub room_type_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub guests: u32,
    pub status: BookingStatus,
    pub total_price_cents: i64,
    /// Total minus platform commission. Zeroed on cancellation.
    pub net_revenue_cents: i64,
    pub booked_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub property: Option<PropertySummary>,
    pub room_type: Option<RoomTypeSummary>,
}

/// Input to booking confirmation: the stay the traveller selected.
#[derive(Debug, Clone)]
pub struct StayRequest {
    pub traveller_id: String,
    pub property: PropertySummary,
    pub room_type: RoomType,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

/// Traveller dashboard KPIs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TravellerStats {
    pub upcoming: usize,
    pub total: usize,
    pub spent_cents: i64,
}

/// Cancelled bookings contribute nothing to spend, regardless of their
/// nominal price.
pub fn traveller_stats(bookings: &[Booking]) -> TravellerStats {
    let upcoming = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .count();
    let spent_cents = bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .map(|b| b.total_price_cents)
        .sum();

    TravellerStats {
        upcoming,
        total: bookings.len(),
        spent_cents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, total: i64, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            traveller_id: "usr-1".to_string(),
            property_id: "prop-1".to_string(),
            room_type_id: "rt-1".to_string(),
            check_in: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            nights: 5,
            guests: 2,
            status,
            total_price_cents: total,
            net_revenue_cents: total,
            booked_at: Utc::now(),
            cancelled_at: None,
            property: None,
            room_type: None,
        }
    }

    #[test]
    fn test_spend_excludes_cancelled() {
        let bookings = vec![
            booking("bk-1", 300, BookingStatus::Confirmed),
            booking("bk-2", 200, BookingStatus::Cancelled),
        ];
        let stats = traveller_stats(&bookings);
        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.spent_cents, 300);
    }

    #[test]
    fn test_completed_counts_toward_spend_not_upcoming() {
        let bookings = vec![
            booking("bk-1", 500, BookingStatus::Completed),
            booking("bk-2", 300, BookingStatus::Confirmed),
        ];
        let stats = traveller_stats(&bookings);
        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.spent_cents, 800);
    }
}
