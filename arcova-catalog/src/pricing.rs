use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability;
use arcova_shared::RoomType;

/// Calendar-day difference between check-in and check-out. A non-positive
/// result means the selection is incomplete, not that anything failed.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Priced stay breakdown, all in integer cents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub subtotal_cents: i64,
    pub taxes_cents: i64,
    pub total_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat tax rate applied to the stay subtotal.
    pub tax_rate: f64,

    /// Low-inventory display threshold.
    pub scarcity_threshold: i32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.15,
            scarcity_threshold: availability::DEFAULT_SCARCITY_THRESHOLD,
        }
    }
}

/// Turns a (room type, date range) selection into a priced quote and exposes
/// scarcity signals.
pub struct PricingResolver {
    config: PricingConfig,
}

impl PricingResolver {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// `None` when no positive night count is selected yet. Callers must
    /// render that as "no quote", never as a $0 quote.
    pub fn compute_quote(&self, room_type: &RoomType, nights: i64) -> Option<Quote> {
        if nights <= 0 {
            return None;
        }

        let subtotal_cents = room_type.base_price_cents * nights;
        let taxes_cents = round_half_up(subtotal_cents as f64 * self.config.tax_rate);

        Some(Quote {
            subtotal_cents,
            taxes_cents,
            total_cents: subtotal_cents + taxes_cents,
        })
    }

    pub fn is_scarce(&self, room_type: &RoomType) -> bool {
        availability::is_scarce(room_type, self.config.scarcity_threshold)
    }

    /// Rental duration is floored at one day so a same-day (or inverted)
    /// pickup/return can never produce a free rental.
    pub fn car_rental_total(&self, price_per_day_cents: i64, pickup: NaiveDate, ret: NaiveDate) -> i64 {
        price_per_day_cents * nights_between(pickup, ret).max(1)
    }
}

impl Default for PricingResolver {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
