use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CabinClass {
    Economy,
    Business,
    First,
}

/// One end of a flight segment: where and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightEndpoint {
    pub city: String,
    pub code: String,
    pub time: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub airline_code: String,
    pub from: FlightEndpoint,
    pub to: FlightEndpoint,
    pub duration: String,
    pub stops: u32,
    pub stop_city: Option<String>,
    pub cabin_class: CabinClass,
    /// Per-person fare.
    pub price_cents: i64,
    pub seats_left: i32,
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Transmission {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarRental {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub vehicle_type: String,
    pub seats: u32,
    pub transmission: Transmission,
    /// Per-day rate.
    pub price_cents: i64,
    pub image_url: String,
    pub features: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    pub badge: Option<String>,
}
