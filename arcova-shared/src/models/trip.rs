use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripItemKind {
    Hotel,
    Flight,
    Car,
}

/// One line of an in-progress trip. The id must equal the source entity's id;
/// the cart deduplicates on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripItem {
    pub id: String,
    pub kind: TripItemKind,
    pub name: String,
    pub subtitle: String,
    /// Hotels: per-night. Cars: pre-multiplied by rental days. Flights: per-person.
    pub price_cents: i64,
    pub image_url: Option<String>,
}
