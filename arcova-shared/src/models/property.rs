use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Active,
    Inactive,
    PendingReview,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoomTypeStatus {
    Active,
    Inactive,
}

/// An inventory listing owned by a host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub host_id: String,
    pub name: String,
    pub description: String,
    pub city: String,
    pub country: String,
    pub address: String,
    pub star_rating: u8,
    pub thumbnail_url: String,
    pub image_urls: Vec<String>,
    pub amenities: Vec<String>,
    pub status: PropertyStatus,
    pub base_price_cents: i64,
    pub total_rooms: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn summary(&self) -> PropertySummary {
        PropertySummary {
            id: self.id.clone(),
            name: self.name.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            star_rating: self.star_rating,
            thumbnail_url: self.thumbnail_url.clone(),
            amenities: self.amenities.clone(),
            status: self.status,
            base_price_cents: self.base_price_cents,
        }
    }
}

/// Projection of a property used in joined views (bookings, dashboards).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySummary {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub star_rating: u8,
    pub thumbnail_url: String,
    pub amenities: Vec<String>,
    pub status: PropertyStatus,
    pub base_price_cents: i64,
}

/// A bookable unit within a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub property_id: String,
    pub name: String,
    pub description: String,
    pub max_guests: u32,
    pub total_rooms: i32,
    pub base_price_cents: i64,
    pub amenities: Vec<String>,
    pub status: RoomTypeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
