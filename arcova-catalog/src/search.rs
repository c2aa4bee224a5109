use serde::{Deserialize, Serialize};

use crate::availability;
use arcova_core::{CarSearchCriteria, FlightSearchCriteria, HotelSearchCriteria};
use arcova_shared::{CarRental, Flight, Property, PropertyStatus, RoomType};

/// A property joined with its room types, as loaded from the data service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelListing {
    pub property: Property,
    pub room_types: Vec<RoomType>,
}

/// Per-query projection of a listing and what is currently bookable in it.
/// Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub property: Property,
    pub available_room_types: Vec<RoomType>,
    pub effective_price_cents: i64,
    pub available_rooms: i32,
}

impl SearchResult {
    fn project(listing: &HotelListing) -> Self {
        let available = availability::available_room_types(&listing.room_types);
        let effective_price_cents = availability::effective_price_cents(&available)
            .unwrap_or(listing.property.base_price_cents);
        let available_rooms = availability::available_rooms(&available);

        Self {
            property: listing.property.clone(),
            available_room_types: available,
            effective_price_cents,
            available_rooms,
        }
    }
}

/// Apply `pred` tentatively: commit the narrowing only if at least one item
/// survives, otherwise keep the prior set untouched. A narrower signal that
/// over-constrains must never hand the caller an empty page.
pub fn soft_filter<T, F>(items: Vec<T>, pred: F) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    let matched = items.iter().filter(|item| pred(item)).count();
    if matched == 0 || matched == items.len() {
        return items;
    }
    items.into_iter().filter(|item| pred(item)).collect()
}

/// Answers filtered queries over the three independent inventories. Queries
/// are pure and total: they degrade to fewer (or unfiltered) results, never
/// to an error.
pub struct CatalogStore {
    hotels: Vec<HotelListing>,
    flights: Vec<Flight>,
    cars: Vec<CarRental>,
}

impl CatalogStore {
    pub fn new(hotels: Vec<HotelListing>, flights: Vec<Flight>, cars: Vec<CarRental>) -> Self {
        Self { hotels, flights, cars }
    }

    /// Hard-filtered hotel search. Unset criteria fields never narrow;
    /// empty criteria returns the full active catalog.
    pub fn search_hotels(&self, criteria: &HotelSearchCriteria) -> Vec<SearchResult> {
        let results: Vec<SearchResult> = self
            .hotels
            .iter()
            .filter(|listing| listing.property.status == PropertyStatus::Active)
            .map(SearchResult::project)
            .filter(|result| Self::matches_hotel(result, criteria))
            .collect();

        tracing::debug!(count = results.len(), "hotel search completed");
        results
    }

    fn matches_hotel(result: &SearchResult, criteria: &HotelSearchCriteria) -> bool {
        if let Some(dest) = &criteria.destination {
            let dest = dest.to_lowercase();
            let property = &result.property;
            let hit = property.city.to_lowercase().contains(&dest)
                || property.country.to_lowercase().contains(&dest)
                || property.name.to_lowercase().contains(&dest);
            if !hit {
                return false;
            }
        }

        if let Some(stars) = &criteria.stars {
            if !stars.is_empty() && !stars.contains(&result.property.star_rating) {
                return false;
            }
        }

        if let Some(guests) = criteria.guests {
            let fits = result
                .available_room_types
                .iter()
                .any(|rt| rt.max_guests >= guests);
            if !fits {
                return false;
            }
        }

        true
    }

    /// Lookup by property id. Absent is an ordinary result, not an error.
    pub fn hotel_detail(&self, property_id: &str) -> Option<SearchResult> {
        self.hotels
            .iter()
            .find(|listing| listing.property.id == property_id)
            .map(SearchResult::project)
    }

    /// Soft-filtered flight search: each field narrows only when it leaves
    /// at least one flight standing.
    pub fn search_flights(&self, criteria: &FlightSearchCriteria) -> Vec<Flight> {
        let mut results = self.flights.clone();

        if let Some(origin) = &criteria.origin {
            let origin = origin.to_lowercase();
            results = soft_filter(results, |f| {
                f.from.city.to_lowercase().contains(&origin)
                    || f.from.code.to_lowercase().contains(&origin)
            });
        }

        if let Some(dest) = &criteria.destination {
            let dest = dest.to_lowercase();
            results = soft_filter(results, |f| {
                f.to.city.to_lowercase().contains(&dest)
                    || f.to.code.to_lowercase().contains(&dest)
            });
        }

        if let Some(cabin) = criteria.cabin_class {
            results = soft_filter(results, |f| f.cabin_class == cabin);
        }

        results
    }

    /// Soft-filtered car search. Location is accepted but does not narrow:
    /// the fixture fleet is available everywhere until a live inventory
    /// backend replaces it.
    pub fn search_cars(&self, criteria: &CarSearchCriteria) -> Vec<CarRental> {
        let mut results = self.cars.clone();

        if let Some(vehicle_type) = &criteria.vehicle_type {
            let vehicle_type = vehicle_type.to_lowercase();
            results = soft_filter(results, |c| {
                c.vehicle_type.to_lowercase().contains(&vehicle_type)
            });
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcova_shared::{CabinClass, FlightEndpoint, RoomTypeStatus};
    use chrono::Utc;

    fn property(id: &str, name: &str, city: &str, country: &str, stars: u8) -> Property {
        Property {
            id: id.to_string(),
            host_id: "host-1".to_string(),
            name: name.to_string(),
            description: String::new(),
            city: city.to_string(),
            country: country.to_string(),
            address: String::new(),
            star_rating: stars,
            thumbnail_url: String::new(),
            image_urls: vec![],
            amenities: vec![],
            status: PropertyStatus::Active,
            base_price_cents: 40000,
            total_rooms: 20,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn room(id: &str, property_id: &str, max_guests: u32, price: i64) -> RoomType {
        RoomType {
            id: id.to_string(),
            property_id: property_id.to_string(),
            name: "Room".to_string(),
            description: String::new(),
            max_guests,
            total_rooms: 8,
            base_price_cents: price,
            amenities: vec![],
            status: RoomTypeStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn flight(id: &str, from_city: &str, from_code: &str, to_city: &str, to_code: &str, cabin: CabinClass) -> Flight {
        Flight {
            id: id.to_string(),
            airline: "Testair".to_string(),
            airline_code: "TA".to_string(),
            from: FlightEndpoint {
                city: from_city.to_string(),
                code: from_code.to_string(),
                time: "09:00".to_string(),
                date: "Mar 15".to_string(),
            },
            to: FlightEndpoint {
                city: to_city.to_string(),
                code: to_code.to_string(),
                time: "14:00".to_string(),
                date: "Mar 15".to_string(),
            },
            duration: "5h 0m".to_string(),
            stops: 0,
            stop_city: None,
            cabin_class: cabin,
            price_cents: 62000,
            seats_left: 10,
            badge: None,
        }
    }

    fn store() -> CatalogStore {
        let hotels = vec![
            HotelListing {
                property: property("prop-1", "Santorini Clifftop Resort", "Oia", "Greece", 5),
                room_types: vec![room("rt-1a", "prop-1", 2, 79000)],
            },
            HotelListing {
                property: property("prop-2", "Alpine Lodge Zermatt", "Zermatt", "Switzerland", 4),
                room_types: vec![room("rt-2a", "prop-2", 1, 42000)],
            },
        ];
        let flights = vec![
            flight("fl-1", "New York", "JFK", "Venice", "VCE", CabinClass::Economy),
            flight("fl-2", "London", "LHR", "Santorini", "JTR", CabinClass::Business),
        ];
        let cars = vec![];
        CatalogStore::new(hotels, flights, cars)
    }

    #[test]
    fn test_destination_matches_any_field() {
        let store = store();

        // Matches property name even though no city/country contains it
        let by_name = store.search_hotels(&HotelSearchCriteria::destination("santorini"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].property.id, "prop-1");

        let by_country = store.search_hotels(&HotelSearchCriteria::destination("switzerland"));
        assert_eq!(by_country.len(), 1);
        assert_eq!(by_country[0].property.id, "prop-2");
    }

    #[test]
    fn test_empty_criteria_returns_full_catalog() {
        let store = store();
        let results = store.search_hotels(&HotelSearchCriteria::default());
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_guest_filter_uses_any_room_type() {
        let store = store();
        let criteria = HotelSearchCriteria {
            guests: Some(2),
            ..Default::default()
        };
        let results = store.search_hotels(&criteria);

        // prop-2 only sleeps 1, so it drops out of the guest-filtered search
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].property.id, "prop-1");

        // ...but is still present without the guest filter
        assert_eq!(store.search_hotels(&HotelSearchCriteria::default()).len(), 2);
    }

    #[test]
    fn test_star_filter_membership() {
        let store = store();
        let criteria = HotelSearchCriteria {
            stars: Some(vec![4]),
            ..Default::default()
        };
        let results = store.search_hotels(&criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].property.star_rating, 4);
    }

    #[test]
    fn test_soft_filter_fallback_keeps_full_set() {
        let store = store();
        let criteria = FlightSearchCriteria {
            destination: Some("Ulaanbaatar".to_string()),
            ..Default::default()
        };

        // Nothing flies there, so the destination stage is skipped entirely
        let results = store.search_flights(&criteria);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_soft_filter_commits_when_non_empty() {
        let store = store();
        let criteria = FlightSearchCriteria {
            destination: Some("JTR".to_string()),
            ..Default::default()
        };
        let results = store.search_flights(&criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "fl-2");
    }

    #[test]
    fn test_soft_filter_stages_compose() {
        let store = store();
        let criteria = FlightSearchCriteria {
            origin: Some("London".to_string()),
            cabin_class: Some(CabinClass::First),
            ..Default::default()
        };

        // Origin commits (fl-2), cabin class would empty the set and is skipped
        let results = store.search_flights(&criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "fl-2");
    }

    #[test]
    fn test_hotel_detail_absent_is_none() {
        let store = store();
        assert!(store.hotel_detail("prop-1").is_some());
        assert!(store.hotel_detail("prop-404").is_none());
    }
}
