//! Deterministic in-memory inventory standing in for the data service until
//! a live backend is wired. No artificial latency: latency belongs to a real
//! transport, never here.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use arcova_booking::models::RoomTypeSummary;
use arcova_booking::{Booking, BookingStatus};
use arcova_shared::{
    CabinClass, CarRental, Flight, FlightEndpoint, Property, PropertyStatus, PropertySummary,
    RoomType, RoomTypeStatus, Transmission,
};

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn property(
    id: &str,
    host_id: &str,
    name: &str,
    description: &str,
    city: &str,
    country: &str,
    address: &str,
    star_rating: u8,
    amenities: &[&str],
    base_price_cents: i64,
    total_rooms: i32,
) -> Property {
    Property {
        id: id.to_string(),
        host_id: host_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        address: address.to_string(),
        star_rating,
        thumbnail_url: format!("https://cdn.arcova.example/properties/{id}/thumb.jpg"),
        image_urls: vec![format!("https://cdn.arcova.example/properties/{id}/hero.jpg")],
        amenities: strings(amenities),
        status: PropertyStatus::Active,
        base_price_cents,
        total_rooms,
        created_at: seeded_at(),
        updated_at: seeded_at(),
    }
}

#[allow(clippy::too_many_arguments)]
fn room_type(
    id: &str,
    property_id: &str,
    name: &str,
    description: &str,
    max_guests: u32,
    total_rooms: i32,
    base_price_cents: i64,
    amenities: &[&str],
) -> RoomType {
    RoomType {
        id: id.to_string(),
        property_id: property_id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        max_guests,
        total_rooms,
        base_price_cents,
        amenities: strings(amenities),
        status: RoomTypeStatus::Active,
        created_at: seeded_at(),
        updated_at: seeded_at(),
    }
}

pub fn properties() -> Vec<Property> {
    vec![
        property(
            "prop-1",
            "host-1",
            "The Grand Palazzo",
            "An iconic 5-star palazzo on the Grand Canal offering unparalleled views of Venice.",
            "Venice",
            "Italy",
            "Riva degli Schiavoni, 4196, Venice",
            5,
            &["wifi", "spa", "restaurant", "bar", "concierge", "room_service"],
            45000,
            48,
        ),
        property(
            "prop-2",
            "host-2",
            "Santorini Clifftop Resort",
            "Perched on the volcanic cliffs of Oia, whitewashed suites with private plunge pools.",
            "Oia",
            "Greece",
            "Oia, Santorini 847 02, Greece",
            5,
            &["wifi", "pool", "spa", "restaurant", "concierge", "airport_shuttle"],
            79000,
            32,
        ),
        property(
            "prop-3",
            "host-1",
            "Maldives Water Villa",
            "Overwater villas suspended above turquoise lagoons, glass floors over the reef.",
            "Malé Atoll",
            "Maldives",
            "North Malé Atoll, Maldives",
            5,
            &["wifi", "pool", "spa", "restaurant", "beach_access", "room_service", "concierge"],
            128000,
            20,
        ),
        property(
            "prop-4",
            "host-2",
            "Alpine Lodge Zermatt",
            "A timber-clad chalet at the foot of the Matterhorn.",
            "Zermatt",
            "Switzerland",
            "Bahnhofstrasse 25, 3920 Zermatt",
            4,
            &["wifi", "spa", "restaurant", "gym", "parking", "airport_shuttle"],
            42000,
            38,
        ),
        property(
            "prop-5",
            "host-1",
            "Kyoto Zen Ryokan",
            "A traditional Japanese inn steps from the Philosopher's Path.",
            "Kyoto",
            "Japan",
            "Higashiyama-ku, Kyoto 605-0001",
            4,
            &["wifi", "spa", "restaurant", "room_service"],
            39000,
            16,
        ),
        property(
            "prop-6",
            "host-2",
            "Marrakech Riad Royale",
            "A restored 17th-century riad behind the medina walls, rooftop pool with Atlas views.",
            "Marrakech",
            "Morocco",
            "Derb Assehbi, Mouassine, Marrakech Medina",
            4,
            &["wifi", "pool", "spa", "restaurant", "concierge"],
            22000,
            12,
        ),
    ]
}

pub fn room_types() -> Vec<RoomType> {
    vec![
        room_type(
            "rt-1a",
            "prop-1",
            "Classic Room",
            "Elegantly appointed room with courtyard views.",
            2,
            12,
            45000,
            &["wifi", "minibar", "safe"],
        ),
        room_type(
            "rt-1b",
            "prop-1",
            "Deluxe Canal Suite",
            "Spacious suite with panoramic Grand Canal views.",
            2,
            8,
            65000,
            &["wifi", "minibar", "safe", "butler"],
        ),
        room_type(
            "rt-2a",
            "prop-2",
            "Caldera Suite",
            "Sweeping views of the caldera with private terrace.",
            2,
            10,
            79000,
            &["wifi", "plunge_pool", "minibar"],
        ),
        room_type(
            "rt-3a",
            "prop-3",
            "Overwater Bungalow",
            "Private deck with direct lagoon access and glass floor.",
            2,
            12,
            128000,
            &["wifi", "pool", "minibar", "butler"],
        ),
        room_type(
            "rt-4a",
            "prop-4",
            "Mountain View Room",
            "Cosy timber room with Matterhorn views.",
            2,
            14,
            42000,
            &["wifi", "minibar"],
        ),
        room_type(
            "rt-4b",
            "prop-4",
            "Junior Suite",
            "Spacious suite with separate sitting area and balcony.",
            3,
            8,
            72000,
            &["wifi", "minibar", "balcony"],
        ),
        room_type(
            "rt-5a",
            "prop-5",
            "Traditional Tatami Room",
            "Authentic tatami room with garden views.",
            2,
            8,
            39000,
            &["wifi", "yukata"],
        ),
        room_type(
            "rt-6a",
            "prop-6",
            "Signature Suite",
            "Lavishly decorated suite with private courtyard access.",
            2,
            4,
            22000,
            &["wifi", "minibar"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn flight(
    id: &str,
    airline: &str,
    airline_code: &str,
    from: (&str, &str, &str, &str),
    to: (&str, &str, &str, &str),
    duration: &str,
    stops: u32,
    stop_city: Option<&str>,
    cabin_class: CabinClass,
    price_cents: i64,
    seats_left: i32,
    badge: Option<&str>,
) -> Flight {
    let endpoint = |(city, code, time, date): (&str, &str, &str, &str)| FlightEndpoint {
        city: city.to_string(),
        code: code.to_string(),
        time: time.to_string(),
        date: date.to_string(),
    };

    Flight {
        id: id.to_string(),
        airline: airline.to_string(),
        airline_code: airline_code.to_string(),
        from: endpoint(from),
        to: endpoint(to),
        duration: duration.to_string(),
        stops,
        stop_city: stop_city.map(str::to_string),
        cabin_class,
        price_cents,
        seats_left,
        badge: badge.map(str::to_string),
    }
}

pub fn flights() -> Vec<Flight> {
    vec![
        flight(
            "fl-1",
            "Emirates",
            "EK",
            ("New York", "JFK", "09:15", "Mar 15"),
            ("Venice", "VCE", "06:40", "Mar 16"),
            "9h 25m",
            1,
            Some("Dubai"),
            CabinClass::Economy,
            84000,
            4,
            Some("Popular"),
        ),
        flight(
            "fl-2",
            "Lufthansa",
            "LH",
            ("London", "LHR", "11:30", "Mar 15"),
            ("Santorini", "JTR", "16:45", "Mar 15"),
            "3h 15m",
            0,
            None,
            CabinClass::Business,
            189000,
            2,
            Some("Last 2 seats"),
        ),
        flight(
            "fl-3",
            "Air France",
            "AF",
            ("New York", "JFK", "22:45", "Mar 14"),
            ("Paris", "CDG", "12:30", "Mar 15"),
            "7h 45m",
            0,
            None,
            CabinClass::Economy,
            62000,
            12,
            None,
        ),
        flight(
            "fl-4",
            "Singapore Airlines",
            "SQ",
            ("London", "LHR", "08:00", "Mar 15"),
            ("Maldives", "MLE", "04:15", "Mar 16"),
            "11h 15m",
            1,
            Some("Singapore"),
            CabinClass::First,
            420000,
            1,
            Some("Luxury Pick"),
        ),
        flight(
            "fl-5",
            "Japan Airlines",
            "JL",
            ("Los Angeles", "LAX", "14:00", "Mar 15"),
            ("Kyoto", "KIX", "18:30", "Mar 16"),
            "11h 30m",
            0,
            None,
            CabinClass::Business,
            248000,
            6,
            Some("Best Value"),
        ),
        flight(
            "fl-6",
            "Royal Air Maroc",
            "AT",
            ("Paris", "CDG", "07:20", "Mar 15"),
            ("Marrakech", "RAK", "10:05", "Mar 15"),
            "2h 45m",
            0,
            None,
            CabinClass::Economy,
            28000,
            18,
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn car(
    id: &str,
    brand: &str,
    model: &str,
    vehicle_type: &str,
    seats: u32,
    transmission: Transmission,
    price_cents: i64,
    features: &[&str],
    rating: f64,
    reviews: u32,
    badge: Option<&str>,
) -> CarRental {
    CarRental {
        id: id.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        vehicle_type: vehicle_type.to_string(),
        seats,
        transmission,
        price_cents,
        image_url: format!("https://cdn.arcova.example/cars/{id}.jpg"),
        features: strings(features),
        rating,
        reviews,
        badge: badge.map(str::to_string),
    }
}

pub fn cars() -> Vec<CarRental> {
    vec![
        car(
            "car-1",
            "Mercedes-Benz",
            "E-Class",
            "Luxury Sedan",
            5,
            Transmission::Automatic,
            18900,
            &["AC", "GPS", "Bluetooth", "Unlimited KM"],
            4.8,
            124,
            Some("Best Value"),
        ),
        car(
            "car-2",
            "Porsche",
            "911 Carrera",
            "Sports Car",
            2,
            Transmission::Automatic,
            48000,
            &["AC", "GPS", "Sport Mode", "Premium Sound"],
            4.9,
            67,
            Some("Luxury Pick"),
        ),
        car(
            "car-3",
            "BMW",
            "X5",
            "Premium SUV",
            7,
            Transmission::Automatic,
            24500,
            &["AC", "GPS", "AWD", "Child Seat Available"],
            4.7,
            213,
            None,
        ),
        car(
            "car-4",
            "Tesla",
            "Model 3",
            "Electric Sedan",
            5,
            Transmission::Automatic,
            15900,
            &["Autopilot", "Zero Emission", "GPS", "Supercharger Access"],
            4.6,
            89,
            Some("Eco Choice"),
        ),
        car(
            "car-5",
            "Range Rover",
            "Velar",
            "Luxury SUV",
            5,
            Transmission::Automatic,
            35000,
            &["AC", "GPS", "Panoramic Roof", "Leather Seats"],
            4.9,
            45,
            None,
        ),
        car(
            "car-6",
            "Fiat",
            "500 Convertible",
            "Compact",
            4,
            Transmission::Manual,
            8900,
            &["AC", "Bluetooth", "Convertible Top", "Compact"],
            4.4,
            156,
            Some("Most Popular"),
        ),
    ]
}

fn summary_for(property_id: &str) -> PropertySummary {
    properties()
        .into_iter()
        .find(|p| p.id == property_id)
        .map(|p| p.summary())
        .expect("fixture property exists")
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    property_id: &str,
    room_type: (&str, &str, u32),
    check_in: (i32, u32, u32),
    check_out: (i32, u32, u32),
    guests: u32,
    status: BookingStatus,
    total_price_cents: i64,
    net_revenue_cents: i64,
    booked_at: (i32, u32, u32),
    cancelled_at: Option<(i32, u32, u32)>,
) -> Booking {
    let date = |(y, m, d): (i32, u32, u32)| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let instant =
        |(y, m, d): (i32, u32, u32)| Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
    let check_in = date(check_in);
    let check_out = date(check_out);

    Booking {
        id: id.to_string(),
        traveller_id: "usr-1".to_string(),
        property_id: property_id.to_string(),
        room_type_id: room_type.0.to_string(),
        check_in,
        check_out,
        nights: (check_out - check_in).num_days(),
        guests,
        status,
        total_price_cents,
        net_revenue_cents,
        booked_at: instant(booked_at),
        cancelled_at: cancelled_at.map(instant),
        property: Some(summary_for(property_id)),
        room_type: Some(RoomTypeSummary {
            id: room_type.0.to_string(),
            name: room_type.1.to_string(),
            max_guests: room_type.2,
        }),
    }
}

pub fn bookings() -> Vec<Booking> {
    vec![
        booking(
            "bk-001",
            "prop-1",
            ("rt-1b", "Deluxe Canal Suite", 2),
            (2026, 3, 15),
            (2026, 3, 20),
            2,
            BookingStatus::Confirmed,
            325000,
            276250,
            (2026, 2, 10),
            None,
        ),
        booking(
            "bk-002",
            "prop-2",
            ("rt-2a", "Caldera Suite", 2),
            (2026, 4, 22),
            (2026, 4, 28),
            2,
            BookingStatus::Confirmed,
            478000,
            406300,
            (2026, 2, 15),
            None,
        ),
        booking(
            "bk-003",
            "prop-3",
            ("rt-3a", "Overwater Bungalow", 2),
            (2026, 5, 1),
            (2026, 5, 8),
            2,
            BookingStatus::Confirmed,
            895000,
            760750,
            (2026, 2, 20),
            None,
        ),
        booking(
            "bk-004",
            "prop-4",
            ("rt-4b", "Junior Suite", 3),
            (2026, 1, 10),
            (2026, 1, 14),
            3,
            BookingStatus::Completed,
            289600,
            246160,
            (2025, 12, 5),
            None,
        ),
        booking(
            "bk-005",
            "prop-5",
            ("rt-5a", "Traditional Tatami Room", 2),
            (2025, 11, 20),
            (2025, 11, 25),
            2,
            BookingStatus::Completed,
            195000,
            165750,
            (2025, 10, 15),
            None,
        ),
        booking(
            "bk-006",
            "prop-6",
            ("rt-6a", "Signature Suite", 2),
            (2025, 8, 12),
            (2025, 8, 16),
            1,
            BookingStatus::Cancelled,
            112000,
            0,
            (2025, 7, 20),
            Some((2025, 7, 25)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_base_price_is_minimum_room_price() {
        let rooms = room_types();
        for property in properties() {
            let min = rooms
                .iter()
                .filter(|rt| rt.property_id == property.id)
                .map(|rt| rt.base_price_cents)
                .min();
            if let Some(min) = min {
                assert_eq!(
                    property.base_price_cents, min,
                    "{} base price must equal its cheapest room",
                    property.id
                );
            }
        }
    }

    #[test]
    fn test_cancelled_fixture_has_no_net_revenue() {
        let cancelled: Vec<_> = bookings()
            .into_iter()
            .filter(|b| b.status == BookingStatus::Cancelled)
            .collect();
        assert!(!cancelled.is_empty());
        for b in cancelled {
            assert_eq!(b.net_revenue_cents, 0);
            assert!(b.cancelled_at.is_some());
        }
    }

    #[test]
    fn test_nights_are_consistent() {
        for b in bookings() {
            assert!(b.nights > 0);
            assert_eq!((b.check_out - b.check_in).num_days(), b.nights);
        }
    }
}
