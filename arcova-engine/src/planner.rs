use serde::Serialize;

use crate::state::EngineState;
use arcova_booking::{BookingError, BookingManager, StayRequest, TravellerStats};
use arcova_catalog::{
    nights_between, CatalogStore, HotelListing, PricingConfig, PricingResolver, Quote,
    SearchResult,
};
use arcova_core::{
    CarSearchCriteria, FlightSearchCriteria, HotelSearchCriteria, SessionProvider, TransportError,
};
use arcova_shared::{CarRental, Flight, TripItem, TripItemKind};
use arcova_store::StorageError;
use arcova_trip::{AuthGateCoordinator, GateState, TripStore};
use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// Search responses echo the criteria that produced them. Queries race
/// freely; a consumer keeps a response only when its criteria match the
/// latest query it issued (last-applied-wins).
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<C, T> {
    pub criteria: C,
    pub results: Vec<T>,
}

pub type HotelSearchResponse = SearchResponse<HotelSearchCriteria, SearchResult>;
pub type FlightSearchResponse = SearchResponse<FlightSearchCriteria, Flight>;
pub type CarSearchResponse = SearchResponse<CarSearchCriteria, CarRental>;

/// Facade over the whole engine: catalog queries, quoting, the gated trip
/// cart, and the traveller's bookings.
pub struct TripPlanner {
    catalog: CatalogStore,
    resolver: PricingResolver,
    trip: TripStore,
    gate: AuthGateCoordinator,
    bookings: BookingManager,
    state: EngineState,
}

impl TripPlanner {
    /// Load the catalog from the data service, hydrate the cart from
    /// durable storage, and fetch the signed-in traveller's bookings.
    pub async fn initialize(state: EngineState) -> Result<Self, EngineError> {
        let pricing_config = PricingConfig {
            tax_rate: state.business_rules.tax_rate,
            scarcity_threshold: state.business_rules.scarcity_threshold,
        };

        let properties = state.catalog_repo.fetch_hotel_catalog().await?;
        let mut hotels = Vec::with_capacity(properties.len());
        for property in properties {
            let room_types = state.catalog_repo.fetch_room_types(&property.id).await?;
            hotels.push(HotelListing { property, room_types });
        }
        let flights = state.flight_repo.fetch_flights().await?;
        let cars = state.car_repo.fetch_cars().await?;
        tracing::info!(
            hotels = hotels.len(),
            flights = flights.len(),
            cars = cars.len(),
            "catalog loaded"
        );

        let trip = TripStore::hydrate(state.storage.clone())?;
        let gate = AuthGateCoordinator::new(state.auth.clone());

        let bookings = match state.auth.current_session() {
            Some(session) => {
                BookingManager::load(
                    state.booking_repo.as_ref(),
                    &session.user_id,
                    PricingResolver::new(pricing_config.clone()),
                    state.business_rules.commission_rate,
                )
                .await?
            }
            None => BookingManager::new(
                PricingResolver::new(pricing_config.clone()),
                state.business_rules.commission_rate,
            ),
        };

        Ok(Self {
            catalog: CatalogStore::new(hotels, flights, cars),
            resolver: PricingResolver::new(pricing_config),
            trip,
            gate,
            bookings,
            state,
        })
    }

    // ── Catalog queries ──────────────────────────────────────────────

    pub fn search_hotels(&self, criteria: HotelSearchCriteria) -> HotelSearchResponse {
        let results = self.catalog.search_hotels(&criteria);
        SearchResponse { criteria, results }
    }

    pub fn search_flights(&self, criteria: FlightSearchCriteria) -> FlightSearchResponse {
        let results = self.catalog.search_flights(&criteria);
        SearchResponse { criteria, results }
    }

    pub fn search_cars(&self, criteria: CarSearchCriteria) -> CarSearchResponse {
        let results = self.catalog.search_cars(&criteria);
        SearchResponse { criteria, results }
    }

    pub fn hotel_detail(&self, property_id: &str) -> Option<SearchResult> {
        self.catalog.hotel_detail(property_id)
    }

    // ── Quoting ──────────────────────────────────────────────────────

    /// `None` until the selection is complete: a known room type and a
    /// positive night count.
    pub fn quote_stay(
        &self,
        property_id: &str,
        room_type_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Option<Quote> {
        let detail = self.hotel_detail(property_id)?;
        let room_type = detail
            .available_room_types
            .iter()
            .find(|rt| rt.id == room_type_id)?;
        self.resolver
            .compute_quote(room_type, nights_between(check_in, check_out))
    }

    pub fn resolver(&self) -> &PricingResolver {
        &self.resolver
    }

    // ── Trip cart ────────────────────────────────────────────────────

    /// Gate-aware add of a hotel stay; the cart line carries the per-night
    /// effective price.
    pub fn add_stay_to_trip(&mut self, result: &SearchResult) -> Result<GateState, EngineError> {
        let item = stay_item(result);
        Ok(self.gate.request_add(&mut self.trip, item)?)
    }

    pub fn add_flight_to_trip(&mut self, flight: &Flight) -> Result<GateState, EngineError> {
        let item = flight_item(flight);
        Ok(self.gate.request_add(&mut self.trip, item)?)
    }

    /// Car cart lines are pre-multiplied by the rental duration.
    pub fn add_car_to_trip(
        &mut self,
        car: &CarRental,
        pickup: NaiveDate,
        ret: NaiveDate,
    ) -> Result<GateState, EngineError> {
        let total = self.resolver.car_rental_total(car.price_cents, pickup, ret);
        let item = car_item(car, total);
        Ok(self.gate.request_add(&mut self.trip, item)?)
    }

    pub fn remove_from_trip(&mut self, id: &str) -> Result<bool, EngineError> {
        Ok(self.trip.remove_item(id)?)
    }

    pub fn clear_trip(&mut self) -> Result<(), EngineError> {
        Ok(self.trip.clear_trip()?)
    }

    pub fn trip(&self) -> &TripStore {
        &self.trip
    }

    pub fn dismiss_gate(&mut self) -> Result<GateState, EngineError> {
        Ok(self.gate.dismiss(&mut self.trip)?)
    }

    /// Reactive hook for authentication changes: replays any gated add and
    /// reloads the traveller's booking history.
    pub async fn on_session_changed(&mut self) -> Result<GateState, EngineError> {
        let gate_state = self.gate.session_changed(&mut self.trip)?;

        let pricing_config = PricingConfig {
            tax_rate: self.state.business_rules.tax_rate,
            scarcity_threshold: self.state.business_rules.scarcity_threshold,
        };
        self.bookings = match self.state.auth.current_session() {
            Some(session) => {
                BookingManager::load(
                    self.state.booking_repo.as_ref(),
                    &session.user_id,
                    PricingResolver::new(pricing_config),
                    self.state.business_rules.commission_rate,
                )
                .await?
            }
            None => BookingManager::new(
                PricingResolver::new(pricing_config),
                self.state.business_rules.commission_rate,
            ),
        };

        Ok(gate_state)
    }

    // ── Bookings ─────────────────────────────────────────────────────

    pub fn bookings(&self) -> &BookingManager {
        &self.bookings
    }

    pub fn confirm_booking(
        &mut self,
        request: StayRequest,
    ) -> Result<arcova_booking::Booking, EngineError> {
        Ok(self.bookings.confirm_booking(request)?)
    }

    pub fn cancel_booking(&mut self, id: &str) -> Result<(), EngineError> {
        self.bookings.cancel_booking(id)?;
        Ok(())
    }

    pub fn traveller_stats(&self) -> TravellerStats {
        self.bookings.stats()
    }
}

/// Cart line for a hotel stay: per-night effective price, keyed by the
/// property id.
pub fn stay_item(result: &SearchResult) -> TripItem {
    TripItem {
        id: result.property.id.clone(),
        kind: TripItemKind::Hotel,
        name: result.property.name.clone(),
        subtitle: format!("{}, {}", result.property.city, result.property.country),
        price_cents: result.effective_price_cents,
        image_url: Some(result.property.thumbnail_url.clone()),
    }
}

/// Cart line for a flight: per-person fare, keyed by the flight id.
pub fn flight_item(flight: &Flight) -> TripItem {
    TripItem {
        id: flight.id.clone(),
        kind: TripItemKind::Flight,
        name: format!("{} {}", flight.airline, flight.airline_code),
        subtitle: format!("{} → {}", flight.from.code, flight.to.code),
        price_cents: flight.price_cents,
        image_url: None,
    }
}

/// Cart line for a car rental: total for the whole rental, keyed by the
/// car id.
pub fn car_item(car: &CarRental, total_cents: i64) -> TripItem {
    TripItem {
        id: car.id.clone(),
        kind: TripItemKind::Car,
        name: format!("{} {}", car.brand, car.model),
        subtitle: car.vehicle_type.clone(),
        price_cents: total_cents,
        image_url: Some(car.image_url.clone()),
    }
}
