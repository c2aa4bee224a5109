use std::sync::Arc;

use arcova_core::{CarRepository, CatalogRepository, FlightRepository};
use arcova_booking::BookingRepository;
use arcova_store::app_config::BusinessRules;
use arcova_store::{
    AuthStore, FixtureBookingRepository, FixtureTravelRepository, StorageBackend, StorageError,
};

/// Everything the planner needs wired together: data-access collaborators,
/// ambient identity, durable client storage, and business rules.
#[derive(Clone)]
pub struct EngineState {
    pub catalog_repo: Arc<dyn CatalogRepository>,
    pub flight_repo: Arc<dyn FlightRepository>,
    pub car_repo: Arc<dyn CarRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub auth: Arc<AuthStore>,
    pub storage: Arc<dyn StorageBackend>,
    pub business_rules: BusinessRules,
}

impl EngineState {
    /// State backed by the fixture inventory; the standard wiring until a
    /// live data service exists.
    pub fn with_fixtures(
        storage: Arc<dyn StorageBackend>,
        business_rules: BusinessRules,
    ) -> Result<Self, StorageError> {
        let travel = Arc::new(FixtureTravelRepository::new());
        let auth = Arc::new(AuthStore::hydrate(storage.clone())?);

        Ok(Self {
            catalog_repo: travel.clone(),
            flight_repo: travel.clone(),
            car_repo: travel,
            booking_repo: Arc::new(FixtureBookingRepository::new()),
            auth,
            storage,
            business_rules,
        })
    }
}
