use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arcova_core::HotelSearchCriteria;
use arcova_engine::{EngineState, TripPlanner};
use arcova_shared::display::format_currency;
use arcova_store::app_config::Config;
use arcova_store::{JsonFileStore, StorageBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arcova_engine=debug,arcova_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("failed to load config")?;
    tracing::info!(data_dir = %config.storage.data_dir, "starting Arcova trip planner");

    let storage: Arc<dyn StorageBackend> =
        Arc::new(JsonFileStore::new(&config.storage.data_dir)?);
    let state = EngineState::with_fixtures(storage, config.business_rules)?;
    let planner = TripPlanner::initialize(state).await?;

    let response = planner.search_hotels(HotelSearchCriteria::destination("Santorini"));
    println!("Stays matching \"Santorini\":");
    for result in &response.results {
        println!(
            "  {} ({}, {}) from {}/night, {} rooms available",
            result.property.name,
            result.property.city,
            result.property.country,
            format_currency(result.effective_price_cents),
            result.available_rooms,
        );
    }

    let stats = planner.traveller_stats();
    println!(
        "Bookings: {} upcoming of {} total, {} spent",
        stats.upcoming,
        stats.total,
        format_currency(stats.spent_cents),
    );

    Ok(())
}
