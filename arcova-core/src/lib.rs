pub mod repository;
pub mod search;
pub mod session;

pub use repository::{CarRepository, CatalogRepository, FlightRepository};
pub use search::{CarSearchCriteria, FlightSearchCriteria, HotelSearchCriteria};
pub use session::SessionProvider;

/// Abstract fetch failure at the data-access boundary. The engine never
/// retries; callers own backoff policy.
#[derive(Debug, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);
