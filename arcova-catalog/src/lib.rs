pub mod availability;
pub mod pricing;
pub mod search;

pub use availability::DEFAULT_SCARCITY_THRESHOLD;
pub use pricing::{nights_between, PricingConfig, PricingResolver, Quote};
pub use search::{soft_filter, CatalogStore, HotelListing, SearchResult};
