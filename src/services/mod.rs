pub mod analytics;
pub mod client;
pub mod search;

pub use analytics::AnalyticsService;
pub use client::{ApiClient, ReviewFilters};
pub use search::{ProductSearchService, SearchSession};
