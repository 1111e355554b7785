use std::sync::atomic::AtomicU64;
use std::sync::Arc;

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod holders;
pub mod models;
pub mod query;
pub mod routers;
pub mod services;

pub use config::{load_config, AppConfig, DataSource};
pub use errors::{ReviewInsightsError, Result};
pub use holders::{ProductCatalogHolder, ReviewHolder};
pub use models::{
    Platform, ProductSearchResult, Review, ReviewsPage, ScrapeJob, ScrapeRequest, Sentiment,
    SentimentStats, TrendData, WordFrequency,
};
pub use query::{ReviewQuery, SortDirection, SortField};
pub use services::{AnalyticsService, ApiClient, ProductSearchService, ReviewFilters, SearchSession};

#[derive(Clone)]
pub struct AppState {
    pub search: ProductSearchService,
    pub analytics: AnalyticsService,
    pub scrape_counter: Arc<AtomicU64>,
    pub words_limit: usize,
}
