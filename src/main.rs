use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use review_insights::routers::create_routes;
use review_insights::services::client::load_remote_data;
use review_insights::{
    fixtures, load_config, AnalyticsService, ApiClient, AppState, DataSource,
    ProductCatalogHolder, ProductSearchService, ReviewHolder,
};

const DEFAULT_WORDS_LIMIT: usize = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("review_insights=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;
    let catalog = ProductCatalogHolder::new();
    let reviews = ReviewHolder::new();

    match config.data_source {
        DataSource::Remote => {
            let client = ApiClient::new(&config)?;
            if let Err(e) = load_remote_data(&client, &catalog, &reviews).await {
                tracing::warn!("remote backend unavailable ({}), using fixtures", e);
                fixtures::seed(&catalog, &reviews).await?;
            }
        }
        DataSource::Fixtures => {
            fixtures::seed(&catalog, &reviews).await?;
        }
    }

    let state = AppState {
        search: ProductSearchService::new(
            catalog.clone(),
            Duration::from_millis(config.search_delay_ms),
        ),
        analytics: AnalyticsService::new(reviews),
        scrape_counter: Arc::new(AtomicU64::new(0)),
        words_limit: config.top_words_limit.unwrap_or(DEFAULT_WORDS_LIMIT),
    };

    let app = create_routes(state);
    tracing::info!("listening on {}", config.bind_address);
    axum::Server::bind(&config.bind_address.parse()?)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
