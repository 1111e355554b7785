use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::AppConfig;
use crate::errors::{ReviewInsightsError, Result};
use crate::holders::{ProductCatalogHolder, ReviewHolder};
use crate::models::{
    Platform, ProductSearchResult, ReviewsPage, ScrapeJob, Sentiment, SentimentStats, TrendData,
    WordFrequency,
};

const DEFAULT_MAX_RETRIES: usize = 3;
const SEED_PAGE_LIMIT: usize = 500;
const SEED_CONCURRENCY: usize = 4;

/// Query parameters for paginated review retrieval.
#[derive(Debug, Clone, Default)]
pub struct ReviewFilters {
    pub sentiment: Option<Sentiment>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// JSON REST client for the remote analytics backend.
///
/// Transport failures are retried with exponential backoff; non-2xx
/// responses are logged with method, URL, status and body, then propagated
/// to the caller unchanged.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    max_retries: usize,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(ApiClient {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        })
    }

    pub async fn search_products(
        &self,
        query: &str,
        platform: Option<Platform>,
    ) -> Result<Vec<ProductSearchResult>> {
        let mut params = vec![("query", query.to_string())];
        if let Some(platform) = platform {
            params.push(("platform", platform.as_str().to_string()));
        }
        self.get_json("/products/search", &params).await
    }

    pub async fn reviews(&self, product_id: &str, filters: &ReviewFilters) -> Result<ReviewsPage> {
        let mut params = Vec::new();
        if let Some(sentiment) = filters.sentiment {
            params.push(("sentiment", sentiment.as_str().to_string()));
        }
        if let Some(start) = filters.start_date {
            params.push(("startDate", start.to_string()));
        }
        if let Some(end) = filters.end_date {
            params.push(("endDate", end.to_string()));
        }
        if let Some(page) = filters.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = filters.limit {
            params.push(("limit", limit.to_string()));
        }
        self.get_json(&format!("/reviews/{}", product_id), &params)
            .await
    }

    pub async fn sentiment_stats(&self, product_id: &str) -> Result<SentimentStats> {
        self.get_json(&format!("/analytics/sentiment/{}", product_id), &[])
            .await
    }

    pub async fn trend_data(&self, product_id: &str, days: u32) -> Result<Vec<TrendData>> {
        let params = [("days", days.to_string())];
        self.get_json(&format!("/analytics/trends/{}", product_id), &params)
            .await
    }

    pub async fn word_frequency(
        &self,
        product_id: &str,
        sentiment: Option<Sentiment>,
    ) -> Result<Vec<WordFrequency>> {
        let mut params = Vec::new();
        if let Some(sentiment) = sentiment {
            params.push(("sentiment", sentiment.as_str().to_string()));
        }
        self.get_json(&format!("/analytics/words/{}", product_id), &params)
            .await
    }

    /// Submits a scrape job for a product URL and returns its job id.
    pub async fn scrape_reviews(&self, product_url: &str, platform: Platform) -> Result<ScrapeJob> {
        let url = format!("{}/scrape", self.base_url);
        let payload = json!({ "url": product_url, "platform": platform.as_str() });

        let send = || async { self.client.post(&url).json(&payload).send().await };
        let response = send
            .retry(ExponentialBuilder::default().with_max_times(self.max_retries))
            .when(is_transient)
            .notify(|err: &reqwest::Error, delay: Duration| {
                tracing::warn!("POST {} failed, retrying in {:?}: {}", url, delay, err);
            })
            .await
            .map_err(|err| {
                tracing::error!("POST {} transport failure: {}", url, err);
                err
            })?;

        decode("POST", &url, response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let send = || async { self.client.get(&url).query(params).send().await };
        let response = send
            .retry(ExponentialBuilder::default().with_max_times(self.max_retries))
            .when(is_transient)
            .notify(|err: &reqwest::Error, delay: Duration| {
                tracing::warn!("GET {} failed, retrying in {:?}: {}", url, delay, err);
            })
            .await
            .map_err(|err| {
                tracing::error!("GET {} transport failure: {}", url, err);
                err
            })?;

        decode("GET", &url, response).await
    }
}

// Only transport-level failures are retried; a non-2xx response comes back
// as a status, not an error, and is handled in decode.
fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

async fn decode<T: DeserializeOwned>(method: &str, url: &str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::error!("{} {} returned {}: {}", method, url, status, message);
        return Err(ReviewInsightsError::ApiError(format!(
            "{} {}: {}",
            status, url, message
        )));
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(Into::into)
}

/// Seeds the holders from the remote backend: the full catalog first, then
/// the reviews of every product with a few requests in flight at a time.
pub async fn load_remote_data(
    client: &ApiClient,
    catalog: &ProductCatalogHolder,
    reviews: &ReviewHolder,
) -> Result<()> {
    let products = client.search_products("", None).await?;
    if products.is_empty() {
        return Err(ReviewInsightsError::InvalidDataFormat(
            "remote catalog is empty".to_string(),
        ));
    }

    let filters = ReviewFilters {
        limit: Some(SEED_PAGE_LIMIT),
        ..Default::default()
    };
    let pages: Vec<Result<ReviewsPage>> = stream::iter(products.iter().map(|product| {
        let client = client.clone();
        let product_id = product.id.clone();
        let filters = filters.clone();
        async move { client.reviews(&product_id, &filters).await }
    }))
    .buffer_unordered(SEED_CONCURRENCY)
    .collect()
    .await;

    catalog.replace(products).await?;
    reviews.clear().await?;
    for page in pages {
        reviews.extend(page?.reviews).await?;
    }

    let total = reviews.len().await?;
    tracing::info!("seeded {} reviews from remote backend", total);
    Ok(())
}
