use std::sync::atomic::Ordering;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::errors::ReviewInsightsError;
use crate::models::{
    Platform, ProductSearchResult, ReviewsPage, ScrapeJob, ScrapeRequest, Sentiment,
    SentimentStats, TrendData, WordFrequency,
};
use crate::query::{ReviewQuery, SortDirection, SortField};
use crate::AppState;

const DEFAULT_PAGE_LIMIT: usize = 10;
const DEFAULT_TREND_DAYS: u32 = 7;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub platform: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListParams {
    pub search: Option<String>,
    pub sentiment: Option<String>,
    pub platform: Option<String>,
    pub sort_by: Option<String>,
    pub direction: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct TrendParams {
    pub days: Option<u32>,
}

#[derive(Deserialize)]
pub struct WordParams {
    pub sentiment: Option<String>,
    pub limit: Option<usize>,
}

fn internal_error(err: ReviewInsightsError) -> StatusCode {
    tracing::error!("request failed: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}

// Filter parameters degrade to "no filter" when unknown; a bad enum value in
// the query string never produces a 4xx.
fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| v.parse::<NaiveDate>().ok())
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Review Insights API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ProductSearchResult>>, StatusCode> {
    let platform = params.platform.as_deref().and_then(Platform::from_param);
    let query = params.query.unwrap_or_default();

    tracing::info!("product search for '{}'", query);
    state
        .search
        .search(&query, platform)
        .await
        .map(Json)
        .map_err(internal_error)
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Query(params): Query<ReviewListParams>,
) -> Result<Json<ReviewsPage>, StatusCode> {
    let mut review_query = ReviewQuery {
        text: params.search.unwrap_or_default(),
        sentiment: params.sentiment.as_deref().and_then(Sentiment::from_param),
        platform: params.platform.as_deref().and_then(Platform::from_param),
        ..ReviewQuery::default()
    };
    if let Some(field) = params.sort_by.as_deref().and_then(SortField::from_param) {
        review_query.sort_field = field;
    }
    if let Some(direction) = params
        .direction
        .as_deref()
        .and_then(SortDirection::from_param)
    {
        review_query.sort_direction = direction;
    }

    let start_date = parse_date(params.start_date.as_deref());
    let end_date = parse_date(params.end_date.as_deref());
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_LIMIT);

    state
        .analytics
        .reviews_page(&product_id, &review_query, start_date, end_date, page, limit)
        .await
        .map(Json)
        .map_err(internal_error)
}

pub async fn sentiment_stats(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<SentimentStats>, StatusCode> {
    state
        .analytics
        .sentiment_stats(&product_id)
        .await
        .map(Json)
        .map_err(internal_error)
}

pub async fn sentiment_trends(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Query(params): Query<TrendParams>,
) -> Result<Json<Vec<TrendData>>, StatusCode> {
    let days = params.days.unwrap_or(DEFAULT_TREND_DAYS);
    state
        .analytics
        .trend(&product_id, Some(days))
        .await
        .map(Json)
        .map_err(internal_error)
}

pub async fn word_frequency(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Query(params): Query<WordParams>,
) -> Result<Json<Vec<WordFrequency>>, StatusCode> {
    let sentiment = params.sentiment.as_deref().and_then(Sentiment::from_param);
    let limit = params.limit.unwrap_or(state.words_limit);
    state
        .analytics
        .word_frequency(&product_id, sentiment, limit)
        .await
        .map(Json)
        .map_err(internal_error)
}

pub async fn submit_scrape(
    State(state): State<AppState>,
    Json(req): Json<ScrapeRequest>,
) -> Result<Json<ScrapeJob>, StatusCode> {
    if req.url.trim().is_empty() {
        tracing::warn!("scrape request with empty product URL");
        return Err(StatusCode::BAD_REQUEST);
    }

    let sequence = state.scrape_counter.fetch_add(1, Ordering::SeqCst) + 1;
    let job_id = format!("job-{}-{}", Utc::now().timestamp_millis(), sequence);
    tracing::info!(
        "queued scrape job {} for {} ({})",
        job_id,
        req.url,
        req.platform.as_str()
    );

    Ok(Json(ScrapeJob { job_id }))
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/products/search", get(search_products))
        .route("/api/reviews/:product_id", get(list_reviews))
        .route("/api/analytics/sentiment/:product_id", get(sentiment_stats))
        .route("/api/analytics/trends/:product_id", get(sentiment_trends))
        .route("/api/analytics/words/:product_id", get(word_frequency))
        .route("/api/scrape", post(submit_scrape))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
