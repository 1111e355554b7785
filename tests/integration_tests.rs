use std::time::Duration;

use review_insights::{
    fixtures, AnalyticsService, AppConfig, DataSource, Platform, ProductCatalogHolder,
    ProductSearchService, ReviewHolder, ReviewQuery, SearchSession, Sentiment,
};

fn test_config() -> AppConfig {
    AppConfig {
        api_base_url: "http://localhost:5000/api".to_string(),
        bind_address: "0.0.0.0:3000".to_string(),
        data_source: DataSource::Fixtures,
        request_timeout_secs: 20,
        search_delay_ms: 800,
        max_retries: Some(3),
        top_words_limit: Some(10),
    }
}

async fn seeded_catalog() -> ProductCatalogHolder {
    let catalog = ProductCatalogHolder::new();
    catalog.replace(fixtures::seed_products()).await.unwrap();
    catalog
}

fn search_service(catalog: ProductCatalogHolder) -> ProductSearchService {
    ProductSearchService::new(catalog, Duration::from_millis(1))
}

#[tokio::test]
async fn product_catalog_holder_round_trip() {
    let catalog = ProductCatalogHolder::new();
    assert_eq!(catalog.len().await.unwrap(), 0);

    catalog.replace(fixtures::seed_products()).await.unwrap();
    assert_eq!(catalog.len().await.unwrap(), 5);

    let products = catalog.get().await.unwrap();
    assert_eq!(products[0].id, "prod-1");

    catalog.clear().await.unwrap();
    assert_eq!(catalog.len().await.unwrap(), 0);
}

#[tokio::test]
async fn review_holder_scopes_by_product() {
    let holder = ReviewHolder::new();
    holder.extend(fixtures::seed_reviews()).await.unwrap();

    let echo_reviews = holder.for_product("prod-1").await.unwrap();
    assert_eq!(echo_reviews.len(), 5);
    assert!(echo_reviews.iter().all(|r| r.product_id == "prod-1"));

    let none = holder.for_product("prod-unknown").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn search_matches_platform_substring_when_no_name_matches() {
    // Catalog holds 2 amazon and 3 flipkart products; "amazon" matches no
    // product name, so the hit comes from the platform tag.
    let service = search_service(seeded_catalog().await);

    let results = service.search("amazon", None).await.unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|p| p.platform == Platform::Amazon));
}

#[tokio::test]
async fn search_falls_back_to_full_catalog_on_no_match() {
    let service = search_service(seeded_catalog().await);

    let results = service.search("zzz-no-match", None).await.unwrap();
    assert_eq!(results.len(), 5);
}

#[tokio::test]
async fn search_name_match_is_case_insensitive() {
    let service = search_service(seeded_catalog().await);

    let results = service.search("KINDLE", None).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "prod-2");
}

#[tokio::test]
async fn explicit_platform_narrowing_bounds_the_fallback() {
    let service = search_service(seeded_catalog().await);

    let results = service
        .search("zzz-no-match", Some(Platform::Flipkart))
        .await
        .unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|p| p.platform == Platform::Flipkart));
}

#[tokio::test]
async fn stale_search_responses_are_discarded() {
    let session = SearchSession::new(search_service(seeded_catalog().await));

    // The second search starts before the first resolves, so only the most
    // recent request may update the view.
    let (first, second) = tokio::join!(
        session.search("echo", None),
        session.search("kindle", None)
    );

    assert!(first.unwrap().is_none());
    let results = second.unwrap().expect("latest search must resolve");
    assert_eq!(results[0].id, "prod-2");
}

#[tokio::test]
async fn analytics_reviews_page_filters_sorts_and_paginates() {
    let holder = ReviewHolder::new();
    holder.extend(fixtures::seed_reviews()).await.unwrap();
    let analytics = AnalyticsService::new(holder);

    // Default view: date descending over all prod-1 reviews.
    let page = analytics
        .reviews_page("prod-1", &ReviewQuery::default(), None, None, 1, 10)
        .await
        .unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.reviews[0].id, "rev-5");

    // Sentiment filter plus pagination keeps the pre-pagination total.
    let query = ReviewQuery {
        sentiment: Some(Sentiment::Positive),
        ..ReviewQuery::default()
    };
    let page = analytics
        .reviews_page("prod-1", &query, None, None, 1, 2)
        .await
        .unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.reviews.len(), 2);
    assert!(page.reviews.iter().all(|r| r.sentiment == Sentiment::Positive));
}

#[tokio::test]
async fn analytics_stats_reflect_the_review_set() {
    let holder = ReviewHolder::new();
    holder.extend(fixtures::seed_reviews()).await.unwrap();
    let analytics = AnalyticsService::new(holder);

    let stats = analytics.sentiment_stats("prod-1").await.unwrap();
    assert_eq!(stats.positive, 3);
    assert_eq!(stats.negative, 1);
    assert_eq!(stats.neutral, 1);
    assert_eq!(stats.total, 5);
    assert!((stats.average_rating - 3.8).abs() < 1e-9);

    let empty = analytics.sentiment_stats("prod-unknown").await.unwrap();
    assert_eq!(empty.total, 0);
}

#[tokio::test]
async fn trend_window_is_anchored_at_the_newest_review_date() {
    let holder = ReviewHolder::new();
    holder.extend(fixtures::seed_reviews()).await.unwrap();
    let analytics = AnalyticsService::new(holder);

    // prod-1 buckets: Jan 2, Jan 4, Jan 7, Jan 9.
    let full = analytics.trend("prod-1", None).await.unwrap();
    assert_eq!(full.len(), 4);

    let windowed = analytics.trend("prod-1", Some(3)).await.unwrap();
    assert_eq!(windowed.len(), 2);
    assert_eq!(windowed[0].date, "2024-01-07".parse().unwrap());
    assert_eq!(windowed[1].date, "2024-01-09".parse().unwrap());
}

#[tokio::test]
async fn word_frequency_respects_limit_and_sentiment_scope() {
    let holder = ReviewHolder::new();
    holder.extend(fixtures::seed_reviews()).await.unwrap();
    let analytics = AnalyticsService::new(holder);

    let words = analytics
        .word_frequency("prod-3", None, 5)
        .await
        .unwrap();
    assert!(words.len() <= 5);
    assert!(words.windows(2).all(|w| w[0].count >= w[1].count));

    let negative = analytics
        .word_frequency("prod-3", Some(Sentiment::Negative), 10)
        .await
        .unwrap();
    assert!(negative.iter().any(|f| f.word == "headband" || f.word == "cracked" || f.word == "clamping"));
}

#[test]
fn config_validation_enforces_bounds() {
    let mut config = test_config();
    assert!(config.validate().is_ok());

    config.request_timeout_secs = 0;
    assert!(config.validate().is_err());
    config.request_timeout_secs = 200;
    assert!(config.validate().is_err());
    config.request_timeout_secs = 20;

    config.search_delay_ms = 20_000;
    assert!(config.validate().is_err());
    config.search_delay_ms = 800;

    config.max_retries = Some(11);
    assert!(config.validate().is_err());
    config.max_retries = Some(3);

    config.top_words_limit = Some(0);
    assert!(config.validate().is_err());

    config.top_words_limit = None;
    config.api_base_url = "  ".to_string();
    assert!(config.validate().is_err());
}
