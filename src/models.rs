use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// E-commerce site a review or product was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Amazon,
    Flipkart,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::Flipkart => "flipkart",
        }
    }

    /// Lenient parse for filter parameters. Unknown values (including the
    /// "all" sentinel) mean "no filter" rather than an error.
    pub fn from_param(value: &str) -> Option<Platform> {
        match value.trim().to_lowercase().as_str() {
            "amazon" => Some(Platform::Amazon),
            "flipkart" => Some(Platform::Flipkart),
            _ => None,
        }
    }
}

/// Categorical sentiment label. The continuous score lives on the review
/// itself; this label is what filters and chart buckets operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Same lenient policy as [`Platform::from_param`].
    pub fn from_param(value: &str) -> Option<Sentiment> {
        match value.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

/// A single product review with a pre-computed sentiment label and score.
/// Records are owned by the data source and never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub platform: Platform,
    pub reviewer_name: String,
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub helpful: u32,
}

/// Aggregate sentiment counts for one product. Derived, not stored;
/// recomputed whenever the underlying review set changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentStats {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total: usize,
    pub average_rating: f64,
}

/// Per-date sentiment counts. A series is ordered by date ascending with
/// unique dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendData {
    pub date: NaiveDate,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchResult {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub image: String,
    pub price: String,
    pub rating: f64,
    pub review_count: u32,
}

/// One page of reviews plus the total match count before pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsPage {
    pub reviews: Vec<Review>,
    pub total: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
    pub platform: Platform,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeJob {
    pub job_id: String,
}
