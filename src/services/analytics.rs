use chrono::{Days, NaiveDate};

use crate::aggregate;
use crate::errors::Result;
use crate::holders::ReviewHolder;
use crate::models::{ReviewsPage, Sentiment, SentimentStats, TrendData, WordFrequency};
use crate::query::{self, ReviewQuery};

/// Produces the analytics views for one product from the shared review
/// store: filtered review pages, sentiment stats, trend series and
/// word-frequency lists.
#[derive(Clone)]
pub struct AnalyticsService {
    reviews: ReviewHolder,
}

impl AnalyticsService {
    pub fn new(reviews: ReviewHolder) -> Self {
        AnalyticsService { reviews }
    }

    /// Filtered, sorted, paginated review view. `total` counts matches
    /// before pagination.
    pub async fn reviews_page(
        &self,
        product_id: &str,
        review_query: &ReviewQuery,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        page: usize,
        limit: usize,
    ) -> Result<ReviewsPage> {
        let reviews = self.reviews.for_product(product_id).await?;
        let reviews = query::filter_by_date_range(&reviews, start_date, end_date);
        let reviews = review_query.apply(&reviews);
        Ok(query::paginate(reviews, page, limit))
    }

    pub async fn sentiment_stats(&self, product_id: &str) -> Result<SentimentStats> {
        let reviews = self.reviews.for_product(product_id).await?;
        Ok(aggregate::sentiment_stats(&reviews))
    }

    /// Trend series, optionally windowed to the last `days` buckets. The
    /// window is anchored at the newest review date, not the wall clock, so
    /// output over a fixed data set is reproducible.
    pub async fn trend(&self, product_id: &str, days: Option<u32>) -> Result<Vec<TrendData>> {
        let reviews = self.reviews.for_product(product_id).await?;
        let mut series = aggregate::sentiment_trend(&reviews);

        if let Some(days) = days {
            if days > 0 {
                if let Some(last) = series.last().map(|point| point.date) {
                    if let Some(cutoff) = last.checked_sub_days(Days::new(days as u64 - 1)) {
                        series.retain(|point| point.date >= cutoff);
                    }
                }
            }
        }

        Ok(series)
    }

    /// Top word frequencies, optionally scoped to one sentiment.
    pub async fn word_frequency(
        &self,
        product_id: &str,
        sentiment: Option<Sentiment>,
        limit: usize,
    ) -> Result<Vec<WordFrequency>> {
        let reviews = self.reviews.for_product(product_id).await?;
        let frequencies = aggregate::word_frequencies(&reviews, sentiment)?;
        Ok(aggregate::top_words(&frequencies, limit))
    }
}
