use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::{Platform, Review, ReviewsPage, Sentiment};

/// Review attribute a view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Rating,
    /// Compares the numeric sentiment score, not the label, so ties between
    /// same-label reviews are broken by score.
    Sentiment,
    Helpful,
}

impl SortField {
    pub fn from_param(value: &str) -> Option<SortField> {
        match value.trim().to_lowercase().as_str() {
            "date" => Some(SortField::Date),
            "rating" => Some(SortField::Rating),
            "sentiment" => Some(SortField::Sentiment),
            "helpful" => Some(SortField::Helpful),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_param(value: &str) -> Option<SortDirection> {
        match value.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// View state for the review table: active filters plus sort order.
///
/// Held explicitly by the caller and passed into [`ReviewQuery::apply`];
/// the engine itself keeps no state between calls.
#[derive(Debug, Clone)]
pub struct ReviewQuery {
    /// Case-insensitive substring match against title, content and reviewer
    /// name. Empty or whitespace-only text disables the filter.
    pub text: String,
    pub sentiment: Option<Sentiment>,
    pub platform: Option<Platform>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for ReviewQuery {
    fn default() -> Self {
        ReviewQuery {
            text: String::new(),
            sentiment: None,
            platform: None,
            sort_field: SortField::Date,
            sort_direction: SortDirection::Descending,
        }
    }
}

impl ReviewQuery {
    /// Whether a single review passes every active filter.
    pub fn matches(&self, review: &Review) -> bool {
        let needle = self.text.trim().to_lowercase();
        if !needle.is_empty() {
            let text_hit = review.title.to_lowercase().contains(&needle)
                || review.content.to_lowercase().contains(&needle)
                || review.reviewer_name.to_lowercase().contains(&needle);
            if !text_hit {
                return false;
            }
        }

        if let Some(sentiment) = self.sentiment {
            if review.sentiment != sentiment {
                return false;
            }
        }

        if let Some(platform) = self.platform {
            if review.platform != platform {
                return false;
            }
        }

        true
    }

    /// Produces a filtered, ordered view over `reviews` without mutating the
    /// source. The sort is stable: reviews with equal sort keys keep their
    /// input order in both directions. No match yields an empty vec.
    pub fn apply(&self, reviews: &[Review]) -> Vec<Review> {
        let mut result: Vec<Review> = reviews
            .iter()
            .filter(|review| self.matches(review))
            .cloned()
            .collect();

        result.sort_by(|a, b| {
            let ordering = match self.sort_field {
                SortField::Date => a.date.cmp(&b.date),
                SortField::Rating => a.rating.cmp(&b.rating),
                SortField::Sentiment => a
                    .sentiment_score
                    .partial_cmp(&b.sentiment_score)
                    .unwrap_or(Ordering::Equal),
                SortField::Helpful => a.helpful.cmp(&b.helpful),
            };
            match self.sort_direction {
                SortDirection::Ascending => ordering,
                // Reversing the comparator (not the vec) keeps equal keys in
                // input order.
                SortDirection::Descending => ordering.reverse(),
            }
        });

        result
    }

    /// Sort-header click policy: clicking the current field flips direction,
    /// selecting a new field resets to descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = match self.sort_direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Descending;
        }
    }
}

/// Inclusive calendar-date window. An unset bound is open.
pub fn filter_by_date_range(
    reviews: &[Review],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| start.map_or(true, |s| review.date >= s))
        .filter(|review| end.map_or(true, |e| review.date <= e))
        .cloned()
        .collect()
}

/// 1-based page slicing. `limit` of zero means "everything"; a page past the
/// end yields an empty page. `total` always reports the pre-pagination count.
pub fn paginate(reviews: Vec<Review>, page: usize, limit: usize) -> ReviewsPage {
    let total = reviews.len();
    if limit == 0 {
        return ReviewsPage { reviews, total };
    }

    let page = page.max(1);
    let start = (page - 1).saturating_mul(limit);
    let reviews = reviews
        .into_iter()
        .skip(start)
        .take(limit)
        .collect();

    ReviewsPage { reviews, total }
}
