use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;

use crate::errors::Result;
use crate::models::{Review, Sentiment, SentimentStats, TrendData, WordFrequency};

/// One slice of the sentiment distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSlice {
    pub label: &'static str,
    pub value: usize,
    pub color_key: Sentiment,
}

/// Chart-ready sentiment distribution. Always exactly three slices in fixed
/// order (positive, negative, neutral), zero counts included.
pub fn distribution_series(stats: &SentimentStats) -> [DistributionSlice; 3] {
    [
        DistributionSlice {
            label: "Positive",
            value: stats.positive,
            color_key: Sentiment::Positive,
        },
        DistributionSlice {
            label: "Negative",
            value: stats.negative,
            color_key: Sentiment::Negative,
        },
        DistributionSlice {
            label: "Neutral",
            value: stats.neutral,
            color_key: Sentiment::Neutral,
        },
    ]
}

/// First `limit` entries as given. The input is conventionally already sorted
/// descending by count; this helper does not re-sort.
pub fn top_words(frequencies: &[WordFrequency], limit: usize) -> Vec<WordFrequency> {
    frequencies.iter().take(limit).cloned().collect()
}

/// Axis label for a trend point, e.g. "Jan 5". Uses the calendar date only,
/// so output is identical regardless of host timezone.
pub fn trend_axis_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}

/// Recomputes aggregate counts and the average rating over a review set.
pub fn sentiment_stats(reviews: &[Review]) -> SentimentStats {
    let total = reviews.len();
    let positive = reviews
        .iter()
        .filter(|r| r.sentiment == Sentiment::Positive)
        .count();
    let negative = reviews
        .iter()
        .filter(|r| r.sentiment == Sentiment::Negative)
        .count();
    let neutral = total - positive - negative;

    let average_rating = if total > 0 {
        reviews.iter().map(|r| r.rating as f64).sum::<f64>() / total as f64
    } else {
        0.0
    };

    SentimentStats {
        positive,
        negative,
        neutral,
        total,
        average_rating,
    }
}

/// Buckets reviews by date into per-sentiment counts. The series is ordered
/// by date ascending and dates are unique.
pub fn sentiment_trend(reviews: &[Review]) -> Vec<TrendData> {
    let mut buckets: BTreeMap<NaiveDate, (usize, usize, usize)> = BTreeMap::new();

    for review in reviews {
        let bucket = buckets.entry(review.date).or_insert((0, 0, 0));
        match review.sentiment {
            Sentiment::Positive => bucket.0 += 1,
            Sentiment::Negative => bucket.1 += 1,
            Sentiment::Neutral => bucket.2 += 1,
        }
    }

    buckets
        .into_iter()
        .map(|(date, (positive, negative, neutral))| TrendData {
            date,
            positive,
            negative,
            neutral,
        })
        .collect()
}

const STOP_WORDS: [&str; 36] = [
    "the", "and", "for", "are", "but", "not", "was", "you", "your", "this",
    "that", "with", "have", "has", "had", "its", "very", "just", "all", "out",
    "from", "they", "them", "been", "than", "then", "too", "can", "will",
    "would", "what", "when", "there", "because", "about", "after",
];

/// Derives a word-frequency list from review content, optionally scoped to
/// one sentiment. Tokens are lowercased; short tokens and stop words are
/// dropped. Output is sorted by count descending, word ascending on ties.
pub fn word_frequencies(
    reviews: &[Review],
    sentiment: Option<Sentiment>,
) -> Result<Vec<WordFrequency>> {
    let token_regex = Regex::new(r"[a-zA-Z']+")?;
    let mut counts: HashMap<String, u64> = HashMap::new();

    for review in reviews {
        if let Some(sentiment) = sentiment {
            if review.sentiment != sentiment {
                continue;
            }
        }

        let text = format!("{} {}", review.title, review.content);
        for token in token_regex.find_iter(&text) {
            let word = token.as_str().to_lowercase();
            if word.len() < 3 || STOP_WORDS.contains(&word.as_str()) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut frequencies: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect();

    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    Ok(frequencies)
}
