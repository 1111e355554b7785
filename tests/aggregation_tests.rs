use chrono::NaiveDate;
use review_insights::aggregate::{
    distribution_series, sentiment_stats, sentiment_trend, top_words, trend_axis_label,
    word_frequencies,
};
use review_insights::{Platform, Review, Sentiment, SentimentStats, WordFrequency};

fn review(id: &str, date: &str, sentiment: Sentiment, rating: u8, content: &str) -> Review {
    Review {
        id: id.to_string(),
        product_id: "prod-1".to_string(),
        product_name: "Test Product".to_string(),
        platform: Platform::Amazon,
        reviewer_name: "Reviewer".to_string(),
        rating,
        title: String::new(),
        content: content.to_string(),
        date: date.parse().unwrap(),
        sentiment,
        sentiment_score: 0.5,
        helpful: 0,
    }
}

#[test]
fn distribution_series_always_has_three_slices_in_fixed_order() {
    let stats = SentimentStats {
        positive: 12,
        negative: 0,
        neutral: 3,
        total: 15,
        average_rating: 4.1,
    };

    let series = distribution_series(&stats);
    assert_eq!(series.len(), 3);
    assert_eq!(series[0].label, "Positive");
    assert_eq!(series[0].value, 12);
    assert_eq!(series[0].color_key, Sentiment::Positive);
    assert_eq!(series[1].label, "Negative");
    assert_eq!(series[1].value, 0);
    assert_eq!(series[2].label, "Neutral");
    assert_eq!(series[2].value, 3);
}

#[test]
fn distribution_series_keeps_three_slices_for_all_zero_stats() {
    let stats = SentimentStats {
        positive: 0,
        negative: 0,
        neutral: 0,
        total: 0,
        average_rating: 0.0,
    };

    let series = distribution_series(&stats);
    assert_eq!(series.len(), 3);
    assert!(series.iter().all(|slice| slice.value == 0));
}

#[test]
fn top_words_truncates_without_exceeding_input_length() {
    let frequencies: Vec<WordFrequency> = (0..5)
        .map(|i| WordFrequency {
            word: format!("word{}", i),
            count: 10 - i,
        })
        .collect();

    assert_eq!(top_words(&frequencies, 3).len(), 3);
    assert_eq!(top_words(&frequencies, 10).len(), 5);
    assert!(top_words(&frequencies, 0).is_empty());
    assert!(top_words(&[], 10).is_empty());
}

#[test]
fn top_words_takes_the_first_entries_as_given() {
    // Deliberately unsorted input: truncation means "first N as given".
    let frequencies = vec![
        WordFrequency {
            word: "low".to_string(),
            count: 1,
        },
        WordFrequency {
            word: "high".to_string(),
            count: 99,
        },
    ];

    let top = top_words(&frequencies, 1);
    assert_eq!(top[0].word, "low");
}

#[test]
fn trend_axis_label_is_month_and_day_only() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    assert_eq!(trend_axis_label(date), "Jan 5");

    let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    assert_eq!(trend_axis_label(date), "Dec 25");
}

#[test]
fn sentiment_stats_counts_and_averages() {
    let reviews = vec![
        review("r1", "2024-01-01", Sentiment::Positive, 5, ""),
        review("r2", "2024-01-02", Sentiment::Positive, 4, ""),
        review("r3", "2024-01-03", Sentiment::Negative, 1, ""),
        review("r4", "2024-01-04", Sentiment::Neutral, 3, ""),
    ];

    let stats = sentiment_stats(&reviews);
    assert_eq!(stats.positive, 2);
    assert_eq!(stats.negative, 1);
    assert_eq!(stats.neutral, 1);
    assert_eq!(stats.total, 4);
    assert!((stats.average_rating - 3.25).abs() < 1e-9);
}

#[test]
fn sentiment_stats_over_empty_input_are_all_zero() {
    let stats = sentiment_stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.average_rating, 0.0);
}

#[test]
fn sentiment_trend_buckets_by_unique_ascending_dates() {
    let reviews = vec![
        review("r1", "2024-01-03", Sentiment::Positive, 5, ""),
        review("r2", "2024-01-01", Sentiment::Negative, 1, ""),
        review("r3", "2024-01-03", Sentiment::Negative, 2, ""),
        review("r4", "2024-01-02", Sentiment::Neutral, 3, ""),
    ];

    let series = sentiment_trend(&reviews);
    let dates: Vec<NaiveDate> = series.iter().map(|p| p.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(dates, sorted);
    assert_eq!(series.len(), 3);

    let jan3 = &series[2];
    assert_eq!(jan3.positive, 1);
    assert_eq!(jan3.negative, 1);
    assert_eq!(jan3.neutral, 0);
}

#[test]
fn word_frequencies_are_sorted_descending_and_skip_stop_words() {
    let reviews = vec![
        review(
            "r1",
            "2024-01-01",
            Sentiment::Positive,
            5,
            "battery battery battery sound sound because the and",
        ),
        review("r2", "2024-01-02", Sentiment::Negative, 1, "battery broken"),
    ];

    let frequencies = word_frequencies(&reviews, None).unwrap();
    assert_eq!(frequencies[0].word, "battery");
    assert_eq!(frequencies[0].count, 4);
    assert!(frequencies.windows(2).all(|w| w[0].count >= w[1].count));
    assert!(frequencies.iter().all(|f| f.word != "the" && f.word != "and"));
}

#[test]
fn word_frequencies_can_be_scoped_to_one_sentiment() {
    let reviews = vec![
        review("r1", "2024-01-01", Sentiment::Positive, 5, "excellent sound"),
        review("r2", "2024-01-02", Sentiment::Negative, 1, "broken hinge"),
    ];

    let negative_only = word_frequencies(&reviews, Some(Sentiment::Negative)).unwrap();
    assert!(negative_only.iter().any(|f| f.word == "broken"));
    assert!(negative_only.iter().all(|f| f.word != "excellent"));
}
