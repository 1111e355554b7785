use chrono::NaiveDate;

use crate::errors::Result;
use crate::holders::{ProductCatalogHolder, ReviewHolder};
use crate::models::{Platform, ProductSearchResult, Review, Sentiment};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn seed_products() -> Vec<ProductSearchResult> {
    vec![
        ProductSearchResult {
            id: "prod-1".to_string(),
            name: "Echo Dot (5th Gen) Smart Speaker".to_string(),
            platform: Platform::Amazon,
            image: "https://images.example.com/echo-dot.jpg".to_string(),
            price: "$49.99".to_string(),
            rating: 4.6,
            review_count: 12843,
        },
        ProductSearchResult {
            id: "prod-2".to_string(),
            name: "Kindle Paperwhite (16 GB)".to_string(),
            platform: Platform::Amazon,
            image: "https://images.example.com/kindle.jpg".to_string(),
            price: "$139.99".to_string(),
            rating: 4.7,
            review_count: 8412,
        },
        ProductSearchResult {
            id: "prod-3".to_string(),
            name: "boAt Rockerz 450 Wireless Headphones".to_string(),
            platform: Platform::Flipkart,
            image: "https://images.example.com/rockerz.jpg".to_string(),
            price: "₹1,499".to_string(),
            rating: 4.2,
            review_count: 30215,
        },
        ProductSearchResult {
            id: "prod-4".to_string(),
            name: "Noise ColorFit Pulse Smartwatch".to_string(),
            platform: Platform::Flipkart,
            image: "https://images.example.com/colorfit.jpg".to_string(),
            price: "₹1,799".to_string(),
            rating: 3.9,
            review_count: 17630,
        },
        ProductSearchResult {
            id: "prod-5".to_string(),
            name: "Mi Power Bank 3i 20000mAh".to_string(),
            platform: Platform::Flipkart,
            image: "https://images.example.com/powerbank.jpg".to_string(),
            price: "₹2,199".to_string(),
            rating: 4.4,
            review_count: 9958,
        },
    ]
}

pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "rev-1".to_string(),
            product_id: "prod-1".to_string(),
            product_name: "Echo Dot (5th Gen) Smart Speaker".to_string(),
            platform: Platform::Amazon,
            reviewer_name: "Priya Sharma".to_string(),
            rating: 5,
            title: "Fantastic sound for the size".to_string(),
            content: "The speaker fills the whole room and Alexa picks up my voice even with music playing. Setup took less than five minutes.".to_string(),
            date: date(2024, 1, 2),
            sentiment: Sentiment::Positive,
            sentiment_score: 0.94,
            helpful: 128,
        },
        Review {
            id: "rev-2".to_string(),
            product_id: "prod-1".to_string(),
            product_name: "Echo Dot (5th Gen) Smart Speaker".to_string(),
            platform: Platform::Amazon,
            reviewer_name: "Marcus Webb".to_string(),
            rating: 2,
            title: "Wifi keeps dropping".to_string(),
            content: "Disconnects from my network several times a day. Support could only suggest a factory reset, which did nothing.".to_string(),
            date: date(2024, 1, 4),
            sentiment: Sentiment::Negative,
            sentiment_score: 0.11,
            helpful: 64,
        },
        Review {
            id: "rev-3".to_string(),
            product_id: "prod-1".to_string(),
            product_name: "Echo Dot (5th Gen) Smart Speaker".to_string(),
            platform: Platform::Amazon,
            reviewer_name: "Anita Desai".to_string(),
            rating: 4,
            title: "Good speaker, average mic".to_string(),
            content: "Sound quality is great for music but the microphone struggles across the room. Still happy with the purchase overall.".to_string(),
            date: date(2024, 1, 4),
            sentiment: Sentiment::Positive,
            sentiment_score: 0.71,
            helpful: 41,
        },
        Review {
            id: "rev-4".to_string(),
            product_id: "prod-1".to_string(),
            product_name: "Echo Dot (5th Gen) Smart Speaker".to_string(),
            platform: Platform::Amazon,
            reviewer_name: "Tom Keller".to_string(),
            rating: 3,
            title: "Does the job".to_string(),
            content: "Nothing special. Works as advertised, speaker is fine for podcasts, less so for bass-heavy music.".to_string(),
            date: date(2024, 1, 7),
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.52,
            helpful: 18,
        },
        Review {
            id: "rev-5".to_string(),
            product_id: "prod-1".to_string(),
            product_name: "Echo Dot (5th Gen) Smart Speaker".to_string(),
            platform: Platform::Amazon,
            reviewer_name: "Lena Fischer".to_string(),
            rating: 5,
            title: "Third one in the house".to_string(),
            content: "We liked the first two so much we bought another for the kitchen. Multi-room audio works flawlessly.".to_string(),
            date: date(2024, 1, 9),
            sentiment: Sentiment::Positive,
            sentiment_score: 0.97,
            helpful: 95,
        },
        Review {
            id: "rev-6".to_string(),
            product_id: "prod-3".to_string(),
            product_name: "boAt Rockerz 450 Wireless Headphones".to_string(),
            platform: Platform::Flipkart,
            reviewer_name: "Rahul Nair".to_string(),
            rating: 4,
            title: "Great battery life".to_string(),
            content: "Easily lasts a full week of commutes on one charge. Padding gets warm after an hour but the battery makes up for it.".to_string(),
            date: date(2024, 1, 3),
            sentiment: Sentiment::Positive,
            sentiment_score: 0.82,
            helpful: 210,
        },
        Review {
            id: "rev-7".to_string(),
            product_id: "prod-3".to_string(),
            product_name: "boAt Rockerz 450 Wireless Headphones".to_string(),
            platform: Platform::Flipkart,
            reviewer_name: "Sneha Kulkarni".to_string(),
            rating: 1,
            title: "Broke in two weeks".to_string(),
            content: "The headband cracked at the hinge with normal use. Replacement process was slow and frustrating.".to_string(),
            date: date(2024, 1, 5),
            sentiment: Sentiment::Negative,
            sentiment_score: 0.04,
            helpful: 340,
        },
        Review {
            id: "rev-8".to_string(),
            product_id: "prod-3".to_string(),
            product_name: "boAt Rockerz 450 Wireless Headphones".to_string(),
            platform: Platform::Flipkart,
            reviewer_name: "Vikram Singh".to_string(),
            rating: 3,
            title: "Okay for the price".to_string(),
            content: "Sound is decent, build feels plasticky. You get what you pay for.".to_string(),
            date: date(2024, 1, 8),
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.48,
            helpful: 27,
        },
        Review {
            id: "rev-9".to_string(),
            product_id: "prod-3".to_string(),
            product_name: "boAt Rockerz 450 Wireless Headphones".to_string(),
            platform: Platform::Flipkart,
            reviewer_name: "Deepa Menon".to_string(),
            rating: 5,
            title: "Best budget headphones".to_string(),
            content: "Bass is punchy, pairing is instant, battery is unreal. Bought a second pair for my brother.".to_string(),
            date: date(2024, 1, 10),
            sentiment: Sentiment::Positive,
            sentiment_score: 0.91,
            helpful: 156,
        },
        Review {
            id: "rev-10".to_string(),
            product_id: "prod-3".to_string(),
            product_name: "boAt Rockerz 450 Wireless Headphones".to_string(),
            platform: Platform::Flipkart,
            reviewer_name: "Arjun Patel".to_string(),
            rating: 2,
            title: "Uncomfortable after an hour".to_string(),
            content: "Clamping force is too strong and the ear cups are shallow. Sound is fine but I cannot wear them for long sessions.".to_string(),
            date: date(2024, 1, 10),
            sentiment: Sentiment::Negative,
            sentiment_score: 0.19,
            helpful: 88,
        },
    ]
}

/// Seeds both holders with the fixture data set.
pub async fn seed(catalog: &ProductCatalogHolder, reviews: &ReviewHolder) -> Result<()> {
    catalog.replace(seed_products()).await?;
    reviews.clear().await?;
    reviews.extend(seed_reviews()).await?;

    let products = catalog.len().await?;
    let total = reviews.len().await?;
    tracing::info!("seeded {} products and {} reviews from fixtures", products, total);
    Ok(())
}
