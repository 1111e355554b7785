use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::Result;
use crate::models::Review;

/// Shared in-memory review store across all products.
#[derive(Clone)]
pub struct ReviewHolder {
    reviews: Arc<Mutex<Vec<Review>>>,
}

impl ReviewHolder {
    pub fn new() -> Self {
        ReviewHolder {
            reviews: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn add(&self, review: Review) -> Result<()> {
        let mut reviews = self.reviews.lock().await;
        reviews.push(review);
        Ok(())
    }

    pub async fn extend(&self, new_reviews: Vec<Review>) -> Result<()> {
        let mut reviews = self.reviews.lock().await;
        reviews.extend(new_reviews);
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        let mut reviews = self.reviews.lock().await;
        reviews.clear();
        Ok(())
    }

    pub async fn get(&self) -> Result<Vec<Review>> {
        let reviews = self.reviews.lock().await;
        Ok(reviews.clone())
    }

    /// All reviews for one product, in insertion order.
    pub async fn for_product(&self, product_id: &str) -> Result<Vec<Review>> {
        let reviews = self.reviews.lock().await;
        Ok(reviews
            .iter()
            .filter(|review| review.product_id == product_id)
            .cloned()
            .collect())
    }

    pub async fn len(&self) -> Result<usize> {
        let reviews = self.reviews.lock().await;
        Ok(reviews.len())
    }
}

impl Default for ReviewHolder {
    fn default() -> Self {
        Self::new()
    }
}
