use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::Result;
use crate::models::ProductSearchResult;

/// Shared in-memory product catalog. The data source owns the records;
/// consumers always receive clones.
#[derive(Clone)]
pub struct ProductCatalogHolder {
    products: Arc<Mutex<Vec<ProductSearchResult>>>,
}

impl ProductCatalogHolder {
    pub fn new() -> Self {
        ProductCatalogHolder {
            products: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn add(&self, product: ProductSearchResult) -> Result<()> {
        let mut products = self.products.lock().await;
        products.push(product);
        Ok(())
    }

    pub async fn replace(&self, new_products: Vec<ProductSearchResult>) -> Result<()> {
        let mut products = self.products.lock().await;
        *products = new_products;
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        let mut products = self.products.lock().await;
        products.clear();
        Ok(())
    }

    pub async fn get(&self) -> Result<Vec<ProductSearchResult>> {
        let products = self.products.lock().await;
        Ok(products.clone())
    }

    pub async fn len(&self) -> Result<usize> {
        let products = self.products.lock().await;
        Ok(products.len())
    }
}

impl Default for ProductCatalogHolder {
    fn default() -> Self {
        Self::new()
    }
}
