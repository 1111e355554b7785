use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::Result;
use crate::holders::ProductCatalogHolder;
use crate::models::{Platform, ProductSearchResult};

/// Asynchronous product search over the in-memory catalog.
///
/// Mirrors the remote search contract: an artificial delay before resolving,
/// case-insensitive substring matching on product name and platform, and a
/// fallback to the full catalog when nothing matches the query.
#[derive(Clone)]
pub struct ProductSearchService {
    catalog: ProductCatalogHolder,
    delay: Duration,
}

impl ProductSearchService {
    pub fn new(catalog: ProductCatalogHolder, delay: Duration) -> Self {
        ProductSearchService { catalog, delay }
    }

    pub async fn search(
        &self,
        query: &str,
        platform: Option<Platform>,
    ) -> Result<Vec<ProductSearchResult>> {
        tokio::time::sleep(self.delay).await;

        let catalog = self.catalog.get().await?;

        // Explicit platform narrowing applies before the query match, so the
        // no-match fallback never leaks products from another platform.
        let scope: Vec<ProductSearchResult> = match platform {
            Some(platform) => catalog
                .into_iter()
                .filter(|p| p.platform == platform)
                .collect(),
            None => catalog,
        };

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(scope);
        }

        let matched: Vec<ProductSearchResult> = scope
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.platform.as_str().contains(&needle)
            })
            .cloned()
            .collect();

        if matched.is_empty() {
            tracing::debug!("no products match '{}', falling back to full catalog", needle);
            return Ok(scope);
        }

        Ok(matched)
    }
}

/// Search pipeline for a single view. Each call takes a monotonic ticket;
/// a response that finds a newer ticket was issued while it was in flight
/// reports itself stale so only the most recent request updates the view.
#[derive(Clone)]
pub struct SearchSession {
    service: ProductSearchService,
    latest: Arc<AtomicU64>,
}

impl SearchSession {
    pub fn new(service: ProductSearchService) -> Self {
        SearchSession {
            service,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// `Ok(None)` means the response was superseded and must be discarded.
    pub async fn search(
        &self,
        query: &str,
        platform: Option<Platform>,
    ) -> Result<Option<Vec<ProductSearchResult>>> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let results = self.service.search(query, platform).await?;

        if self.latest.load(Ordering::SeqCst) != ticket {
            tracing::debug!("search '{}' superseded, discarding {} results", query, results.len());
            return Ok(None);
        }

        Ok(Some(results))
    }
}
