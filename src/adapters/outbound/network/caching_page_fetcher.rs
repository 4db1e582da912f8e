use crate::ports::outbound::{FetchError, HttpMethod, PageFetcher, PageRequest};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// CachingPageFetcher wraps a PageFetcher and memoises GET responses by URL.
///
/// Several identifiers often link to the same Bugzilla bug, so tracker pages
/// are fetched once per run. POST requests and failures are never cached.
/// The cache is thread-safe and lives as long as the fetcher.
pub struct CachingPageFetcher<F: PageFetcher> {
    inner: F,
    cache: Arc<DashMap<String, String>>,
}

impl<F: PageFetcher> CachingPageFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<F: PageFetcher> PageFetcher for CachingPageFetcher<F> {
    async fn fetch(&self, request: &PageRequest) -> Result<String, FetchError> {
        if request.method != HttpMethod::Get {
            return self.inner.fetch(request).await;
        }

        if let Some(cached) = self.cache.get(&request.url) {
            debug!(url = %request.url, "page served from cache");
            return Ok(cached.clone());
        }

        let page = self.inner.fetch(request).await?;
        self.cache.insert(request.url.clone(), page.clone());

        Ok(page)
    }
}
