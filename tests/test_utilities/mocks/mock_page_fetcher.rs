use async_trait::async_trait;
use cve_crawl::ports::outbound::HttpMethod;
use cve_crawl::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock PageFetcher serving canned pages
///
/// GET pages are keyed by URL. VulDB search results are keyed by the `cve`
/// form value. Anything without a canned page fails like an unreachable host.
#[derive(Default, Clone)]
pub struct MockPageFetcher {
    pages: HashMap<String, String>,
    search_results: HashMap<String, String>,
    requests: Arc<Mutex<Vec<PageRequest>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_search_result(mut self, cve: &str, body: &str) -> Self {
        self.search_results.insert(cve.to_string(), body.to_string());
        self
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Number of requests made to `url`
    pub fn count_for(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url == url)
            .count()
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, request: &PageRequest) -> std::result::Result<String, FetchError> {
        self.requests.lock().unwrap().push(request.clone());

        let page = match request.method {
            HttpMethod::Get => self.pages.get(&request.url),
            HttpMethod::Post => request
                .form
                .iter()
                .find(|(name, _)| name == "cve")
                .and_then(|(_, cve)| self.search_results.get(cve)),
        };

        page.cloned()
            .ok_or_else(|| FetchError::new(&request.url, "connection refused"))
    }
}
