/// Network adapters for page retrieval
mod caching_page_fetcher;
mod http_page_fetcher;

pub use caching_page_fetcher::CachingPageFetcher;
pub use http_page_fetcher::{
    HttpClientSettings, HttpPageFetcher, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
