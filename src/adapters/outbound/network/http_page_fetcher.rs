use crate::ports::outbound::{FetchError, HttpMethod, PageFetcher, PageRequest};
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Identity sent to both sources unless configured otherwise
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; U; Intel Mac OS X; en-en) AppleWebKit/523.10.3 (KHTML, like Gecko) Version/3.0.4 Safari/523.10";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Connection settings for [`HttpPageFetcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientSettings {
    pub user_agent: String,
    pub timeout: Duration,
    /// Skip TLS certificate validation; both sources have served broken chains
    pub accept_invalid_certs: bool,
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: true,
        }
    }
}

/// HttpPageFetcher adapter fetching HTML pages over HTTP(S)
///
/// This adapter implements the PageFetcher port with an async reqwest client.
/// It keeps no state between calls beyond the client's connection pool.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Creates a fetcher with the given settings
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(settings: &HttpClientSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }

    /// POSTs carry their fields as an urlencoded form body
    fn build_request(&self, request: &PageRequest) -> reqwest::RequestBuilder {
        match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url).form(&request.form),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, request: &PageRequest) -> std::result::Result<String, FetchError> {
        let response = self
            .build_request(request)
            .send()
            .await
            .map_err(|e| FetchError::new(&request.url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                &request.url,
                format!("server returned status code {}", status),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::new(&request.url, format!("unreadable body: {}", e)))
    }
}
