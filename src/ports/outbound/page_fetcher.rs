use async_trait::async_trait;
use thiserror::Error;

/// HTTP method supported by the fetch client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    /// POST with a form-encoded body
    Post,
}

/// A single page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Form fields, only sent with [`HttpMethod::Post`]
    pub form: Vec<(String, String)>,
}

impl PageRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            form: Vec::new(),
        }
    }

    pub fn post_form(url: impl Into<String>, form: Vec<(String, String)>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            form,
        }
    }
}

/// Failure to obtain a page.
///
/// Sources are treated as opaque and best-effort: the error only says which
/// URL failed and why, for logging. Callers decide whether to retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to fetch {url}: {reason}")]
pub struct FetchError {
    pub url: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// PageFetcher port for retrieving HTML pages
///
/// Implementations apply the outbound identity, timeout and certificate
/// policy; they keep no state between calls that affects the result.
///
/// # Async Support
/// Implementations must be `Send + Sync` so identifiers can be crawled
/// concurrently.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches one page and returns its HTML text
    ///
    /// # Errors
    /// Returns a [`FetchError`] on network errors, timeouts, unreadable bodies
    /// and non-2xx responses.
    async fn fetch(&self, request: &PageRequest) -> Result<String, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_has_no_form() {
        let request = PageRequest::get("https://example.org");
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.form.is_empty());
    }

    #[test]
    fn test_post_request_keeps_form() {
        let request = PageRequest::post_form(
            "https://vuldb.com/?search",
            vec![("cve".to_string(), "CVE-1".to_string())],
        );
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.form[0].1, "CVE-1");
    }

    #[test]
    fn test_fetch_error_display() {
        let error = FetchError::new("https://vuldb.com/?id.1", "timed out");
        assert_eq!(
            format!("{}", error),
            "Failed to fetch https://vuldb.com/?id.1: timed out"
        );
    }
}
