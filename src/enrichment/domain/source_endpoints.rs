use crate::shared::error::CrawlError;
use crate::shared::Result;

/// Default VulDB origin
pub const DEFAULT_VULDB_BASE_URL: &str = "https://vuldb.com";

/// Default prefix of the Red Hat per-CVE advisory pages
pub const DEFAULT_REDHAT_CVE_BASE_URL: &str = "https://access.redhat.com/security/cve";

/// Where the two sources live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEndpoints {
    vuldb_base_url: String,
    redhat_cve_base_url: String,
}

impl SourceEndpoints {
    pub fn new(vuldb_base_url: &str, redhat_cve_base_url: &str) -> Result<Self> {
        Ok(Self {
            vuldb_base_url: normalize_base(vuldb_base_url, "vuldb_base_url")?,
            redhat_cve_base_url: normalize_base(redhat_cve_base_url, "redhat_cve_base_url")?,
        })
    }

    /// Search endpoint receiving the `cve` form field
    pub fn vuldb_search_url(&self) -> String {
        format!("{}/?search", self.vuldb_base_url)
    }

    /// Absolute URL of a detail link found in the search results (`?id.NNN`)
    pub fn vuldb_detail_url(&self, href: &str) -> String {
        format!("{}/{}", self.vuldb_base_url, href.trim_start_matches('/'))
    }

    /// Red Hat advisory page of one identifier
    pub fn redhat_advisory_url(&self, cve: &str) -> String {
        format!(
            "{}/{}",
            self.redhat_cve_base_url,
            urlencoding::encode(cve)
        )
    }
}

impl Default for SourceEndpoints {
    fn default() -> Self {
        Self {
            vuldb_base_url: DEFAULT_VULDB_BASE_URL.to_string(),
            redhat_cve_base_url: DEFAULT_REDHAT_CVE_BASE_URL.to_string(),
        }
    }
}

fn normalize_base(url: &str, name: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(CrawlError::Validation {
            message: format!("{} must start with http:// or https:// (got '{}')", name, url),
        }
        .into());
    }
    Ok(url.to_string())
}
