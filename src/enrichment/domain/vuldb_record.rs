use super::NOT_AVAILABLE;

/// Metadata scraped from a VulDB detail page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VulDbRecord {
    pub detail_url: String,
    pub price: String,
    pub cvss_base: String,
    pub cvss_temp: String,
    /// Space-separated CPE URIs in document order
    pub cpe_list: String,
    pub status: String,
    pub recommendation: String,
}

impl VulDbRecord {
    /// Record for an identifier without a usable detail page
    pub fn not_available() -> Self {
        Self::empty(NOT_AVAILABLE)
    }

    /// Record carrying only the detail URL, every extracted field empty
    pub fn empty(detail_url: impl Into<String>) -> Self {
        Self {
            detail_url: detail_url.into(),
            ..Self::default()
        }
    }

    /// Whether a detail page was located for the identifier
    pub fn has_detail_page(&self) -> bool {
        !self.detail_url.is_empty() && self.detail_url != NOT_AVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_available_record() {
        let record = VulDbRecord::not_available();
        assert_eq!(record.detail_url, "n/a");
        assert!(record.price.is_empty());
        assert!(record.recommendation.is_empty());
        assert!(!record.has_detail_page());
    }

    #[test]
    fn test_empty_record_keeps_url() {
        let record = VulDbRecord::empty("https://vuldb.com/?id.1");
        assert_eq!(record.detail_url, "https://vuldb.com/?id.1");
        assert!(record.has_detail_page());
        assert!(record.cpe_list.is_empty());
    }

    #[test]
    fn test_blank_url_has_no_detail_page() {
        assert!(!VulDbRecord::default().has_detail_page());
    }
}
