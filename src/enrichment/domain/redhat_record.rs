use super::NOT_AVAILABLE;

/// Bug tracker data reached through the Red Hat CVE page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedHatRecord {
    pub bugzilla_url: String,
    pub bug_status: String,
    pub fixed_in: String,
}

impl RedHatRecord {
    pub fn new(
        bugzilla_url: impl Into<String>,
        bug_status: impl Into<String>,
        fixed_in: impl Into<String>,
    ) -> Self {
        Self {
            bugzilla_url: bugzilla_url.into().trim().to_string(),
            bug_status: bug_status.into().trim().to_string(),
            fixed_in: fixed_in.into().trim().to_string(),
        }
    }

    /// Record used when no tracker link exists or a stage failed
    pub fn not_available() -> Self {
        Self::new(NOT_AVAILABLE, "", "")
    }
}
