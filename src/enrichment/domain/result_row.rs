use super::{LibrarySet, RedHatRecord, VulDbRecord};

/// Number of report columns following the identifier column
pub const ROW_FIELD_COUNT: usize = 12;

/// One report line: everything known about an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub libraries: LibrarySet,
    /// Milliseconds since the Unix epoch of the crawl that found a detail page,
    /// empty when the row has not been stamped
    pub timestamp: String,
    pub vuldb: VulDbRecord,
    pub redhat: RedHatRecord,
}

impl ResultRow {
    /// Builds a freshly crawled row.
    ///
    /// The timestamp is only kept when VulDB located a detail page, so rows
    /// without one are not considered done.
    pub fn crawled(
        libraries: LibrarySet,
        timestamp: &str,
        vuldb: VulDbRecord,
        redhat: RedHatRecord,
    ) -> Self {
        let timestamp = if vuldb.has_detail_page() {
            timestamp.to_string()
        } else {
            String::new()
        };
        Self {
            libraries,
            timestamp,
            vuldb,
            redhat,
        }
    }

    /// Column values in report order, without the identifier
    pub fn to_fields(&self) -> [&str; ROW_FIELD_COUNT] {
        [
            &self.timestamp,
            &self.vuldb.detail_url,
            &self.vuldb.price,
            &self.vuldb.cvss_base,
            &self.vuldb.cvss_temp,
            &self.vuldb.cpe_list,
            &self.vuldb.status,
            &self.vuldb.recommendation,
            &self.redhat.bugzilla_url,
            &self.redhat.bug_status,
            &self.redhat.fixed_in,
            self.libraries.as_str(),
        ]
    }

    /// Rebuilds a row from report columns (identifier excluded).
    ///
    /// Missing trailing columns are read as empty values. Values are taken
    /// verbatim so a carried-forward row is written back unchanged.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        let field = |i: usize| fields.get(i).map(|s| s.as_ref().to_string()).unwrap_or_default();
        Self {
            timestamp: field(0),
            vuldb: VulDbRecord {
                detail_url: field(1),
                price: field(2),
                cvss_base: field(3),
                cvss_temp: field(4),
                cpe_list: field(5),
                status: field(6),
                recommendation: field(7),
            },
            redhat: RedHatRecord {
                bugzilla_url: field(8),
                bug_status: field(9),
                fixed_in: field(10),
            },
            libraries: LibrarySet::from_joined(field(11)),
        }
    }
}
