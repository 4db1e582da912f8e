pub mod cve_id;
pub mod library_set;
pub mod redhat_record;
pub mod result_row;
pub mod result_store;
pub mod source_endpoints;
pub mod vuldb_record;

pub use cve_id::CveId;
pub use library_set::{insert_occurrence, LibraryMap, LibrarySet};
pub use redhat_record::RedHatRecord;
pub use result_row::ResultRow;
pub use result_store::ResultStore;
pub use source_endpoints::{
    SourceEndpoints, DEFAULT_REDHAT_CVE_BASE_URL, DEFAULT_VULDB_BASE_URL,
};
pub use vuldb_record::VulDbRecord;

/// Placeholder written when a field could not be determined.
///
/// Distinct from an empty value, which means the source was reached but had
/// nothing to say.
pub const NOT_AVAILABLE: &str = "n/a";
