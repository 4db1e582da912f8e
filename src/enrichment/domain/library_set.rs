use super::CveId;
use std::collections::BTreeMap;

/// Identifier to libraries mapping read from the input list
pub type LibraryMap = BTreeMap<CveId, LibrarySet>;

/// Free-text list of the libraries affected by one identifier.
///
/// Names are kept space-separated; a later occurrence is placed in front of
/// the earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LibrarySet(String);

impl LibrarySet {
    pub fn new(library: impl Into<String>) -> Self {
        Self(library.into().trim().to_string())
    }

    /// Wraps an already aggregated value, e.g. the column of a previous report
    pub fn from_joined(joined: impl Into<String>) -> Self {
        Self(joined.into())
    }

    /// Adds another library name in front of the current ones
    pub fn add(&mut self, library: &str) {
        let library = library.trim();
        if library.is_empty() {
            return;
        }
        if self.0.is_empty() {
            self.0 = library.to_string();
        } else {
            self.0 = format!("{} {}", library, self.0);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Adds one `(library, identifier)` occurrence to the map, merging duplicates
pub fn insert_occurrence(map: &mut LibraryMap, library: &str, cve: CveId) {
    map.entry(cve)
        .and_modify(|set| set.add(library))
        .or_insert_with(|| LibrarySet::new(library));
}
