use crate::enrichment::domain::LibraryMap;
use crate::shared::Result;
use std::path::Path;

/// LibraryListReader port for loading the identifiers to enrich
///
/// The list associates library names with identifiers; duplicates of an
/// identifier accumulate their library names.
pub trait LibraryListReader {
    /// Reads the list at `path` into an identifier to libraries mapping
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read.
    fn read_library_map(&self, path: &Path) -> Result<LibraryMap>;
}
