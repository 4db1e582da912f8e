use cve_crawl::enrichment::domain::insert_occurrence;
use cve_crawl::prelude::*;
use std::path::Path;

/// Mock LibraryListReader built from `(library, CVE)` pairs
pub struct MockLibraryReader {
    libraries: LibraryMap,
}

impl MockLibraryReader {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let mut libraries = LibraryMap::new();
        for (library, cve) in entries {
            insert_occurrence(&mut libraries, library, CveId::new(*cve).unwrap());
        }
        Self { libraries }
    }
}

impl LibraryListReader for MockLibraryReader {
    fn read_library_map(&self, _path: &Path) -> Result<LibraryMap> {
        Ok(self.libraries.clone())
    }
}
