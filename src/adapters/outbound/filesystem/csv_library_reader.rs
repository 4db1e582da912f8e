use crate::enrichment::domain::{insert_occurrence, CveId, LibraryMap};
use crate::ports::outbound::LibraryListReader;
use crate::shared::error::CrawlError;
use crate::shared::Result;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Maximum input size (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// CsvLibraryReader adapter reading `library;CVE-ID` lines
///
/// This adapter implements the LibraryListReader port. The file has no header.
/// Fields are trimmed; lines with fewer than two fields or an invalid
/// identifier are skipped with a warning.
pub struct CsvLibraryReader;

impl CsvLibraryReader {
    pub fn new() -> Self {
        Self
    }

    /// Rejects symbolic links, non-regular files and oversized files
    fn validate_input(path: &Path) -> Result<()> {
        let metadata = fs::symlink_metadata(path).map_err(|_| CrawlError::InputNotFound {
            path: path.to_path_buf(),
            suggestion: "Pass the library list with --input or create libs.csv in the working directory".to_string(),
        })?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        if metadata.len() > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                metadata.len(),
                MAX_FILE_SIZE
            );
        }

        Ok(())
    }
}

impl Default for CsvLibraryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryListReader for CsvLibraryReader {
    fn read_library_map(&self, path: &Path) -> Result<LibraryMap> {
        Self::validate_input(path)?;

        let parse_error = |details: String| CrawlError::InputParseError {
            path: path.to_path_buf(),
            details,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| parse_error(e.to_string()))?;

        let mut map = LibraryMap::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| parse_error(e.to_string()))?;
            let line = index + 1;

            let (library, identifier) = match (record.get(0), record.get(1)) {
                (Some(library), Some(identifier)) => (library, identifier),
                _ => {
                    if !record.iter().all(str::is_empty) {
                        warn!(line, "skipping input line without a CVE column");
                    }
                    continue;
                }
            };

            match CveId::new(identifier) {
                Ok(cve) => insert_occurrence(&mut map, library, cve),
                Err(e) => warn!(line, error = %e, "skipping input line"),
            }
        }

        Ok(map)
    }
}
