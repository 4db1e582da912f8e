use crate::enrichment::domain::{CveId, ResultRow, ResultStore};
use crate::ports::outbound::ResultStoreRepository;
use crate::shared::error::CrawlError;
use crate::shared::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Header row of the report
pub const REPORT_HEADER: [&str; 13] = [
    "CVE",
    "Timestamp",
    "VulDB URL",
    "Exploit Price",
    "CVSS 2 Base",
    "CVSS 2 Temp",
    "CPE(s)",
    "Status",
    "Solution",
    "RH Bugzilla URL",
    "Bugzilla Status",
    "Bugzilla fix in",
    "Libraries affected",
];

/// CsvResultStore adapter persisting the report as semicolon-delimited CSV
///
/// Loading tolerates an absent report and header variants of earlier
/// versions: columns are read by position and a first row starting with
/// `CVE` is taken as the header. Saving always rewrites the whole file.
pub struct CsvResultStore;

impl CsvResultStore {
    pub fn new() -> Self {
        Self
    }

    fn validate_output(path: &Path) -> Result<()> {
        let write_error = |details: String| CrawlError::FileWriteError {
            path: path.to_path_buf(),
            details,
        };

        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.exists() {
                return Err(write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                ))
                .into());
            }
        }

        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(write_error(
                    "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                )
                .into());
            }
        }

        Ok(())
    }
}

impl Default for CsvResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStoreRepository for CsvResultStore {
    fn load(&self, path: &Path) -> Result<ResultStore> {
        if !path.exists() {
            debug!(path = %path.display(), "no previous report");
            return Ok(ResultStore::new());
        }

        let read_error = |details: String| CrawlError::ReportReadError {
            path: path.to_path_buf(),
            details,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| read_error(e.to_string()))?;

        let mut store = ResultStore::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| read_error(e.to_string()))?;
            let fields: Vec<&str> = record.iter().collect();

            let Some((identifier, rest)) = fields.split_first() else {
                continue;
            };
            if index == 0 && identifier.trim() == REPORT_HEADER[0] {
                continue;
            }

            match CveId::new(*identifier) {
                Ok(cve) => store.insert(cve, ResultRow::from_fields(rest)),
                Err(e) => warn!(line = index + 1, error = %e, "skipping report row"),
            }
        }

        debug!(path = %path.display(), rows = store.len(), "loaded previous report");
        Ok(store)
    }

    fn save(&self, path: &Path, store: &ResultStore) -> Result<()> {
        Self::validate_output(path)?;

        let write_error = |details: String| CrawlError::FileWriteError {
            path: path.to_path_buf(),
            details,
        };

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_path(path)
            .map_err(|e| write_error(e.to_string()))?;

        writer
            .write_record(REPORT_HEADER)
            .map_err(|e| write_error(e.to_string()))?;

        for (cve, row) in store.iter() {
            let mut record = Vec::with_capacity(REPORT_HEADER.len());
            record.push(cve.as_str());
            record.extend(row.to_fields());
            writer
                .write_record(&record)
                .map_err(|e| write_error(e.to_string()))?;
        }

        writer.flush().map_err(|e| write_error(e.to_string()))?;
        Ok(())
    }
}
