use crate::enrichment::services::ReconcileSummary;
use std::path::PathBuf;

/// EnrichmentResponse - outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentResponse {
    pub summary: ReconcileSummary,
    pub output_path: PathBuf,
    pub rows_written: usize,
}
