use crate::enrichment::services::ReconcileSettings;
use std::path::PathBuf;

/// EnrichmentRequest - parameters of one enrichment run
#[derive(Debug, Clone)]
pub struct EnrichmentRequest {
    /// `library;CVE-ID` list to enrich
    pub input_path: PathBuf,
    /// Report read at start and rewritten at the end
    pub output_path: PathBuf,
    /// Stamped on rows whose VulDB detail page was found in this run
    pub timestamp: String,
    pub settings: ReconcileSettings,
}

impl EnrichmentRequest {
    pub fn new(
        input_path: PathBuf,
        output_path: PathBuf,
        timestamp: impl Into<String>,
        settings: ReconcileSettings,
    ) -> Self {
        Self {
            input_path,
            output_path,
            timestamp: timestamp.into(),
            settings,
        }
    }
}
