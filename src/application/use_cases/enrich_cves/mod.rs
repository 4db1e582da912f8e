use crate::application::dto::{EnrichmentRequest, EnrichmentResponse};
use crate::enrichment::domain::{LibraryMap, ResultStore};
use crate::enrichment::services::Reconciler;
use crate::ports::outbound::{
    Delay, LibraryListReader, PageFetcher, ProgressReporter, ResultStoreRepository,
};
use crate::shared::Result;
use tracing::info;

#[cfg(test)]
mod tests;

/// EnrichCvesUseCase - Core use case of a crawl run
///
/// Reads the library list and the previous report, reconciles them against
/// VulDB and Red Hat, and rewrites the report.
///
/// # Type Parameters
/// * `LR` - LibraryListReader implementation
/// * `RS` - ResultStoreRepository implementation
/// * `F` - PageFetcher implementation
/// * `D` - Delay implementation
/// * `PR` - ProgressReporter implementation
pub struct EnrichCvesUseCase<LR, RS, F, D, PR> {
    library_reader: LR,
    result_store: RS,
    page_fetcher: F,
    delay: D,
    progress_reporter: PR,
}

impl<LR, RS, F, D, PR> EnrichCvesUseCase<LR, RS, F, D, PR>
where
    LR: LibraryListReader,
    RS: ResultStoreRepository,
    F: PageFetcher,
    D: Delay,
    PR: ProgressReporter,
{
    /// Creates a new EnrichCvesUseCase with injected dependencies
    pub fn new(
        library_reader: LR,
        result_store: RS,
        page_fetcher: F,
        delay: D,
        progress_reporter: PR,
    ) -> Self {
        Self {
            library_reader,
            result_store,
            page_fetcher,
            delay,
            progress_reporter,
        }
    }

    /// Executes one enrichment run
    ///
    /// # Errors
    /// Fails when the library list is missing or unreadable, when an existing
    /// report cannot be read, or when the report cannot be written. Source
    /// failures never fail the run.
    pub async fn execute(&self, request: EnrichmentRequest) -> Result<EnrichmentResponse> {
        let libraries = self.read_library_list(&request)?;
        let mut store = self.load_previous_report(&request)?;

        let reconciler = Reconciler::new(&self.page_fetcher, &self.delay, &request.settings);
        let summary = reconciler
            .reconcile(
                &libraries,
                &mut store,
                &request.timestamp,
                &self.progress_reporter,
            )
            .await;

        self.result_store.save(&request.output_path, &store)?;
        info!(path = %request.output_path.display(), rows = store.len(), "report written");

        self.progress_reporter.report_completion(&format!(
            "✅ Report written: {} ({} row(s): {} reused, {} crawled, {} with a VulDB entry)",
            request.output_path.display(),
            store.len(),
            summary.reused,
            summary.crawled,
            summary.detail_pages_found
        ));

        Ok(EnrichmentResponse {
            summary,
            output_path: request.output_path,
            rows_written: store.len(),
        })
    }

    fn read_library_list(&self, request: &EnrichmentRequest) -> Result<LibraryMap> {
        self.progress_reporter.report(&format!(
            "📖 Loading library list from: {}",
            request.input_path.display()
        ));

        let libraries = self.library_reader.read_library_map(&request.input_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} CVE(s)", libraries.len()));
        Ok(libraries)
    }

    fn load_previous_report(&self, request: &EnrichmentRequest) -> Result<ResultStore> {
        let store = self.result_store.load(&request.output_path)?;
        if !store.is_empty() {
            self.progress_reporter.report(&format!(
                "📂 Loaded {} row(s) from previous report: {}",
                store.len(),
                request.output_path.display()
            ));
        }
        Ok(store)
    }
}
