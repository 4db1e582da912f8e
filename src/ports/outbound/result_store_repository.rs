use crate::enrichment::domain::ResultStore;
use crate::shared::Result;
use std::path::Path;

/// ResultStoreRepository port for the persisted report
///
/// The same location serves as the previous run's results and as the
/// destination of the current run.
pub trait ResultStoreRepository {
    /// Loads the previous report. An absent report is an empty store.
    ///
    /// # Errors
    /// Returns an error if the report exists but cannot be read.
    fn load(&self, path: &Path) -> Result<ResultStore>;

    /// Rewrites the report with the full content of `store`
    fn save(&self, path: &Path, store: &ResultStore) -> Result<()>;
}
