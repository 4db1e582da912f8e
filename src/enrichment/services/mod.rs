pub mod reconciler;
pub mod redhat_crawler;
pub mod redhat_extractor;
pub mod retry_controller;
pub mod vuldb_crawler;
pub mod vuldb_extractor;

pub use reconciler::{ReconcileSettings, ReconcileSummary, Reconciler};
pub use redhat_crawler::RedHatCrawler;
pub use redhat_extractor::{RedHatExtractor, TrackerFields};
pub use retry_controller::{AttemptOutcome, RetryController, RetryResult};
pub use vuldb_crawler::VulDbCrawler;
pub use vuldb_extractor::{ExtractError, VulDbExtractor};
