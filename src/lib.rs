//! cve-crawl - CVE enrichment crawler
//!
//! This library enriches a list of CVE identifiers with metadata scraped from
//! VulDB and from the Red Hat advisory / Bugzilla tracker of each identifier,
//! and keeps a semicolon-delimited report up to date across runs. It follows
//! a hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Enrichment** (`enrichment`): domain model, retry policy, extractors,
//!   crawlers and the reconciliation engine
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types and the result alias
//!
//! # Example
//!
//! ```no_run
//! use cve_crawl::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! let fetcher = CachingPageFetcher::new(HttpPageFetcher::new(&HttpClientSettings::default())?);
//! let use_case = EnrichCvesUseCase::new(
//!     CsvLibraryReader::new(),
//!     CsvResultStore::new(),
//!     fetcher,
//!     TokioDelay,
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = EnrichmentRequest::new(
//!     PathBuf::from("libs.csv"),
//!     PathBuf::from("libs_updated.csv"),
//!     "1700000000000",
//!     ReconcileSettings::default(),
//! );
//! let response = use_case.execute(request).await?;
//! println!("{} row(s) written", response.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod enrichment;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{CsvLibraryReader, CsvResultStore};
    pub use crate::adapters::outbound::network::{
        CachingPageFetcher, HttpClientSettings, HttpPageFetcher,
    };
    pub use crate::adapters::outbound::timing::TokioDelay;
    pub use crate::application::dto::{EnrichmentRequest, EnrichmentResponse};
    pub use crate::application::use_cases::EnrichCvesUseCase;
    pub use crate::enrichment::domain::{
        CveId, LibraryMap, LibrarySet, RedHatRecord, ResultRow, ResultStore, SourceEndpoints,
        VulDbRecord,
    };
    pub use crate::enrichment::policies::RetryPolicy;
    pub use crate::enrichment::services::{
        ReconcileSettings, ReconcileSummary, Reconciler, RedHatExtractor, VulDbExtractor,
    };
    pub use crate::ports::outbound::{
        Delay, FetchError, LibraryListReader, PageFetcher, PageRequest, ProgressReporter,
        ResultStoreRepository,
    };
    pub use crate::shared::Result;
}
