use super::redhat_crawler::RedHatCrawler;
use super::vuldb_crawler::VulDbCrawler;
use crate::enrichment::domain::{CveId, LibraryMap, LibrarySet, ResultRow, ResultStore, SourceEndpoints};
use crate::enrichment::policies::RetryPolicy;
use crate::ports::outbound::{Delay, PageFetcher, ProgressReporter};
use futures::stream::{self, StreamExt};
use tracing::{debug, info};

/// Settings shared by every identifier of a run
#[derive(Debug, Clone)]
pub struct ReconcileSettings {
    pub policy: RetryPolicy,
    pub endpoints: SourceEndpoints,
    /// Identifiers crawled concurrently, at least 1
    pub workers: usize,
}

impl Default for ReconcileSettings {
    fn default() -> Self {
        Self {
            policy: RetryPolicy::default(),
            endpoints: SourceEndpoints::default(),
            workers: 1,
        }
    }
}

/// Counts describing what a reconciliation did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub total: usize,
    pub reused: usize,
    pub crawled: usize,
    /// Crawled identifiers for which VulDB had a detail page
    pub detail_pages_found: usize,
    /// Crawled identifiers without a VulDB detail page
    pub unavailable: usize,
}

/// Decides per identifier whether the prior row is reused or refreshed
pub struct Reconciler<'a, F: PageFetcher, D: Delay> {
    fetcher: &'a F,
    delay: &'a D,
    settings: &'a ReconcileSettings,
}

impl<'a, F: PageFetcher, D: Delay> Reconciler<'a, F, D> {
    pub fn new(fetcher: &'a F, delay: &'a D, settings: &'a ReconcileSettings) -> Self {
        Self {
            fetcher,
            delay,
            settings,
        }
    }

    /// Brings `store` up to date with `libraries`.
    ///
    /// Reusable rows are carried forward untouched. Every other identifier is
    /// crawled (Red Hat first, then VulDB) and its row inserted in one step.
    /// Afterwards the store only holds identifiers of `libraries`.
    ///
    /// # Arguments
    /// * `libraries` - Identifier to affected libraries mapping of this run
    /// * `store` - Rows of the prior report, updated in place
    /// * `timestamp` - Run timestamp stamped on rows with a detail page
    /// * `progress` - Receives one progress update per identifier
    pub async fn reconcile<P: ProgressReporter>(
        &self,
        libraries: &LibraryMap,
        store: &mut ResultStore,
        timestamp: &str,
        progress: &P,
    ) -> ReconcileSummary {
        let mut summary = ReconcileSummary {
            total: libraries.len(),
            ..ReconcileSummary::default()
        };

        let mut pending: Vec<(&CveId, &LibrarySet)> = Vec::new();
        for (cve, libs) in libraries {
            if store.is_reusable(cve) {
                debug!(cve = %cve, "reusing prior row");
                summary.reused += 1;
            } else {
                pending.push((cve, libs));
            }
        }

        if summary.reused > 0 {
            progress.report(&format!(
                "♻️  Reusing {} row(s) from the previous report",
                summary.reused
            ));
        }

        let mut done = summary.reused;
        progress.report_progress(done, summary.total, None);

        let workers = self.settings.workers.max(1);
        let mut crawls = stream::iter(pending)
            .map(|(cve, libs)| self.crawl_identifier(cve, libs, timestamp))
            .buffer_unordered(workers);

        while let Some((cve, row)) = crawls.next().await {
            summary.crawled += 1;
            if row.vuldb.has_detail_page() {
                summary.detail_pages_found += 1;
            } else {
                summary.unavailable += 1;
            }
            done += 1;
            progress.report_progress(done, summary.total, Some(cve.as_str()));
            store.insert(cve.clone(), row);
        }

        store.retain(|cve| libraries.contains_key(cve));

        info!(
            total = summary.total,
            reused = summary.reused,
            crawled = summary.crawled,
            detail_pages_found = summary.detail_pages_found,
            "reconciliation finished"
        );
        summary
    }

    async fn crawl_identifier<'c>(
        &self,
        cve: &'c CveId,
        libraries: &LibrarySet,
        timestamp: &str,
    ) -> (&'c CveId, ResultRow) {
        let redhat = RedHatCrawler::new(self.fetcher, &self.settings.endpoints)
            .crawl(cve)
            .await;
        let vuldb = VulDbCrawler::new(
            self.fetcher,
            self.delay,
            &self.settings.policy,
            &self.settings.endpoints,
        )
        .crawl(cve)
        .await;

        info!(cve = %cve, vuldb_url = %vuldb.detail_url, bugzilla_url = %redhat.bugzilla_url, "crawled");
        (
            cve,
            ResultRow::crawled(libraries.clone(), timestamp, vuldb, redhat),
        )
    }
}
