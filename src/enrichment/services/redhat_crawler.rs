use super::redhat_extractor::RedHatExtractor;
use super::vuldb_extractor::ExtractError;
use crate::enrichment::domain::{CveId, RedHatRecord, SourceEndpoints};
use crate::ports::outbound::{FetchError, PageFetcher, PageRequest};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
enum TrackerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("tracker {url}: {source}")]
    Extract { url: String, source: ExtractError },
}

/// Red Hat advisory crawl followed by its Bugzilla tracker
///
/// Not retried: any failure degrades to [`RedHatRecord::not_available`].
pub struct RedHatCrawler<'a, F: PageFetcher> {
    fetcher: &'a F,
    endpoints: &'a SourceEndpoints,
}

impl<'a, F: PageFetcher> RedHatCrawler<'a, F> {
    pub fn new(fetcher: &'a F, endpoints: &'a SourceEndpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub async fn crawl(&self, cve: &CveId) -> RedHatRecord {
        debug!(cve = %cve, "crawling Red Hat");
        match self.try_crawl(cve).await {
            Ok(record) => record,
            Err(e) => {
                warn!(cve = %cve, error = %e, "Red Hat data unavailable");
                RedHatRecord::not_available()
            }
        }
    }

    async fn try_crawl(&self, cve: &CveId) -> Result<RedHatRecord, TrackerError> {
        let advisory_url = self.endpoints.redhat_advisory_url(cve.as_str());
        let advisory = self.fetcher.fetch(&PageRequest::get(&advisory_url)).await?;

        let tracker_url = match RedHatExtractor::find_tracker_url(&advisory) {
            Ok(Some(url)) => url,
            Ok(None) => {
                debug!(cve = %cve, "advisory has no tracker link");
                return Ok(RedHatRecord::not_available());
            }
            Err(source) => {
                return Err(TrackerError::Extract {
                    url: advisory_url,
                    source,
                })
            }
        };

        let tracker = self.fetcher.fetch(&PageRequest::get(&tracker_url)).await?;
        let fields =
            RedHatExtractor::extract_tracker(&tracker).map_err(|source| TrackerError::Extract {
                url: tracker_url.clone(),
                source,
            })?;

        Ok(RedHatRecord::new(tracker_url, fields.bug_status, fields.fixed_in))
    }
}
