use super::retry_controller::{AttemptOutcome, RetryController, RetryResult};
use super::vuldb_extractor::VulDbExtractor;
use crate::enrichment::domain::{CveId, SourceEndpoints, VulDbRecord};
use crate::enrichment::policies::RetryPolicy;
use crate::ports::outbound::{Delay, PageFetcher, PageRequest};
use tracing::{debug, warn};

/// Form field carrying the identifier in the search POST
const SEARCH_FIELD: &str = "cve";

/// Two-stage VulDB crawl with retries
///
/// Stage 1 posts the identifier to the search endpoint and looks for a detail
/// link. Stage 2 fetches that detail page and extracts its fields. Each stage
/// is retried independently. One courtesy pause separates the stages.
pub struct VulDbCrawler<'a, F: PageFetcher, D: Delay> {
    fetcher: &'a F,
    delay: &'a D,
    policy: &'a RetryPolicy,
    endpoints: &'a SourceEndpoints,
}

impl<'a, F: PageFetcher, D: Delay> VulDbCrawler<'a, F, D> {
    pub fn new(
        fetcher: &'a F,
        delay: &'a D,
        policy: &'a RetryPolicy,
        endpoints: &'a SourceEndpoints,
    ) -> Self {
        Self {
            fetcher,
            delay,
            policy,
            endpoints,
        }
    }

    /// Crawls VulDB for one identifier
    ///
    /// Never fails: an untracked identifier or an exhausted search yields
    /// [`VulDbRecord::not_available`]; an exhausted detail fetch yields the
    /// detail URL with empty fields.
    pub async fn crawl(&self, cve: &CveId) -> VulDbRecord {
        debug!(cve = %cve, "crawling VulDB");
        let controller = RetryController::new(self.policy, self.delay);

        let search = self.locate_detail_page(&controller, cve).await;
        self.delay.pause(self.policy.pause_for(1)).await;

        match search {
            RetryResult::Success(detail_url) => {
                self.read_detail_page(&controller, cve, &detail_url).await
            }
            RetryResult::NotFound => {
                debug!(cve = %cve, "VulDB has no entry");
                VulDbRecord::not_available()
            }
            RetryResult::Exhausted => VulDbRecord::not_available(),
        }
    }

    async fn locate_detail_page(
        &self,
        controller: &RetryController<'_, D>,
        cve: &CveId,
    ) -> RetryResult<String> {
        let request = PageRequest::post_form(
            self.endpoints.vuldb_search_url(),
            vec![(SEARCH_FIELD.to_string(), cve.as_str().to_string())],
        );
        let request = &request;
        let fetcher = self.fetcher;
        let endpoints = self.endpoints;
        let label = format!("VulDB search {}", cve);

        controller
            .run(&label, move || async move {
                let page = match fetcher.fetch(request).await {
                    Ok(page) => page,
                    Err(e) => {
                        warn!(error = %e, "VulDB search failed");
                        return AttemptOutcome::TransientFailure;
                    }
                };
                match VulDbExtractor::find_detail_url(&page, endpoints) {
                    Ok(Some(url)) => AttemptOutcome::Success(url),
                    Ok(None) => AttemptOutcome::NotFound,
                    Err(e) => {
                        warn!(error = %e, "unreadable VulDB search page");
                        AttemptOutcome::NotFound
                    }
                }
            })
            .await
    }

    async fn read_detail_page(
        &self,
        controller: &RetryController<'_, D>,
        cve: &CveId,
        detail_url: &str,
    ) -> VulDbRecord {
        let request = PageRequest::get(detail_url);
        let request = &request;
        let fetcher = self.fetcher;
        let label = format!("VulDB detail {}", cve);

        let result = controller
            .run(&label, move || async move {
                match fetcher.fetch(request).await {
                    Ok(page) => AttemptOutcome::Success(VulDbExtractor::extract_detail_or_empty(
                        &page, detail_url,
                    )),
                    Err(e) => {
                        warn!(error = %e, "VulDB detail page failed");
                        AttemptOutcome::TransientFailure
                    }
                }
            })
            .await;

        match result {
            RetryResult::Success(record) => record,
            RetryResult::NotFound | RetryResult::Exhausted => VulDbRecord::empty(detail_url),
        }
    }
}
