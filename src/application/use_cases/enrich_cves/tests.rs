use super::*;
use crate::enrichment::domain::{
    insert_occurrence, CveId, LibrarySet, RedHatRecord, ResultRow, VulDbRecord,
};
use crate::enrichment::policies::RetryPolicy;
use crate::enrichment::services::ReconcileSettings;
use crate::ports::outbound::{FetchError, HttpMethod, PageRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

const SEARCH_PAGE: &str = include_str!("../../../../tests/fixtures/vuldb_search.html");
const DETAIL_PAGE: &str = include_str!("../../../../tests/fixtures/vuldb_detail_jcore.html");
const ADVISORY_PAGE: &str = include_str!("../../../../tests/fixtures/redhat_advisory.html");
const TRACKER_PAGE: &str = include_str!("../../../../tests/fixtures/bugzilla.html");

// Mock implementations for testing
struct MockLibraryReader {
    libraries: Option<LibraryMap>,
}

impl LibraryListReader for MockLibraryReader {
    fn read_library_map(&self, path: &Path) -> Result<LibraryMap> {
        match &self.libraries {
            Some(libraries) => Ok(libraries.clone()),
            None => anyhow::bail!("Input file not found: {}", path.display()),
        }
    }
}

#[derive(Default)]
struct MockResultStore {
    previous: ResultStore,
    saved: Mutex<Option<ResultStore>>,
}

impl ResultStoreRepository for MockResultStore {
    fn load(&self, _path: &Path) -> Result<ResultStore> {
        Ok(self.previous.clone())
    }

    fn save(&self, _path: &Path, store: &ResultStore) -> Result<()> {
        *self.saved.lock().unwrap() = Some(store.clone());
        Ok(())
    }
}

/// Serves pages by URL; POSTs are keyed by URL and form values
#[derive(Default)]
struct MockPageFetcher {
    pages: HashMap<String, String>,
    calls: AtomicUsize,
}

impl MockPageFetcher {
    fn with_page(mut self, key: &str, page: &str) -> Self {
        self.pages.insert(key.to_string(), page.to_string());
        self
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, request: &PageRequest) -> std::result::Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = match request.method {
            HttpMethod::Get => request.url.clone(),
            HttpMethod::Post => {
                let values: Vec<&str> = request.form.iter().map(|(_, v)| v.as_str()).collect();
                format!("POST {} {}", request.url, values.join(","))
            }
        };
        self.pages
            .get(&key)
            .cloned()
            .ok_or_else(|| FetchError::new(&request.url, "connection refused"))
    }
}

struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn pause(&self, _duration: Duration) {}
}

struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}

fn cve(value: &str) -> CveId {
    CveId::new(value).unwrap()
}

fn libraries(entries: &[(&str, &str)]) -> LibraryMap {
    let mut map = LibraryMap::new();
    for (library, id) in entries {
        insert_occurrence(&mut map, library, cve(id));
    }
    map
}

fn request() -> EnrichmentRequest {
    let settings = ReconcileSettings {
        policy: RetryPolicy::new(1, Duration::from_secs(15)),
        ..ReconcileSettings::default()
    };
    EnrichmentRequest::new(
        PathBuf::from("libs.csv"),
        PathBuf::from("libs_updated.csv"),
        "1700000000000",
        settings,
    )
}

fn known_row(library: &str) -> ResultRow {
    ResultRow::crawled(
        LibrarySet::new(library),
        "1600000000000",
        VulDbRecord::empty("https://vuldb.com/?id.1"),
        RedHatRecord::not_available(),
    )
}

#[tokio::test]
async fn test_reusable_rows_skip_network() {
    let mut previous = ResultStore::new();
    previous.insert(cve("CVE-2012-4321"), known_row("jcore"));

    let use_case = EnrichCvesUseCase::new(
        MockLibraryReader {
            libraries: Some(libraries(&[("jcore", "CVE-2012-4321")])),
        },
        MockResultStore {
            previous,
            ..MockResultStore::default()
        },
        MockPageFetcher::default(),
        NoDelay,
        SilentProgressReporter,
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.summary.reused, 1);
    assert_eq!(response.summary.crawled, 0);
    assert_eq!(use_case.page_fetcher.calls.load(Ordering::SeqCst), 0);
    let saved = use_case.result_store.saved.lock().unwrap().clone().unwrap();
    assert_eq!(saved.get(&cve("CVE-2012-4321")), Some(&known_row("jcore")));
}

#[tokio::test]
async fn test_identifiers_missing_from_input_are_dropped() {
    let mut previous = ResultStore::new();
    previous.insert(cve("CVE-1"), known_row("a"));
    previous.insert(cve("CVE-2"), known_row("b"));

    let use_case = EnrichCvesUseCase::new(
        MockLibraryReader {
            libraries: Some(libraries(&[("a", "CVE-1")])),
        },
        MockResultStore {
            previous,
            ..MockResultStore::default()
        },
        MockPageFetcher::default(),
        NoDelay,
        SilentProgressReporter,
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.rows_written, 1);
    let saved = use_case.result_store.saved.lock().unwrap().clone().unwrap();
    assert!(saved.get(&cve("CVE-2")).is_none());
}

#[tokio::test]
async fn test_new_identifier_is_crawled_and_stamped() {
    let fetcher = MockPageFetcher::default()
        .with_page("POST https://vuldb.com/?search CVE-2012-4321", SEARCH_PAGE)
        .with_page("https://vuldb.com/?id.62731", DETAIL_PAGE)
        .with_page(
            "https://access.redhat.com/security/cve/CVE-2012-4321",
            ADVISORY_PAGE,
        )
        .with_page(
            "https://bugzilla.redhat.com/show_bug.cgi?id=1234567",
            TRACKER_PAGE,
        );

    let use_case = EnrichCvesUseCase::new(
        MockLibraryReader {
            libraries: Some(libraries(&[("jcore", "CVE-2012-4321")])),
        },
        MockResultStore::default(),
        fetcher,
        NoDelay,
        SilentProgressReporter,
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.summary.crawled, 1);
    assert_eq!(response.summary.detail_pages_found, 1);
    let saved = use_case.result_store.saved.lock().unwrap().clone().unwrap();
    let row = saved.get(&cve("CVE-2012-4321")).unwrap();
    assert_eq!(row.timestamp, "1700000000000");
    assert_eq!(row.vuldb.detail_url, "https://vuldb.com/?id.62731");
    assert_eq!(row.vuldb.price, "$0-$1k");
    assert_eq!(row.redhat.bug_status, "CLOSED ERRATA");
    assert_eq!(row.libraries.as_str(), "jcore");
}

#[tokio::test]
async fn test_unreachable_sources_yield_unstamped_row() {
    let use_case = EnrichCvesUseCase::new(
        MockLibraryReader {
            libraries: Some(libraries(&[("jcore", "CVE-2012-4321")])),
        },
        MockResultStore::default(),
        MockPageFetcher::default(),
        NoDelay,
        SilentProgressReporter,
    );

    let response = use_case.execute(request()).await.unwrap();

    assert_eq!(response.summary.unavailable, 1);
    let saved = use_case.result_store.saved.lock().unwrap().clone().unwrap();
    let row = saved.get(&cve("CVE-2012-4321")).unwrap();
    assert_eq!(row.timestamp, "");
    assert_eq!(row.vuldb, VulDbRecord::not_available());
    assert_eq!(row.redhat, RedHatRecord::not_available());
}

#[tokio::test]
async fn test_missing_input_fails_without_writing() {
    let use_case = EnrichCvesUseCase::new(
        MockLibraryReader { libraries: None },
        MockResultStore::default(),
        MockPageFetcher::default(),
        NoDelay,
        SilentProgressReporter,
    );

    assert!(use_case.execute(request()).await.is_err());
    assert!(use_case.result_store.saved.lock().unwrap().is_none());
}
