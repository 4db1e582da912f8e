/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the enrichment core uses
/// to interact with external systems (network, clock, file system, console).
pub mod delay;
pub mod library_list_reader;
pub mod page_fetcher;
pub mod progress_reporter;
pub mod result_store_repository;

pub use delay::Delay;
pub use library_list_reader::LibraryListReader;
pub use page_fetcher::{FetchError, HttpMethod, PageFetcher, PageRequest};
pub use progress_reporter::ProgressReporter;
pub use result_store_repository::ResultStoreRepository;
