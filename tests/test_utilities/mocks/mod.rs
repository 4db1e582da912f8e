/// Mock implementations for testing
mod in_memory_result_store;
mod mock_library_reader;
mod mock_page_fetcher;
mod mock_progress_reporter;
mod recording_delay;

pub use in_memory_result_store::InMemoryResultStore;
pub use mock_library_reader::MockLibraryReader;
pub use mock_page_fetcher::MockPageFetcher;
pub use mock_progress_reporter::MockProgressReporter;
pub use recording_delay::RecordingDelay;
