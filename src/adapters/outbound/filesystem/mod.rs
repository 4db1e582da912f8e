/// Filesystem adapters for the library list and the report
mod csv_library_reader;
mod csv_result_store;

pub use csv_library_reader::CsvLibraryReader;
pub use csv_result_store::{CsvResultStore, REPORT_HEADER};
