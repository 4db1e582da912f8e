//! Diagnostic logging through `tracing`
//!
//! Log lines go to stderr next to the progress output; the report itself is
//! only ever written to the output file.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "cve_crawl=info";
const VERBOSE_FILTER: &str = "cve_crawl=debug";

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this more than once
/// keeps the first subscriber.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
