use chrono::Utc;
use cve_crawl::adapters::outbound::console::StderrProgressReporter;
use cve_crawl::adapters::outbound::filesystem::{CsvLibraryReader, CsvResultStore};
use cve_crawl::adapters::outbound::network::{CachingPageFetcher, HttpPageFetcher};
use cve_crawl::adapters::outbound::timing::TokioDelay;
use cve_crawl::application::dto::EnrichmentRequest;
use cve_crawl::application::use_cases::EnrichCvesUseCase;
use cve_crawl::cli::Args;
use cve_crawl::config::{
    discover_config, load_config_from_path, ConfigFile, CrawlerConfig, Overrides,
};
use cve_crawl::logging::init_logging;
use cve_crawl::shared::error::ExitCode;
use cve_crawl::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config_file = load_config(args.config.as_deref())?;
    let config = CrawlerConfig::resolve(&config_file, Overrides { workers: args.workers })?;

    // Create adapters (Dependency Injection)
    let page_fetcher = CachingPageFetcher::new(HttpPageFetcher::new(&config.http)?);
    let use_case = EnrichCvesUseCase::new(
        CsvLibraryReader::new(),
        CsvResultStore::new(),
        page_fetcher,
        TokioDelay,
        StderrProgressReporter::new(),
    );

    let timestamp = Utc::now().timestamp_millis().to_string();
    let request = EnrichmentRequest::new(args.input, args.output, timestamp, config.reconcile);

    use_case.execute(request).await?;
    Ok(())
}

/// Explicit config path, else `cve-crawl.config.yml` in the working directory
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}
