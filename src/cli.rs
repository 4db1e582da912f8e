use clap::Parser;
use std::path::PathBuf;

/// Enrich a list of CVE identifiers with VulDB and Red Hat Bugzilla metadata
#[derive(Parser, Debug)]
#[command(name = "cve-crawl")]
#[command(version)]
#[command(
    about = "Enrich a list of CVE identifiers with VulDB and Red Hat Bugzilla metadata",
    long_about = "Reads 'library;CVE-ID' lines, reuses rows of the previous report that already \
                  point at a VulDB detail page, crawls VulDB and Red Hat for the rest and rewrites the \
                  semicolon-delimited report."
)]
pub struct Args {
    /// Library list with one 'library;CVE-ID' pair per line
    #[arg(short, long, default_value = "libs.csv")]
    pub input: PathBuf,

    /// Report file; read as the previous report and rewritten at the end
    #[arg(short, long, default_value = "libs_updated.csv")]
    pub output: PathBuf,

    /// Config file (defaults to ./cve-crawl.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of identifiers crawled concurrently
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub workers: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
