//! Configuration file support for cve-crawl.
//!
//! Provides YAML-based configuration through `cve-crawl.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::{
    HttpClientSettings, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::enrichment::domain::{
    SourceEndpoints, DEFAULT_REDHAT_CVE_BASE_URL, DEFAULT_VULDB_BASE_URL,
};
use crate::enrichment::policies::{RetryPolicy, DEFAULT_BASE_PAUSE_SECS, DEFAULT_RETRY_COUNT};
use crate::enrichment::services::ReconcileSettings;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cve-crawl.config.yml";

/// Upper bound for `retry_count`
pub const MAX_RETRY_COUNT: u32 = 100;

/// Upper bound for `base_pause_secs` (one hour)
pub const MAX_BASE_PAUSE_SECS: u64 = 3600;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub accept_invalid_certs: Option<bool>,
    pub retry_count: Option<u32>,
    pub base_pause_secs: Option<u64>,
    pub workers: Option<u32>,
    pub vuldb_base_url: Option<String>,
    pub redhat_cve_base_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub workers: Option<u32>,
}

/// Effective settings of a run
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    pub http: HttpClientSettings,
    pub reconcile: ReconcileSettings,
}

impl CrawlerConfig {
    /// Merges file values, command-line overrides and defaults.
    pub fn resolve(file: &ConfigFile, overrides: Overrides) -> Result<Self> {
        let workers = overrides.workers.or(file.workers).unwrap_or(1);
        if workers == 0 {
            bail!("Invalid config: workers must be at least 1.");
        }

        let endpoints = SourceEndpoints::new(
            file.vuldb_base_url.as_deref().unwrap_or(DEFAULT_VULDB_BASE_URL),
            file.redhat_cve_base_url
                .as_deref()
                .unwrap_or(DEFAULT_REDHAT_CVE_BASE_URL),
        )?;

        let policy = RetryPolicy::new(
            file.retry_count.unwrap_or(DEFAULT_RETRY_COUNT),
            Duration::from_secs(file.base_pause_secs.unwrap_or(DEFAULT_BASE_PAUSE_SECS)),
        );

        Ok(Self {
            http: HttpClientSettings {
                user_agent: file
                    .user_agent
                    .clone()
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
                timeout: Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
                accept_invalid_certs: file.accept_invalid_certs.unwrap_or(true),
            },
            reconcile: ReconcileSettings {
                policy,
                endpoints,
                workers: workers as usize,
            },
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.workers == Some(0) {
        bail!(
            "Invalid config: workers must be at least 1.\n\n\
             💡 Hint: Use 'workers: 1' for a sequential crawl."
        );
    }

    if config.timeout_secs == Some(0) {
        bail!("Invalid config: timeout_secs must be greater than 0.");
    }

    if let Some(retry_count) = config.retry_count {
        if retry_count > MAX_RETRY_COUNT {
            bail!(
                "Invalid config: retry_count must be at most {} (got {}).",
                MAX_RETRY_COUNT,
                retry_count
            );
        }
    }

    if let Some(base_pause_secs) = config.base_pause_secs {
        if base_pause_secs > MAX_BASE_PAUSE_SECS {
            bail!(
                "Invalid config: base_pause_secs must be at most {} (got {}).\n\n\
                 💡 Hint: The n-th retry waits n × base_pause_secs.",
                MAX_BASE_PAUSE_SECS,
                base_pause_secs
            );
        }
    }

    if let Some(ref user_agent) = config.user_agent {
        if user_agent.trim().is_empty() {
            bail!(
                "Invalid config: user_agent must not be empty.\n\n\
                 💡 Hint: Remove the key to use the built-in browser identity."
            );
        }
    }

    for (key, value) in [
        ("vuldb_base_url", &config.vuldb_base_url),
        ("redhat_cve_base_url", &config.redhat_cve_base_url),
    ] {
        if let Some(url) = value {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!(
                    "Invalid config: {} must start with http:// or https:// (got '{}').",
                    key,
                    url
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}
