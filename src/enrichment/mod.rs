/// Enrichment core: domain model, policies and the crawl/extract/reconcile services
pub mod domain;
pub mod policies;
pub mod services;
