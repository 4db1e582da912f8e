/// Use cases module containing application business logic orchestration
mod enrich_cves;

pub use enrich_cves::EnrichCvesUseCase;
