/// Data Transfer Objects for application layer
///
/// DTOs carry run parameters and results between the CLI and the use case,
/// keeping the enrichment layer unaware of argument parsing.
mod enrichment_request;
mod enrichment_response;

pub use enrichment_request::EnrichmentRequest;
pub use enrichment_response::EnrichmentResponse;
