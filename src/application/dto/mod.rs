/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod certify_request;
mod certify_response;
mod output_format;

pub use certify_request::{
    CertifyRequest, CertifyRequestBuilder, DEFAULT_CHECK_TIMEOUT, DEFAULT_MAX_CONCURRENT_CHECKS,
};
pub use certify_response::CertifyResponse;
pub use output_format::OutputFormat;
