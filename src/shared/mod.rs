/// Shared utilities used across all layers
///
/// Error types, the crate-wide `Result` alias and filesystem security checks.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
