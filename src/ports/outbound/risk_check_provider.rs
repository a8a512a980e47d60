use crate::certification::domain::{FileMetadata, RiskCheckResult};
use crate::shared::Result;
use async_trait::async_trait;

/// RiskCheckProvider port for per-file content risk checks
///
/// This port abstracts the similarity, contamination, licensing and safety
/// checks run against each file. Implementations may be remote services or
/// local simulations.
///
/// # Async Support
/// Checks for many files run concurrently, so implementations must be
/// `Send + Sync`.
#[async_trait]
pub trait RiskCheckProvider: Send + Sync {
    /// Runs the risk checks for one file
    ///
    /// # Arguments
    /// * `mime_type` - Detected MIME type of the file
    /// * `metadata` - Metadata extracted from the file (may be empty)
    ///
    /// # Returns
    /// The structured check result
    ///
    /// # Errors
    /// Returns an error if the checks could not be carried out. The caller
    /// records a degraded result for that file and continues.
    async fn check(&self, mime_type: &str, metadata: &FileMetadata) -> Result<RiskCheckResult>;
}
