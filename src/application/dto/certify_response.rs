use crate::certification::domain::{CertificateMetadata, DatasetAggregate, DatasetFingerprint};
use crate::ports::outbound::ScanFailure;

/// CertifyResponse - Internal response DTO from the certify-dataset use case
///
/// Carries the domain results; adapters turn it into a `CertificateReport`
/// and render that.
#[derive(Debug, Clone)]
pub struct CertifyResponse {
    /// Certificate id, tool version and issuance time
    pub metadata: CertificateMetadata,
    /// Dataset and manifest digests
    pub fingerprint: DatasetFingerprint,
    /// Dataset score, band and the scored files in path order
    pub aggregate: DatasetAggregate,
    /// Files that were found but could not be read
    pub scan_failures: Vec<ScanFailure>,
    /// Exclude patterns that did not match any file
    pub unmatched_patterns: Vec<String>,
    /// Whether the dataset band reached the requested failure threshold
    /// Used to determine exit code for CI integration
    pub threshold_exceeded: bool,
}

impl CertifyResponse {
    pub fn new(
        metadata: CertificateMetadata,
        fingerprint: DatasetFingerprint,
        aggregate: DatasetAggregate,
        scan_failures: Vec<ScanFailure>,
        unmatched_patterns: Vec<String>,
        threshold_exceeded: bool,
    ) -> Self {
        Self {
            metadata,
            fingerprint,
            aggregate,
            scan_failures,
            unmatched_patterns,
            threshold_exceeded,
        }
    }
}
