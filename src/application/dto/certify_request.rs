use crate::certification::domain::RiskBand;
use crate::shared::error::CertifyError;
use crate::shared::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Default number of risk checks allowed in flight at once
pub const DEFAULT_MAX_CONCURRENT_CHECKS: usize = 8;

/// Default per-file risk check timeout
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on in-flight risk checks
const MAX_CONCURRENT_CHECKS_LIMIT: usize = 256;

/// CertifyRequest - Internal request DTO for the certify-dataset use case
#[derive(Debug, Clone)]
pub struct CertifyRequest {
    /// Dataset folder to certify
    pub dataset_path: PathBuf,
    /// Wildcard patterns for files to leave out of the dataset
    pub exclude_patterns: Vec<String>,
    /// Number of risk checks allowed in flight at once
    pub max_concurrent_checks: usize,
    /// Time allowed for one file's risk checks
    pub check_timeout: Duration,
    /// Dataset band at or above which the run counts as failed
    pub fail_on: Option<RiskBand>,
}

impl CertifyRequest {
    /// Creates a builder for the given dataset folder
    pub fn builder(dataset_path: impl Into<PathBuf>) -> CertifyRequestBuilder {
        CertifyRequestBuilder::new(dataset_path)
    }
}

/// Builder for `CertifyRequest`
///
/// Unset options fall back to the defaults; `build` validates the limits.
#[derive(Debug, Clone)]
pub struct CertifyRequestBuilder {
    dataset_path: PathBuf,
    exclude_patterns: Vec<String>,
    max_concurrent_checks: usize,
    check_timeout: Duration,
    fail_on: Option<RiskBand>,
}

impl CertifyRequestBuilder {
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            exclude_patterns: Vec::new(),
            max_concurrent_checks: DEFAULT_MAX_CONCURRENT_CHECKS,
            check_timeout: DEFAULT_CHECK_TIMEOUT,
            fail_on: None,
        }
    }

    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn max_concurrent_checks(mut self, limit: usize) -> Self {
        self.max_concurrent_checks = limit;
        self
    }

    pub fn check_timeout(mut self, timeout: Duration) -> Self {
        self.check_timeout = timeout;
        self
    }

    pub fn fail_on(mut self, band: Option<RiskBand>) -> Self {
        self.fail_on = band;
        self
    }

    /// Validates and builds the request
    ///
    /// # Errors
    /// Returns `CertifyError::Validation` when the concurrency limit is zero
    /// or above the allowed maximum, or the timeout is zero.
    pub fn build(self) -> Result<CertifyRequest> {
        if self.max_concurrent_checks == 0 || self.max_concurrent_checks > MAX_CONCURRENT_CHECKS_LIMIT
        {
            return Err(CertifyError::Validation {
                message: format!(
                    "max_concurrent_checks must be between 1 and {} (got {})",
                    MAX_CONCURRENT_CHECKS_LIMIT, self.max_concurrent_checks
                ),
            }
            .into());
        }
        if self.check_timeout.is_zero() {
            return Err(CertifyError::Validation {
                message: "check timeout must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(CertifyRequest {
            dataset_path: self.dataset_path,
            exclude_patterns: self.exclude_patterns,
            max_concurrent_checks: self.max_concurrent_checks,
            check_timeout: self.check_timeout,
            fail_on: self.fail_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = CertifyRequest::builder("/data").build().unwrap();

        assert_eq!(request.dataset_path, PathBuf::from("/data"));
        assert!(request.exclude_patterns.is_empty());
        assert_eq!(request.max_concurrent_checks, 8);
        assert_eq!(request.check_timeout, Duration::from_secs(30));
        assert_eq!(request.fail_on, None);
    }

    #[test]
    fn test_builder_overrides() {
        let request = CertifyRequest::builder("/data")
            .exclude_patterns(vec!["*.tmp".to_string()])
            .max_concurrent_checks(2)
            .check_timeout(Duration::from_millis(250))
            .fail_on(Some(RiskBand::High))
            .build()
            .unwrap();

        assert_eq!(request.exclude_patterns, vec!["*.tmp".to_string()]);
        assert_eq!(request.max_concurrent_checks, 2);
        assert_eq!(request.check_timeout, Duration::from_millis(250));
        assert_eq!(request.fail_on, Some(RiskBand::High));
    }

    #[test]
    fn test_builder_rejects_zero_concurrency() {
        let err = CertifyRequest::builder("/data")
            .max_concurrent_checks(0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("max_concurrent_checks"));
    }

    #[test]
    fn test_builder_rejects_excessive_concurrency() {
        assert!(CertifyRequest::builder("/data")
            .max_concurrent_checks(256)
            .build()
            .is_ok());
        assert!(CertifyRequest::builder("/data")
            .max_concurrent_checks(257)
            .build()
            .is_err());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let err = CertifyRequest::builder("/data")
            .check_timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }
}
