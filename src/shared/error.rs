use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let CI pipelines tell a risky dataset apart from a
/// broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Certificate issued, dataset band below the `--fail-on` threshold
    Success = 0,
    /// Dataset risk band reached the configured `--fail-on` threshold
    RiskThresholdExceeded = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, invalid input folder, report assembly, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RiskThresholdExceeded => write!(f, "Risk Threshold Exceeded (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dataset certification.
///
/// Uses thiserror to derive Display and Error; every variant carries a
/// hint so the CLI can print something actionable.
#[derive(Debug, Error)]
pub enum CertifyError {
    #[error("Invalid dataset path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing dataset directory with --input")]
    InvalidDatasetPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builders and value objects
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The certificate could not be assembled; nothing is emitted
    #[error("Failed to assemble certificate report\nDetails: {details}\n\n💡 Hint: No partial certificate was written. Re-run the scan after fixing the cause above")]
    ReportAssembly { details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
