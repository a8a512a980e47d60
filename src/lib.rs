//! datacert - dataset verification certificates
//!
//! This library fingerprints a folder of dataset files, runs risk checks on
//! every file, scores each file and the dataset as a whole, and assembles a
//! certificate report that can be rendered as JSON or Markdown. It follows a
//! hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`certification`): value objects, scoring policies and
//!   services (fingerprinting, scoring, aggregation, certificate issuance)
//! - **Application Layer** (`application`): the certify-dataset use case,
//!   DTOs, the certificate read model and adapter factories
//! - **Ports** (`ports`): interfaces to the file source, risk-check provider,
//!   formatters, presenters and progress reporting
//! - **Adapters** (`adapters`): concrete implementations of the ports
//! - **Shared** (`shared`): error types, the `Result` alias and path security
//!
//! # Example
//!
//! ```no_run
//! use datacert::prelude::*;
//!
//! # async fn certify() -> Result<()> {
//! let use_case = CertifyDatasetUseCase::new(
//!     DatasetScanner::new(),
//!     SimulatedRiskChecks::new(Some(42)),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = CertifyRequest::builder("./dataset").build()?;
//! let response = use_case.execute(request).await?;
//!
//! let report = CertificateReportBuilder::build(&response)?;
//! println!("{}", JsonFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod certification;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::checks::SimulatedRiskChecks;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DatasetScanner, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownCertificateFormatter};
    pub use crate::application::dto::{CertifyRequest, CertifyResponse, OutputFormat};
    pub use crate::application::read_models::{CertificateReport, CertificateReportBuilder};
    pub use crate::application::use_cases::CertifyDatasetUseCase;
    pub use crate::certification::domain::{
        CheckStatus, ContaminationRisk, ContentHash, DatasetAggregate, DatasetFingerprint,
        FileMetadata, RiskBand, RiskCheckResult, SafetyRisk, ScannedFile, ScoredFile, Score,
    };
    pub use crate::certification::services::{
        DatasetAggregator, FileFilter, FileScorer, Fingerprinter,
    };
    pub use crate::ports::outbound::{
        CertificateFormatter, FileSource, OutputPresenter, ProgressReporter, RiskCheckProvider,
        ScanFailure, ScanOutcome,
    };
    pub use crate::shared::Result;
}
