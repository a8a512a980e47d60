/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, risk checks, console).
pub mod file_source;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod risk_check_provider;

pub use file_source::{FileSource, ScanFailure, ScanOutcome};
pub use formatter::CertificateFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use risk_check_provider::RiskCheckProvider;
