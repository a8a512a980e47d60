/// Mock implementations for testing
mod mock_file_source;
mod mock_progress_reporter;
mod mock_risk_check_provider;

pub use mock_file_source::MockFileSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_risk_check_provider::MockRiskCheckProvider;
