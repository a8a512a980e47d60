use crate::application::read_models::CertificateReport;
use crate::shared::Result;

/// CertificateFormatter port for rendering a certificate report
///
/// Every output format renders the same `CertificateReport`.
pub trait CertificateFormatter {
    /// Renders the report
    ///
    /// # Arguments
    /// * `report` - Fully assembled certificate report
    ///
    /// # Returns
    /// Rendered document as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &CertificateReport) -> Result<String>;
}
