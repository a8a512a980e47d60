use crate::application::read_models::CertificateReport;
use crate::ports::outbound::CertificateFormatter;
use crate::shared::Result;

/// JsonFormatter adapter writing the certificate report as pretty JSON
///
/// The report type is the exported schema, so this is a direct
/// serialization with no intermediate structure.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateFormatter for JsonFormatter {
    fn format(&self, report: &CertificateReport) -> Result<String> {
        let json = serde_json::to_string_pretty(report)?;
        Ok(json)
    }
}
