use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownCertificateFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CertificateFormatter;

/// Factory for creating certificate formatters
///
/// Selects the formatter adapter for an output format so callers only deal
/// with the `CertificateFormatter` port.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use datacert::application::dto::OutputFormat;
    /// use datacert::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn CertificateFormatter> {
        Self::create_with_verification_url(format, None)
    }

    /// Like [`FormatterFactory::create`], with a verification link base for
    /// Markdown certificates. JSON output ignores it.
    pub fn create_with_verification_url(
        format: OutputFormat,
        verification_base_url: Option<&str>,
    ) -> Box<dyn CertificateFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => {
                let formatter = MarkdownCertificateFormatter::new();
                Box::new(match verification_base_url {
                    Some(base) => formatter.with_verification_base_url(base),
                    None => formatter,
                })
            }
        }
    }

    /// Formatter for the standalone certificate document (`--certificate`)
    pub fn create_certificate(
        verification_base_url: Option<&str>,
    ) -> Box<dyn CertificateFormatter> {
        Self::create_with_verification_url(OutputFormat::Markdown, verification_base_url)
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use datacert::application::dto::OutputFormat;
    /// use datacert::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Writing JSON certificate report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Writing JSON certificate report...",
            OutputFormat::Markdown => "📝 Writing Markdown certificate...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_report;

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format(&sample_report())
            .unwrap();
        assert!(output.trim_start().starts_with('{'));
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
    }

    #[test]
    fn test_create_markdown_formatter() {
        let output = FormatterFactory::create(OutputFormat::Markdown)
            .format(&sample_report())
            .unwrap();
        assert!(output.starts_with("# Dataset Verification Certificate"));
    }

    #[test]
    fn test_certificate_formatter_is_markdown() {
        let output = FormatterFactory::create_certificate(None)
            .format(&sample_report())
            .unwrap();
        assert!(output.contains("## Claim Triggers"));
        assert!(!output.contains("**Verify:**"));
    }

    #[test]
    fn test_certificate_formatter_with_verification_url() {
        let output = FormatterFactory::create_certificate(Some("https://verify.example.com"))
            .format(&sample_report())
            .unwrap();
        assert!(output.contains("<https://verify.example.com/CERT-0A1B2C3D-4E5F>"));
    }

    #[test]
    fn test_json_ignores_verification_url() {
        let output = FormatterFactory::create_with_verification_url(
            OutputFormat::Json,
            Some("https://verify.example.com"),
        )
        .format(&sample_report())
        .unwrap();
        assert!(!output.contains("verify.example.com"));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Writing JSON certificate report..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Markdown),
            "📝 Writing Markdown certificate..."
        );
    }
}
