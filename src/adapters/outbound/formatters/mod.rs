/// Formatter adapters for the certificate output formats
mod json_formatter;
mod markdown_certificate_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_certificate_formatter::MarkdownCertificateFormatter;
