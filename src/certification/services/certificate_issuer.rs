use crate::certification::domain::CertificateMetadata;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Timestamp layout used on certificates
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Name written into issued certificates
pub const TOOL_NAME: &str = "datacert";

/// CertificateIssuer service for generating certificate metadata
///
/// Every call yields a fresh certificate id; nothing here depends on the
/// dataset, so two certificates for the same files differ only in id and
/// timestamp.
pub struct CertificateIssuer;

impl CertificateIssuer {
    /// Issues certificate metadata stamped with the current UTC time
    ///
    /// # Arguments
    /// * `tool_name` - Name of the issuing tool
    /// * `tool_version` - Version of the issuing tool
    pub fn issue(tool_name: &str, tool_version: &str) -> CertificateMetadata {
        Self::issue_at(tool_name, tool_version, Utc::now())
    }

    /// Issues certificate metadata for a fixed point in time
    pub fn issue_at(
        tool_name: &str,
        tool_version: &str,
        issued_at: DateTime<Utc>,
    ) -> CertificateMetadata {
        CertificateMetadata::new(
            Self::new_certificate_id(),
            tool_name.to_string(),
            tool_version.to_string(),
            issued_at.format(TIMESTAMP_FORMAT).to_string(),
        )
    }

    /// Issues metadata with this build's name and version
    pub fn issue_default() -> CertificateMetadata {
        Self::issue(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }

    /// `CERT-XXXXXXXX-XXXX`, upper-case hex taken from a v4 UUID
    pub fn new_certificate_id() -> String {
        let hex = Uuid::new_v4().simple().to_string().to_uppercase();
        format!("CERT-{}-{}", &hex[..8], &hex[8..12])
    }

    /// Checks the `CERT-XXXXXXXX-XXXX` shape
    pub fn is_valid_certificate_id(id: &str) -> bool {
        let Some(rest) = id.strip_prefix("CERT-") else {
            return false;
        };
        let mut groups = rest.split('-');
        let is_group = |group: Option<&str>, len: usize| {
            group.is_some_and(|g| {
                g.len() == len
                    && g.chars()
                        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
            })
        };
        is_group(groups.next(), 8) && is_group(groups.next(), 4) && groups.next().is_none()
    }
}
