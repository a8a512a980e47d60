/// CertificateMetadata value object describing one issued certificate
#[derive(Debug, Clone)]
pub struct CertificateMetadata {
    certificate_id: String,
    tool_name: String,
    tool_version: String,
    verified_at: String,
}

impl CertificateMetadata {
    pub fn new(
        certificate_id: String,
        tool_name: String,
        tool_version: String,
        verified_at: String,
    ) -> Self {
        Self {
            certificate_id,
            tool_name,
            tool_version,
            verified_at,
        }
    }

    pub fn certificate_id(&self) -> &str {
        &self.certificate_id
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// UTC issuance timestamp, `YYYY-MM-DDTHH:MM:SSZ`
    pub fn verified_at(&self) -> &str {
        &self.verified_at
    }
}
