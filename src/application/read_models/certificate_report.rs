//! Certificate report read model
//!
//! Field names and nesting are the exported JSON schema.

use crate::certification::domain::{FileMetadata, RiskBand, RiskCheckResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scope statement printed on every certificate
pub const VERIFICATION_SCOPE: &str = "Certificate applies ONLY to the dataset hashed at issuance. Any modification invalidates certification.";

/// Events that would trigger a claim under the certificate
pub const CLAIM_TRIGGERS: [&str; 5] = [
    "Copyright/IP infringement",
    "Dataset contamination by protected content",
    "Provenance/licensing failure",
    "Regulatory or safety breach",
    "Unauthorized or scraped data sources",
];

pub const COMMISSION_MODEL: &str =
    "Certification operates on a partner commission basis (details upon request).";

/// Top-level certificate report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateReport {
    pub certificate_id: String,
    pub version: String,
    /// UTC, `YYYY-MM-DDTHH:MM:SSZ`
    pub verified_at: String,
    pub dataset: DatasetView,
    pub overall_risk: OverallRiskView,
    pub claim_triggers: Vec<String>,
    pub commercial: CommercialView,
    pub files: Vec<FileView>,
}

/// Dataset identity and composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetView {
    pub dataset_hash: String,
    pub manifest_hash: String,
    pub total_files: usize,
    /// Total size in GiB, three decimals
    pub dataset_size_gb: f64,
    /// File count per MIME type
    pub mime_breakdown: BTreeMap<String, usize>,
    pub verification_scope: String,
}

/// Dataset-level assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallRiskView {
    pub score: u8,
    pub risk_band: RiskBand,
    pub coverage_level: String,
    pub premium_adjustment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommercialView {
    /// Not priced at issuance; always `null`
    pub certificate_fee: Option<String>,
    pub commission_model: String,
}

/// One certified file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileView {
    /// Dataset-relative path with `/` separators
    pub filename: String,
    pub sha256: String,
    pub mime_type: String,
    pub size_kb: f64,
    pub metadata: FileMetadata,
    pub api_checks: RiskCheckResult,
    /// `completed` or `degraded`
    pub check_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_error: Option<String>,
    pub score: u8,
    pub risk_band: RiskBand,
    pub coverage_level: String,
    pub premium_adjustment: String,
}

impl CertificateReport {
    /// Files whose checks were degraded
    pub fn degraded_files(&self) -> impl Iterator<Item = &FileView> {
        self.files.iter().filter(|f| f.check_error.is_some())
    }
}
