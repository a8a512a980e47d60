//! Builder for constructing CertificateReport from use case results
//!
//! Assembly is all-or-nothing: any inconsistency between the parts of the
//! response is an error and no report is produced.

use super::certificate_report::{
    CertificateReport, CommercialView, DatasetView, FileView, OverallRiskView, CLAIM_TRIGGERS,
    COMMISSION_MODEL, VERIFICATION_SCOPE,
};
use crate::application::dto::CertifyResponse;
use crate::certification::domain::{
    DatasetAggregate, DatasetFingerprint, ScannedFile, Score, ScoredFile,
};
use crate::certification::policies::RiskBandPolicy;
use crate::certification::services::{CertificateIssuer, DatasetAggregator, Fingerprinter};
use crate::shared::error::CertifyError;
use crate::shared::Result;
use std::collections::{BTreeMap, HashSet};

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Builder for constructing CertificateReport from a CertifyResponse
pub struct CertificateReportBuilder;

impl CertificateReportBuilder {
    /// Assembles the certificate report
    ///
    /// # Errors
    /// Returns `CertifyError::ReportAssembly` if:
    /// - the certificate id is malformed
    /// - either dataset digest is not a 64-character lowercase hex string
    /// - two files share a relative path
    /// - a file's band disagrees with its score
    /// - the fingerprint was not computed over exactly the scored files
    /// - the dataset score or band does not follow from the file scores
    pub fn build(response: &CertifyResponse) -> Result<CertificateReport> {
        let metadata = &response.metadata;
        let aggregate = &response.aggregate;

        if !CertificateIssuer::is_valid_certificate_id(metadata.certificate_id()) {
            return Err(assembly_error(format!(
                "malformed certificate id '{}'",
                metadata.certificate_id()
            )));
        }
        Self::check_fingerprint(&response.fingerprint)?;
        Self::check_files(&aggregate.files)?;
        Self::check_fingerprint_covers_files(&response.fingerprint, &aggregate.files)?;
        Self::check_aggregate(aggregate)?;

        let files: Vec<FileView> = aggregate.files.iter().map(Self::build_file).collect();

        Ok(CertificateReport {
            certificate_id: metadata.certificate_id().to_string(),
            version: metadata.tool_version().to_string(),
            verified_at: metadata.verified_at().to_string(),
            dataset: Self::build_dataset(&response.fingerprint, &aggregate.files),
            overall_risk: OverallRiskView {
                score: aggregate.score.value(),
                risk_band: aggregate.risk_band,
                coverage_level: aggregate.coverage_level.to_string(),
                premium_adjustment: aggregate.premium_adjustment.to_string(),
            },
            claim_triggers: CLAIM_TRIGGERS.iter().map(|t| t.to_string()).collect(),
            commercial: CommercialView {
                certificate_fee: None,
                commission_model: COMMISSION_MODEL.to_string(),
            },
            files,
        })
    }

    fn build_dataset(fingerprint: &DatasetFingerprint, files: &[ScoredFile]) -> DatasetView {
        let total_bytes: u64 = files.iter().map(|f| f.file.size_bytes()).sum();

        DatasetView {
            dataset_hash: fingerprint.dataset_hash().to_string(),
            manifest_hash: fingerprint.manifest_hash().to_string(),
            total_files: files.len(),
            dataset_size_gb: round_to(total_bytes as f64 / BYTES_PER_GIB, 3),
            mime_breakdown: Self::mime_breakdown(files),
            verification_scope: VERIFICATION_SCOPE.to_string(),
        }
    }

    fn mime_breakdown(files: &[ScoredFile]) -> BTreeMap<String, usize> {
        let mut breakdown = BTreeMap::new();
        for scored in files {
            *breakdown
                .entry(scored.file.mime_type().to_string())
                .or_insert(0) += 1;
        }
        breakdown
    }

    fn build_file(scored: &ScoredFile) -> FileView {
        FileView {
            filename: scored.file.path().to_string(),
            sha256: scored.file.content_hash().to_string(),
            mime_type: scored.file.mime_type().to_string(),
            size_kb: scored.file.size_kb(),
            metadata: scored.file.metadata().clone(),
            api_checks: scored.checks.clone(),
            check_status: scored.check_status.as_str().to_string(),
            check_error: scored.check_status.reason().map(str::to_string),
            score: scored.score.value(),
            risk_band: scored.risk_band,
            coverage_level: scored.coverage_level.to_string(),
            premium_adjustment: scored.premium_adjustment.to_string(),
        }
    }

    fn check_fingerprint(fingerprint: &DatasetFingerprint) -> Result<()> {
        for (label, digest) in [
            ("dataset_hash", fingerprint.dataset_hash()),
            ("manifest_hash", fingerprint.manifest_hash()),
        ] {
            if !is_sha256_hex(digest) {
                return Err(assembly_error(format!(
                    "{} is not a SHA-256 hex digest: '{}'",
                    label, digest
                )));
            }
        }
        Ok(())
    }

    /// A mismatch means files were added, dropped or renamed after fingerprinting
    fn check_fingerprint_covers_files(
        fingerprint: &DatasetFingerprint,
        files: &[ScoredFile],
    ) -> Result<()> {
        let scanned: Vec<ScannedFile> = files.iter().map(|f| f.file.clone()).collect();
        let expected = Fingerprinter::fingerprint(&scanned);
        if expected.dataset_hash() != fingerprint.dataset_hash()
            || expected.manifest_hash() != fingerprint.manifest_hash()
        {
            return Err(assembly_error(format!(
                "fingerprint does not match the {} scored files",
                files.len()
            )));
        }
        Ok(())
    }

    fn check_aggregate(aggregate: &DatasetAggregate) -> Result<()> {
        let scores: Vec<Score> = aggregate.files.iter().map(|f| f.score).collect();
        let expected = DatasetAggregator::aggregate_scores(&scores);
        if expected.score != aggregate.score || expected.risk_band != aggregate.risk_band {
            return Err(assembly_error(format!(
                "dataset score {} ({}) does not follow from file scores (expected {} ({}))",
                aggregate.score, aggregate.risk_band, expected.score, expected.risk_band
            )));
        }
        Ok(())
    }

    fn check_files(files: &[ScoredFile]) -> Result<()> {
        let mut seen = HashSet::with_capacity(files.len());
        for scored in files {
            let path = scored.file.path();
            if !seen.insert(path) {
                return Err(assembly_error(format!("duplicate file entry '{}'", path)));
            }
            let expected = RiskBandPolicy::band_for_score(scored.score);
            if scored.risk_band != expected {
                return Err(assembly_error(format!(
                    "'{}' has score {} but band {} (expected {})",
                    path, scored.score, scored.risk_band, expected
                )));
            }
        }
        Ok(())
    }
}

fn assembly_error(details: String) -> anyhow::Error {
    CertifyError::ReportAssembly { details }.into()
}

fn is_sha256_hex(digest: &str) -> bool {
    digest.len() == 64
        && digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
