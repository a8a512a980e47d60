use crate::application::read_models::{
    CertificateReport, CommercialView, DatasetView, FileView, OverallRiskView,
};
use crate::certification::domain::RiskBand;
use crate::ports::outbound::CertificateFormatter;
use crate::shared::Result;

/// Number of files listed in the certificate extract
pub const FILE_EXTRACT_LIMIT: usize = 25;

/// Leading hex characters of a file hash shown in the extract
const SHORT_HASH_LEN: usize = 12;

const SUMMARY_TABLE_HEADER: &str = "| Field | Value |\n";
const SUMMARY_TABLE_SEPARATOR: &str = "|-------|-------|\n";

const FILE_TABLE_HEADER: &str = "| Filename | Hash | Score | Risk | Cover |\n";
const FILE_TABLE_SEPARATOR: &str = "|----------|------|-------|------|-------|\n";

/// MarkdownCertificateFormatter adapter rendering the human-readable certificate
///
/// Produces a document with the certificate header, dataset identity,
/// overall assessment, claim triggers, a file extract limited to the first
/// [`FILE_EXTRACT_LIMIT`] files, and commercial terms.
pub struct MarkdownCertificateFormatter {
    file_limit: usize,
    verification_base_url: Option<String>,
}

impl MarkdownCertificateFormatter {
    pub fn new() -> Self {
        Self {
            file_limit: FILE_EXTRACT_LIMIT,
            verification_base_url: None,
        }
    }

    /// Lists at most `file_limit` files in the extract
    pub fn with_file_limit(file_limit: usize) -> Self {
        Self {
            file_limit,
            verification_base_url: None,
        }
    }

    /// Prints `<base>/<certificate id>` as the verification link in the header
    pub fn with_verification_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.verification_base_url = Some(base_url.into());
        self
    }

    fn verification_url(&self, certificate_id: &str) -> Option<String> {
        self.verification_base_url
            .as_deref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), certificate_id))
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }

    fn band_marker(band: RiskBand) -> &'static str {
        match band {
            RiskBand::Low => "🟢",
            RiskBand::Guarded => "🔵",
            RiskBand::Medium => "🟡",
            RiskBand::High => "🟠",
            RiskBand::Critical => "🔴",
        }
    }

    fn short_hash(hash: &str) -> String {
        match hash.get(..SHORT_HASH_LEN) {
            Some(prefix) if hash.len() > SHORT_HASH_LEN => format!("{}...", prefix),
            _ => hash.to_string(),
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownCertificateFormatter {
    fn render_header(&self, output: &mut String, report: &CertificateReport) {
        output.push_str("# Dataset Verification Certificate\n\n");
        output.push_str(&format!("Version {}\n\n", report.version));
        output.push_str(&format!("**Certificate ID:** {}  \n", report.certificate_id));
        output.push_str(&format!("**Issued:** {}", report.verified_at));
        if let Some(url) = self.verification_url(&report.certificate_id) {
            output.push_str(&format!("  \n**Verify:** <{}>", url));
        }
        output.push_str("\n\n");
    }

    fn render_dataset(&self, output: &mut String, dataset: &DatasetView) {
        output.push_str("## Dataset\n\n");
        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);
        output.push_str(&format!("| Dataset Hash | `{}` |\n", dataset.dataset_hash));
        output.push_str(&format!("| Manifest Hash | `{}` |\n", dataset.manifest_hash));
        output.push_str(&format!("| Total Files | {} |\n", dataset.total_files));
        output.push_str(&format!(
            "| Dataset Size (GB) | {:.3} |\n",
            dataset.dataset_size_gb
        ));
        output.push('\n');

        output.push_str("### MIME Breakdown\n\n");
        if dataset.mime_breakdown.is_empty() {
            output.push_str("*No files*\n\n");
        } else {
            for (mime_type, count) in &dataset.mime_breakdown {
                output.push_str(&format!(
                    "- {}: {}\n",
                    Self::escape_markdown_table_cell(mime_type),
                    count
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!("> {}\n\n", dataset.verification_scope));
    }

    fn render_overall_risk(&self, output: &mut String, overall: &OverallRiskView) {
        output.push_str("## Overall Risk\n\n");
        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);
        output.push_str(&format!("| Overall Score | {} |\n", overall.score));
        output.push_str(&format!(
            "| Risk Band | {} {} |\n",
            Self::band_marker(overall.risk_band),
            overall.risk_band.as_str()
        ));
        output.push_str(&format!("| Coverage Level | {} |\n", overall.coverage_level));
        output.push_str(&format!(
            "| Premium Adjustment | {} |\n",
            overall.premium_adjustment
        ));
        output.push('\n');
    }

    fn render_claim_triggers(&self, output: &mut String, triggers: &[String]) {
        output.push_str("## Claim Triggers\n\n");
        for trigger in triggers {
            output.push_str(&format!("- {}\n", trigger));
        }
        output.push('\n');
    }

    fn render_files(&self, output: &mut String, files: &[FileView]) {
        output.push_str("## File Breakdown (Extract)\n\n");

        if files.is_empty() {
            output.push_str("*No files were certified*\n\n");
            return;
        }

        output.push_str(FILE_TABLE_HEADER);
        output.push_str(FILE_TABLE_SEPARATOR);
        for file in files.iter().take(self.file_limit) {
            self.render_file_row(output, file);
        }
        output.push('\n');

        if files.len() > self.file_limit {
            output.push_str(&format!(
                "*Showing {} of {} files. The JSON report lists every file.*\n\n",
                self.file_limit,
                files.len()
            ));
        }

        let degraded: Vec<&FileView> = files.iter().filter(|f| f.check_error.is_some()).collect();
        if !degraded.is_empty() {
            output.push_str(&format!(
                "### ⚠️Warning {} {} could not be fully checked\n\n",
                degraded.len(),
                if degraded.len() == 1 { "file" } else { "files" }
            ));
            for file in degraded {
                output.push_str(&format!(
                    "- {}: {}\n",
                    Self::escape_markdown_table_cell(&file.filename),
                    file.check_error.as_deref().unwrap_or_default()
                ));
            }
            output.push('\n');
        }
    }

    fn render_file_row(&self, output: &mut String, file: &FileView) {
        output.push_str(&format!(
            "| {} | `{}` | {} | {} {} | {} |\n",
            Self::escape_markdown_table_cell(&file.filename),
            Self::short_hash(&file.sha256),
            file.score,
            Self::band_marker(file.risk_band),
            file.risk_band.as_str(),
            Self::escape_markdown_table_cell(&file.coverage_level),
        ));
    }

    fn render_commercial(
        &self,
        output: &mut String,
        commercial: &CommercialView,
        overall: &OverallRiskView,
    ) {
        output.push_str("## Commercial Information\n\n");
        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);
        output.push_str(&format!(
            "| Certificate Fee | {} |\n",
            commercial.certificate_fee.as_deref().unwrap_or("N/A")
        ));
        output.push_str(&format!(
            "| Premium Adjustment | {} |\n",
            overall.premium_adjustment
        ));
        output.push_str(&format!(
            "| Commission Model | {} |\n",
            Self::escape_markdown_table_cell(&commercial.commission_model)
        ));
        output.push('\n');
    }

    fn render_footer(&self, output: &mut String) {
        output.push_str("---\n\n");
        output.push_str("*Prototype certificate. Not for production use.*\n");
    }
}

impl Default for MarkdownCertificateFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateFormatter for MarkdownCertificateFormatter {
    fn format(&self, report: &CertificateReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_dataset(&mut output, &report.dataset);
        self.render_overall_risk(&mut output, &report.overall_risk);
        self.render_claim_triggers(&mut output, &report.claim_triggers);
        self.render_files(&mut output, &report.files);
        self.render_commercial(&mut output, &report.commercial, &report.overall_risk);
        self.render_footer(&mut output);

        Ok(output)
    }
}
