use super::dataset_file::ScoredFile;
use super::risk_band::{RiskBand, Score};

/// Dataset-level risk assessment derived from file scores
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetAggregate {
    pub score: Score,
    pub risk_band: RiskBand,
    pub coverage_level: &'static str,
    pub premium_adjustment: &'static str,
    /// Number of files scoring below the MEDIUM floor
    pub high_risk_files: usize,
    /// Scored files in dataset order
    pub files: Vec<ScoredFile>,
}

impl DatasetAggregate {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of files that were scored from a degraded check result
    pub fn degraded_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.check_status.is_degraded())
            .count()
    }
}
