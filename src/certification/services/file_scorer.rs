use crate::certification::domain::{
    CheckStatus, ContaminationRisk, RiskCheckResult, SafetyRisk, ScannedFile, Score, ScoredFile,
};
use crate::certification::policies::RiskBandPolicy;

const STARTING_SCORE: f64 = 100.0;
const COMPLETENESS_WEIGHT: f64 = 10.0;
const SIMILARITY_SCALE: f64 = 5.0;
const LICENSE_MISMATCH_PENALTY: f64 = 20.0;

/// Similarity tiers, most severe first: (exclusive lower bound, penalty)
const SIMILARITY_TIERS: [(f64, f64); 3] = [(0.7, 40.0), (0.4, 25.0), (0.2, 10.0)];

/// FileScorer service turning one file's risk checks into a score
///
/// Starts from 100 and subtracts independent penalties; every penalty is
/// applied, there is no early exit. The result is truncated toward zero and
/// clamped to `0..=100`.
pub struct FileScorer;

impl FileScorer {
    /// Scores a single risk-check result
    pub fn score(checks: &RiskCheckResult) -> Score {
        let checks = checks.sanitized();

        let raw = STARTING_SCORE
            - Self::completeness_penalty(checks.metadata_completeness)
            - Self::similarity_penalty(checks.similarity_score)
            - Self::contamination_penalty(checks.contamination_risk)
            - Self::license_penalty(checks.license_mismatch)
            - Self::safety_penalty(checks.safety_risk);

        Score::from_raw(raw)
    }

    /// Scores a file and attaches band, coverage and premium
    pub fn score_file(
        file: ScannedFile,
        checks: RiskCheckResult,
        check_status: CheckStatus,
    ) -> ScoredFile {
        let score = Self::score(&checks);
        let risk_band = RiskBandPolicy::band_for_score(score);

        ScoredFile {
            file,
            checks,
            check_status,
            score,
            risk_band,
            coverage_level: RiskBandPolicy::coverage_for(risk_band),
            premium_adjustment: RiskBandPolicy::premium_for(risk_band),
        }
    }

    fn completeness_penalty(completeness: f64) -> f64 {
        (1.0 - completeness) * COMPLETENESS_WEIGHT
    }

    /// Tiered above 0.2, proportional below it
    fn similarity_penalty(similarity: f64) -> f64 {
        SIMILARITY_TIERS
            .iter()
            .find(|(bound, _)| similarity > *bound)
            .map(|(_, penalty)| *penalty)
            .unwrap_or(similarity * SIMILARITY_SCALE)
    }

    fn contamination_penalty(risk: ContaminationRisk) -> f64 {
        match risk {
            ContaminationRisk::Low => 0.0,
            ContaminationRisk::Medium => 15.0,
            ContaminationRisk::High => 35.0,
            ContaminationRisk::Critical => 60.0,
        }
    }

    fn license_penalty(mismatch: bool) -> f64 {
        if mismatch {
            LICENSE_MISMATCH_PENALTY
        } else {
            0.0
        }
    }

    fn safety_penalty(risk: SafetyRisk) -> f64 {
        match risk {
            SafetyRisk::Low => 0.0,
            SafetyRisk::Medium => 15.0,
            SafetyRisk::High => 35.0,
        }
    }
}
