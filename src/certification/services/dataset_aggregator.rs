use crate::certification::domain::{DatasetAggregate, RiskBand, Score, ScoredFile};
use crate::certification::policies::RiskBandPolicy;

/// Score deducted from the mean for every high-risk file
const HIGH_RISK_WEIGHT: f64 = 0.4;

/// Dataset-level score with its band, before files are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateScore {
    pub score: Score,
    pub risk_band: RiskBand,
    pub high_risk_files: usize,
}

/// DatasetAggregator service combining file scores into one assessment
pub struct DatasetAggregator;

impl DatasetAggregator {
    /// Combines file scores into a dataset score
    ///
    /// An empty dataset is treated as maximally risky (0, CRITICAL).
    /// Otherwise the mean is reduced by 0.4 per file scoring below the
    /// MEDIUM floor, truncated toward zero and floored at 0.
    pub fn aggregate_scores(scores: &[Score]) -> AggregateScore {
        if scores.is_empty() {
            return AggregateScore {
                score: Score::MIN,
                risk_band: RiskBand::Critical,
                high_risk_files: 0,
            };
        }

        let floor = RiskBandPolicy::high_risk_floor();
        let total: u64 = scores.iter().map(|s| u64::from(s.value())).sum();
        let mean = total as f64 / scores.len() as f64;
        let high_risk_files = scores.iter().filter(|s| s.value() < floor).count();

        let score = Score::from_raw(mean - high_risk_files as f64 * HIGH_RISK_WEIGHT);

        AggregateScore {
            score,
            risk_band: RiskBandPolicy::band_for_score(score),
            high_risk_files,
        }
    }

    /// Aggregates scored files, keeping them in the order given
    pub fn aggregate(files: Vec<ScoredFile>) -> DatasetAggregate {
        let scores: Vec<Score> = files.iter().map(|f| f.score).collect();
        let summary = Self::aggregate_scores(&scores);

        DatasetAggregate {
            score: summary.score,
            risk_band: summary.risk_band,
            coverage_level: RiskBandPolicy::coverage_for(summary.risk_band),
            premium_adjustment: RiskBandPolicy::premium_for(summary.risk_band),
            high_risk_files: summary.high_risk_files,
            files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certification::domain::{
        CheckStatus, ContentHash, FileMetadata, RiskCheckResult, ScannedFile,
    };

    fn scores(values: &[u8]) -> Vec<Score> {
        values.iter().map(|v| Score::new(*v)).collect()
    }

    fn scored(path: &str, score: u8) -> ScoredFile {
        let score = Score::new(score);
        let band = RiskBandPolicy::band_for_score(score);
        ScoredFile {
            file: ScannedFile::new(
                path.to_string(),
                ContentHash::new("abc123").unwrap(),
                10,
                "text/plain".to_string(),
                FileMetadata::new(),
            )
            .unwrap(),
            checks: RiskCheckResult::default(),
            check_status: CheckStatus::Completed,
            score,
            risk_band: band,
            coverage_level: RiskBandPolicy::coverage_for(band),
            premium_adjustment: RiskBandPolicy::premium_for(band),
        }
    }

    #[test]
    fn test_empty_dataset_is_critical() {
        let result = DatasetAggregator::aggregate_scores(&[]);
        assert_eq!(result.score.value(), 0);
        assert_eq!(result.risk_band, RiskBand::Critical);
        assert_eq!(result.high_risk_files, 0);
    }

    #[test]
    fn test_all_perfect_files() {
        let result = DatasetAggregator::aggregate_scores(&scores(&[100, 100, 100]));
        assert_eq!(result.score.value(), 100);
        assert_eq!(result.risk_band, RiskBand::Low);
    }

    #[test]
    fn test_high_risk_penalty() {
        // mean 50, four files below 55 -> 50 - 1.6 = 48.4
        let result = DatasetAggregator::aggregate_scores(&scores(&[50, 50, 50, 50]));
        assert_eq!(result.score.value(), 48);
        assert_eq!(result.risk_band, RiskBand::High);
        assert_eq!(result.high_risk_files, 4);
    }

    #[test]
    fn test_floor_score_is_not_high_risk() {
        let result = DatasetAggregator::aggregate_scores(&scores(&[55, 55]));
        assert_eq!(result.score.value(), 55);
        assert_eq!(result.high_risk_files, 0);
    }

    #[test]
    fn test_mixed_scores_truncate() {
        // mean 68.33..., one file below 55 -> 67.93 -> 67
        let result = DatasetAggregator::aggregate_scores(&scores(&[100, 60, 45]));
        assert_eq!(result.score.value(), 67);
        assert_eq!(result.risk_band, RiskBand::Medium);
        assert_eq!(result.high_risk_files, 1);
    }

    #[test]
    fn test_never_negative() {
        let result = DatasetAggregator::aggregate_scores(&scores(&[0, 0, 0, 0, 0]));
        assert_eq!(result.score.value(), 0);
        assert_eq!(result.risk_band, RiskBand::Critical);
    }

    #[test]
    fn test_aggregate_keeps_file_order_and_recommendations() {
        let files = vec![scored("b.txt", 40), scored("a.txt", 100)];
        let aggregate = DatasetAggregator::aggregate(files);

        // mean 70, one high-risk file -> 69.6 -> 69
        assert_eq!(aggregate.score.value(), 69);
        assert_eq!(aggregate.risk_band, RiskBand::Medium);
        assert_eq!(aggregate.coverage_level, "Limited Cover");
        assert_eq!(aggregate.premium_adjustment, "+12–20%");
        assert_eq!(aggregate.file_count(), 2);
        assert_eq!(aggregate.files[0].file.path(), "b.txt");
        assert_eq!(aggregate.files[1].file.path(), "a.txt");
    }

    #[test]
    fn test_aggregate_empty_files() {
        let aggregate = DatasetAggregator::aggregate(Vec::new());
        assert_eq!(aggregate.score.value(), 0);
        assert_eq!(aggregate.risk_band, RiskBand::Critical);
        assert_eq!(aggregate.coverage_level, "No Cover");
        assert_eq!(aggregate.premium_adjustment, "Decline");
    }
}
