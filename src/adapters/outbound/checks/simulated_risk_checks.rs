use crate::certification::domain::{
    ContaminationRisk, FileMetadata, RiskCheckResult, SafetyRisk,
};
use crate::ports::outbound::RiskCheckProvider;
use crate::shared::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use std::ops::RangeInclusive;

/// Similarity above which a media file is flagged for licensing review
const LICENSE_SIMILARITY_THRESHOLD: f64 = 0.35;

const IMAGE_SIMILARITY: RangeInclusive<f64> = 0.05..=0.35;
const MEDIA_SIMILARITY: RangeInclusive<f64> = 0.10..=0.45;
const PDF_SIMILARITY: RangeInclusive<f64> = 0.02..=0.20;
const TEXT_SIMILARITY: RangeInclusive<f64> = 0.00..=0.10;
const OTHER_SIMILARITY: RangeInclusive<f64> = 0.05..=0.25;
const COMPLETENESS_RANGE: RangeInclusive<f64> = 0.75..=1.00;

/// SimulatedRiskChecks adapter producing plausible, randomized check results
///
/// Implements the RiskCheckProvider port without any external service.
/// Value ranges depend on the MIME family. With a seed, every request gets
/// its own RNG derived from the seed and the request contents, so results
/// are reproducible no matter in which order concurrent checks run.
#[derive(Debug, Clone, Default)]
pub struct SimulatedRiskChecks {
    seed: Option<u64>,
}

impl SimulatedRiskChecks {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng_for(&self, mime_type: &str, metadata: &FileMetadata) -> StdRng {
        let Some(seed) = self.seed else {
            return StdRng::from_entropy();
        };

        let mut hasher = Sha256::new();
        hasher.update(seed.to_le_bytes());
        hasher.update(mime_type.as_bytes());
        hasher.update(serde_json::to_vec(metadata).unwrap_or_default());
        let mut request_seed = [0u8; 32];
        request_seed.copy_from_slice(&hasher.finalize());
        StdRng::from_seed(request_seed)
    }

    /// Runs all checks for one file with the given RNG
    pub fn simulate<R: Rng + ?Sized>(
        rng: &mut R,
        mime_type: &str,
        metadata: &FileMetadata,
    ) -> RiskCheckResult {
        let mime = mime_type.to_lowercase();
        let similarity_score = Self::similarity_score(rng, &mime);

        RiskCheckResult {
            similarity_score,
            contamination_risk: Self::contamination_risk(similarity_score),
            license_mismatch: Self::license_mismatch(&mime, metadata, similarity_score),
            safety_risk: Self::safety_risk(rng, &mime),
            metadata_completeness: round2(rng.gen_range(COMPLETENESS_RANGE)),
        }
    }

    fn similarity_score<R: Rng + ?Sized>(rng: &mut R, mime: &str) -> f64 {
        let range = if mime.contains("image") {
            IMAGE_SIMILARITY
        } else if mime.contains("audio") || mime.contains("video") {
            MEDIA_SIMILARITY
        } else if mime.contains("pdf") {
            PDF_SIMILARITY
        } else if mime.contains("text") || mime.ends_with("json") {
            TEXT_SIMILARITY
        } else {
            OTHER_SIMILARITY
        };
        round2(rng.gen_range(range))
    }

    /// Derived from similarity alone
    pub fn contamination_risk(similarity: f64) -> ContaminationRisk {
        if similarity > 0.7 {
            ContaminationRisk::Critical
        } else if similarity > 0.4 {
            ContaminationRisk::High
        } else if similarity > 0.2 {
            ContaminationRisk::Medium
        } else {
            ContaminationRisk::Low
        }
    }

    /// Missing metadata always counts as a mismatch; otherwise only media
    /// with notable similarity is flagged
    pub fn license_mismatch(mime: &str, metadata: &FileMetadata, similarity: f64) -> bool {
        if metadata.is_empty() {
            return true;
        }
        let media = mime.contains("image") || mime.contains("audio") || mime.contains("pdf");
        similarity > LICENSE_SIMILARITY_THRESHOLD && media
    }

    fn safety_risk<R: Rng + ?Sized>(rng: &mut R, mime: &str) -> SafetyRisk {
        if !(mime.contains("audio") || mime.contains("video")) {
            return SafetyRisk::Low;
        }
        let roll: f64 = rng.gen();
        if roll < 0.8 {
            SafetyRisk::Low
        } else if roll < 0.95 {
            SafetyRisk::Medium
        } else {
            SafetyRisk::High
        }
    }
}

#[async_trait]
impl RiskCheckProvider for SimulatedRiskChecks {
    async fn check(&self, mime_type: &str, metadata: &FileMetadata) -> Result<RiskCheckResult> {
        let mut rng = self.rng_for(mime_type, metadata);
        Ok(Self::simulate(&mut rng, mime_type, metadata))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> FileMetadata {
        let mut metadata = FileMetadata::new();
        metadata.insert("extension".to_string(), ".bin".into());
        metadata
    }

    fn sample(mime: &str, runs: u64) -> Vec<RiskCheckResult> {
        (0..runs)
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(i);
                SimulatedRiskChecks::simulate(&mut rng, mime, &metadata())
            })
            .collect()
    }

    fn assert_similarity_within(mime: &str, range: RangeInclusive<f64>) {
        for result in sample(mime, 200) {
            assert!(
                range.contains(&result.similarity_score),
                "{} similarity {} outside {:?}",
                mime,
                result.similarity_score,
                range
            );
        }
    }

    #[test]
    fn test_similarity_ranges_by_mime_family() {
        assert_similarity_within("image/png", 0.05..=0.35);
        assert_similarity_within("audio/wav", 0.10..=0.45);
        assert_similarity_within("video/mp4", 0.10..=0.45);
        assert_similarity_within("application/pdf", 0.02..=0.20);
        assert_similarity_within("text/plain", 0.0..=0.10);
        assert_similarity_within("application/json", 0.0..=0.10);
        assert_similarity_within("application/zip", 0.05..=0.25);
    }

    #[test]
    fn test_values_are_rounded_to_two_decimals() {
        for result in sample("image/jpeg", 100) {
            let scaled = result.similarity_score * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
            let scaled = result.metadata_completeness * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
            assert!((0.75..=1.0).contains(&result.metadata_completeness));
        }
    }

    #[test]
    fn test_contamination_follows_similarity() {
        assert_eq!(SimulatedRiskChecks::contamination_risk(0.05), ContaminationRisk::Low);
        assert_eq!(SimulatedRiskChecks::contamination_risk(0.2), ContaminationRisk::Low);
        assert_eq!(SimulatedRiskChecks::contamination_risk(0.21), ContaminationRisk::Medium);
        assert_eq!(SimulatedRiskChecks::contamination_risk(0.41), ContaminationRisk::High);
        assert_eq!(SimulatedRiskChecks::contamination_risk(0.71), ContaminationRisk::Critical);

        for result in sample("audio/mpeg", 100) {
            assert_eq!(
                result.contamination_risk,
                SimulatedRiskChecks::contamination_risk(result.similarity_score)
            );
        }
    }

    #[test]
    fn test_license_mismatch_rules() {
        let empty = FileMetadata::new();
        assert!(SimulatedRiskChecks::license_mismatch("text/plain", &empty, 0.0));
        assert!(SimulatedRiskChecks::license_mismatch("image/png", &metadata(), 0.36));
        assert!(SimulatedRiskChecks::license_mismatch("application/pdf", &metadata(), 0.4));
        assert!(!SimulatedRiskChecks::license_mismatch("image/png", &metadata(), 0.35));
        assert!(!SimulatedRiskChecks::license_mismatch("video/mp4", &metadata(), 0.45));
        assert!(!SimulatedRiskChecks::license_mismatch("text/plain", &metadata(), 0.9));
    }

    #[test]
    fn test_safety_only_varies_for_audio_and_video() {
        assert!(sample("text/plain", 200)
            .iter()
            .all(|r| r.safety_risk == SafetyRisk::Low));
        assert!(sample("image/png", 200)
            .iter()
            .all(|r| r.safety_risk == SafetyRisk::Low));

        let audio = sample("audio/wav", 400);
        assert!(audio.iter().any(|r| r.safety_risk != SafetyRisk::Low));
        assert!(audio.iter().any(|r| r.safety_risk == SafetyRisk::Low));
    }

    #[tokio::test]
    async fn test_seeded_checks_are_reproducible() {
        let provider = SimulatedRiskChecks::new(Some(42));
        let first = provider.check("image/png", &metadata()).await.unwrap();
        let second = provider.check("image/png", &metadata()).await.unwrap();
        assert_eq!(first, second);

        let again = SimulatedRiskChecks::new(Some(42))
            .check("image/png", &metadata())
            .await
            .unwrap();
        assert_eq!(first, again);
    }

    #[tokio::test]
    async fn test_seeded_checks_depend_on_request() {
        let provider = SimulatedRiskChecks::new(Some(7));
        let results: Vec<RiskCheckResult> = futures::future::join_all((0..20).map(|i| {
            let provider = provider.clone();
            async move {
                let mut metadata = metadata();
                metadata.insert("size_bytes".to_string(), (i as i64).into());
                provider.check("audio/wav", &metadata).await.unwrap()
            }
        }))
        .await;

        let first = &results[0];
        assert!(results.iter().any(|r| r != first));
    }

    #[tokio::test]
    async fn test_unseeded_provider_returns_valid_results() {
        let provider = SimulatedRiskChecks::default();
        assert_eq!(provider.seed(), None);

        let result = provider.check("application/pdf", &metadata()).await.unwrap();
        assert!((0.02..=0.20).contains(&result.similarity_score));
        assert!(!result.license_mismatch);
    }
}
