use serde::{Deserialize, Serialize};
use std::fmt;

/// Contamination risk reported by a risk check provider
///
/// Unknown labels deserialize to `Low`, matching how missing values are
/// treated by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum ContaminationRisk {
    Low,
    Medium,
    High,
    Critical,
}

impl ContaminationRisk {
    /// Case-insensitive parse; anything unrecognised is `Low`
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "MEDIUM" => ContaminationRisk::Medium,
            "HIGH" => ContaminationRisk::High,
            "CRITICAL" => ContaminationRisk::Critical,
            _ => ContaminationRisk::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContaminationRisk::Low => "LOW",
            ContaminationRisk::Medium => "MEDIUM",
            ContaminationRisk::High => "HIGH",
            ContaminationRisk::Critical => "CRITICAL",
        }
    }
}

impl From<String> for ContaminationRisk {
    fn from(label: String) -> Self {
        Self::parse_lenient(&label)
    }
}

impl fmt::Display for ContaminationRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content safety risk reported by a risk check provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum SafetyRisk {
    Low,
    Medium,
    High,
}

impl SafetyRisk {
    /// Case-insensitive parse; anything unrecognised is `Low`
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "MEDIUM" => SafetyRisk::Medium,
            "HIGH" => SafetyRisk::High,
            _ => SafetyRisk::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyRisk::Low => "LOW",
            SafetyRisk::Medium => "MEDIUM",
            SafetyRisk::High => "HIGH",
        }
    }
}

impl From<String> for SafetyRisk {
    fn from(label: String) -> Self {
        Self::parse_lenient(&label)
    }
}

impl fmt::Display for SafetyRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured result of the risk checks for one file
///
/// Field names are part of the exported report (`api_checks`). Missing
/// fields deserialize to the values a clean file would report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskCheckResult {
    pub similarity_score: f64,
    pub contamination_risk: ContaminationRisk,
    pub license_mismatch: bool,
    pub safety_risk: SafetyRisk,
    pub metadata_completeness: f64,
}

impl Default for RiskCheckResult {
    fn default() -> Self {
        Self {
            similarity_score: 0.0,
            contamination_risk: ContaminationRisk::Low,
            license_mismatch: false,
            safety_risk: SafetyRisk::Low,
            metadata_completeness: 1.0,
        }
    }
}

impl RiskCheckResult {
    /// Result recorded for a file whose provider call failed
    ///
    /// Nothing is known about the content, so completeness is zero while the
    /// categorical risks stay at their lowest level.
    pub fn degraded() -> Self {
        Self {
            metadata_completeness: 0.0,
            ..Self::default()
        }
    }

    /// Returns a copy with both ratios forced into `[0, 1]`
    ///
    /// Non-finite values are unknown: similarity becomes 0 and completeness
    /// becomes 0.
    pub fn sanitized(&self) -> Self {
        Self {
            similarity_score: unit_interval_or_zero(self.similarity_score),
            metadata_completeness: unit_interval_or_zero(self.metadata_completeness),
            ..self.clone()
        }
    }
}

fn unit_interval_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Whether the provider produced a real result for a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Completed,
    /// Provider failed or timed out; a degraded result was scored instead
    Degraded { reason: String },
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Completed => "completed",
            CheckStatus::Degraded { .. } => "degraded",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            CheckStatus::Completed => None,
            CheckStatus::Degraded { reason } => Some(reason),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, CheckStatus::Degraded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contamination_parse_lenient() {
        assert_eq!(ContaminationRisk::parse_lenient("high"), ContaminationRisk::High);
        assert_eq!(
            ContaminationRisk::parse_lenient("Critical"),
            ContaminationRisk::Critical
        );
        assert_eq!(ContaminationRisk::parse_lenient("???"), ContaminationRisk::Low);
    }

    #[test]
    fn test_safety_parse_lenient() {
        assert_eq!(SafetyRisk::parse_lenient("medium"), SafetyRisk::Medium);
        assert_eq!(SafetyRisk::parse_lenient("CRITICAL"), SafetyRisk::Low);
    }

    #[test]
    fn test_result_deserializes_with_missing_and_unknown_fields() {
        let json = r#"{"similarity_score": 0.3, "contamination_risk": "medium", "safety_risk": "bogus"}"#;
        let result: RiskCheckResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.similarity_score, 0.3);
        assert_eq!(result.contamination_risk, ContaminationRisk::Medium);
        assert!(!result.license_mismatch);
        assert_eq!(result.safety_risk, SafetyRisk::Low);
        assert_eq!(result.metadata_completeness, 1.0);
    }

    #[test]
    fn test_result_serializes_report_field_names() {
        let value = serde_json::to_value(RiskCheckResult::default()).unwrap();
        assert_eq!(value["contamination_risk"], "LOW");
        assert_eq!(value["safety_risk"], "LOW");
        assert_eq!(value["license_mismatch"], false);
        assert!(value.get("similarity_score").is_some());
        assert!(value.get("metadata_completeness").is_some());
    }

    #[test]
    fn test_sanitized_clamps_and_zeroes_non_finite() {
        let raw = RiskCheckResult {
            similarity_score: f64::NAN,
            metadata_completeness: 1.7,
            ..RiskCheckResult::default()
        };
        let clean = raw.sanitized();
        assert_eq!(clean.similarity_score, 0.0);
        assert_eq!(clean.metadata_completeness, 1.0);

        let negative = RiskCheckResult {
            similarity_score: -0.4,
            metadata_completeness: f64::INFINITY,
            ..RiskCheckResult::default()
        };
        let clean = negative.sanitized();
        assert_eq!(clean.similarity_score, 0.0);
        assert_eq!(clean.metadata_completeness, 0.0);
    }

    #[test]
    fn test_degraded_result() {
        let degraded = RiskCheckResult::degraded();
        assert_eq!(degraded.metadata_completeness, 0.0);
        assert_eq!(degraded.contamination_risk, ContaminationRisk::Low);
        assert_eq!(degraded.safety_risk, SafetyRisk::Low);
        assert!(!degraded.license_mismatch);
    }

    #[test]
    fn test_check_status() {
        let status = CheckStatus::Degraded {
            reason: "timed out".to_string(),
        };
        assert!(status.is_degraded());
        assert_eq!(status.as_str(), "degraded");
        assert_eq!(status.reason(), Some("timed out"));
        assert_eq!(CheckStatus::Completed.reason(), None);
    }
}
