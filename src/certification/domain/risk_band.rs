use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualitative severity classification derived from a numeric score
///
/// Variants are declared from least to most severe, so the derived `Ord`
/// orders bands by severity (`Low < Guarded < ... < Critical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    Low,
    Guarded,
    Medium,
    High,
    Critical,
}

impl RiskBand {
    /// All bands, least severe first
    pub const ALL: [RiskBand; 5] = [
        RiskBand::Low,
        RiskBand::Guarded,
        RiskBand::Medium,
        RiskBand::High,
        RiskBand::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "LOW",
            RiskBand::Guarded => "GUARDED",
            RiskBand::Medium => "MEDIUM",
            RiskBand::High => "HIGH",
            RiskBand::Critical => "CRITICAL",
        }
    }

    /// Returns true if this band is at least as severe as `threshold`
    pub fn meets_or_exceeds(&self, threshold: RiskBand) -> bool {
        *self >= threshold
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(RiskBand::Low),
            "GUARDED" => Ok(RiskBand::Guarded),
            "MEDIUM" => Ok(RiskBand::Medium),
            "HIGH" => Ok(RiskBand::High),
            "CRITICAL" => Ok(RiskBand::Critical),
            _ => Err(format!(
                "Invalid risk band: {}. Please specify one of LOW, GUARDED, MEDIUM, HIGH, CRITICAL",
                s
            )),
        }
    }
}

/// Bounded integer risk score in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    /// Truncates toward zero and clamps into `0..=100`
    ///
    /// Non-finite input is treated as the lowest score.
    pub fn from_raw(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::MIN;
        }
        let truncated = raw.trunc().clamp(0.0, 100.0);
        Score(truncated as u8)
    }

    pub fn new(value: u8) -> Self {
        Score(value.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
