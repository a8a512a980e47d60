use crate::certification::domain::{RiskBand, Score};

/// Score floors per band, evaluated from least to most severe
const BAND_THRESHOLDS: [(u8, RiskBand); 4] = [
    (90, RiskBand::Low),
    (75, RiskBand::Guarded),
    (55, RiskBand::Medium),
    (35, RiskBand::High),
];

const COVERAGE_TABLE: [(RiskBand, &str); 5] = [
    (RiskBand::Low, "Full Cover"),
    (RiskBand::Guarded, "75% Cover Recommended"),
    (RiskBand::Medium, "Limited Cover"),
    (RiskBand::High, "Excluded"),
    (RiskBand::Critical, "No Cover"),
];

const PREMIUM_TABLE: [(RiskBand, &str); 5] = [
    (RiskBand::Low, "+0–5%"),
    (RiskBand::Guarded, "+5–12%"),
    (RiskBand::Medium, "+12–20%"),
    (RiskBand::High, "+20–30%"),
    (RiskBand::Critical, "Decline"),
];

/// Used when a band has no coverage entry
pub const FALLBACK_COVERAGE: &str = "Limited Cover";

/// Used when a band has no premium entry
pub const FALLBACK_PREMIUM: &str = "+12–20%";

/// RiskBandPolicy encodes the mapping from scores to bands and from bands to
/// insurance-style recommendations
///
/// The same tables apply to single files and to the whole dataset, so both
/// levels of the certificate speak the same severity language.
pub struct RiskBandPolicy;

impl RiskBandPolicy {
    /// Maps a score to its band; the first floor the score reaches wins
    ///
    /// `>=90 LOW`, `>=75 GUARDED`, `>=55 MEDIUM`, `>=35 HIGH`, otherwise `CRITICAL`.
    pub fn band_for_score(score: Score) -> RiskBand {
        BAND_THRESHOLDS
            .iter()
            .find(|(floor, _)| score.value() >= *floor)
            .map(|(_, band)| *band)
            .unwrap_or(RiskBand::Critical)
    }

    /// Lowest score that still lands in the MEDIUM band or better
    ///
    /// Files below this floor count as high-risk during aggregation.
    pub fn high_risk_floor() -> u8 {
        BAND_THRESHOLDS
            .iter()
            .find(|(_, band)| *band == RiskBand::Medium)
            .map(|(floor, _)| *floor)
            .unwrap_or(55)
    }

    /// Coverage recommendation for a band
    pub fn coverage_for(band: RiskBand) -> &'static str {
        lookup(&COVERAGE_TABLE, band).unwrap_or(FALLBACK_COVERAGE)
    }

    /// Premium adjustment guidance for a band
    pub fn premium_for(band: RiskBand) -> &'static str {
        lookup(&PREMIUM_TABLE, band).unwrap_or(FALLBACK_PREMIUM)
    }

    /// Coverage recommendation for a free-form band label
    ///
    /// Labels that don't name a band get the MEDIUM-equivalent entry.
    pub fn coverage_for_label(label: &str) -> &'static str {
        label
            .parse::<RiskBand>()
            .map(Self::coverage_for)
            .unwrap_or(FALLBACK_COVERAGE)
    }

    /// Premium adjustment for a free-form band label
    pub fn premium_for_label(label: &str) -> &'static str {
        label
            .parse::<RiskBand>()
            .map(Self::premium_for)
            .unwrap_or(FALLBACK_PREMIUM)
    }
}

fn lookup(table: &[(RiskBand, &'static str)], band: RiskBand) -> Option<&'static str> {
    table
        .iter()
        .find(|(entry, _)| *entry == band)
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(score: u8) -> RiskBand {
        RiskBandPolicy::band_for_score(Score::new(score))
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band(100), RiskBand::Low);
        assert_eq!(band(90), RiskBand::Low);
        assert_eq!(band(89), RiskBand::Guarded);
        assert_eq!(band(75), RiskBand::Guarded);
        assert_eq!(band(74), RiskBand::Medium);
        assert_eq!(band(55), RiskBand::Medium);
        assert_eq!(band(54), RiskBand::High);
        assert_eq!(band(35), RiskBand::High);
        assert_eq!(band(34), RiskBand::Critical);
        assert_eq!(band(0), RiskBand::Critical);
    }

    #[test]
    fn test_band_is_monotonic_in_score() {
        let mut previous = band(0);
        for score in 1..=100u8 {
            let current = band(score);
            assert!(current <= previous, "band got worse at score {}", score);
            previous = current;
        }
    }

    #[test]
    fn test_high_risk_floor() {
        assert_eq!(RiskBandPolicy::high_risk_floor(), 55);
    }

    #[test]
    fn test_coverage_table() {
        assert_eq!(RiskBandPolicy::coverage_for(RiskBand::Low), "Full Cover");
        assert_eq!(
            RiskBandPolicy::coverage_for(RiskBand::Guarded),
            "75% Cover Recommended"
        );
        assert_eq!(RiskBandPolicy::coverage_for(RiskBand::Medium), "Limited Cover");
        assert_eq!(RiskBandPolicy::coverage_for(RiskBand::High), "Excluded");
        assert_eq!(RiskBandPolicy::coverage_for(RiskBand::Critical), "No Cover");
    }

    #[test]
    fn test_premium_table() {
        assert_eq!(RiskBandPolicy::premium_for(RiskBand::Low), "+0–5%");
        assert_eq!(RiskBandPolicy::premium_for(RiskBand::Guarded), "+5–12%");
        assert_eq!(RiskBandPolicy::premium_for(RiskBand::Medium), "+12–20%");
        assert_eq!(RiskBandPolicy::premium_for(RiskBand::High), "+20–30%");
        assert_eq!(RiskBandPolicy::premium_for(RiskBand::Critical), "Decline");
    }

    #[test]
    fn test_every_band_has_table_entries() {
        for band in RiskBand::ALL {
            assert!(lookup(&COVERAGE_TABLE, band).is_some());
            assert!(lookup(&PREMIUM_TABLE, band).is_some());
        }
    }

    #[test]
    fn test_lookup_falls_back_for_missing_entry() {
        let partial = [(RiskBand::Low, "Full Cover")];
        assert_eq!(lookup(&partial, RiskBand::High), None);
        assert_eq!(
            lookup(&partial, RiskBand::High).unwrap_or(FALLBACK_COVERAGE),
            "Limited Cover"
        );
    }

    #[test]
    fn test_label_lookups() {
        assert_eq!(RiskBandPolicy::coverage_for_label("high"), "Excluded");
        assert_eq!(RiskBandPolicy::premium_for_label("CRITICAL"), "Decline");
        assert_eq!(RiskBandPolicy::coverage_for_label("SEVERE"), "Limited Cover");
        assert_eq!(RiskBandPolicy::premium_for_label(""), "+12–20%");
    }
}
