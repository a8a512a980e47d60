mod risk_band_policy;

pub use risk_band_policy::{RiskBandPolicy, FALLBACK_COVERAGE, FALLBACK_PREMIUM};
