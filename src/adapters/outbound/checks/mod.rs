/// Risk check adapters
mod simulated_risk_checks;

pub use simulated_risk_checks::SimulatedRiskChecks;
