//! Read models for CQRS-lite pattern
//!
//! `CertificateReport` is the one view every formatter renders, and the
//! exact shape written by the JSON output.

pub mod certificate_report;
pub mod certificate_report_builder;

pub use certificate_report::{
    CertificateReport, CommercialView, DatasetView, FileView, OverallRiskView, CLAIM_TRIGGERS,
    COMMISSION_MODEL, VERIFICATION_SCOPE,
};
pub use certificate_report_builder::CertificateReportBuilder;
