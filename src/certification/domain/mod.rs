pub mod certificate_metadata;
pub mod dataset_aggregate;
pub mod dataset_file;
pub mod dataset_fingerprint;
pub mod risk_band;
pub mod risk_check;

pub use certificate_metadata::CertificateMetadata;
pub use dataset_aggregate::DatasetAggregate;
pub use dataset_file::{ContentHash, FileMetadata, MetadataValue, ScannedFile, ScoredFile};
pub use dataset_fingerprint::DatasetFingerprint;
pub use risk_band::{RiskBand, Score};
pub use risk_check::{CheckStatus, ContaminationRisk, RiskCheckResult, SafetyRisk};
