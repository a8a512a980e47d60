mod certificate_issuer;
mod dataset_aggregator;
mod file_filter;
mod file_scorer;
mod fingerprinter;

pub use certificate_issuer::{CertificateIssuer, TIMESTAMP_FORMAT, TOOL_NAME};
pub use dataset_aggregator::{AggregateScore, DatasetAggregator};
pub use file_filter::FileFilter;
pub use file_scorer::FileScorer;
pub use fingerprinter::{Fingerprinter, DATASET_PREFIX};
