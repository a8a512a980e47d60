/// Use cases module containing application business logic orchestration
mod certify_dataset;

pub use certify_dataset::CertifyDatasetUseCase;
