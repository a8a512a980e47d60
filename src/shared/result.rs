/// Crate-wide Result alias with `anyhow::Error` as the error type.
/// Typed `CertifyError` values convert into it through `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
