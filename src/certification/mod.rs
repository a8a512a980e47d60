/// Certification domain - pure business logic
///
/// Value objects, scoring and fingerprinting services, and the band
/// policy. Nothing in here touches the filesystem except
/// `Fingerprinter::hash_file`, which only reads.
pub mod domain;
pub mod policies;
pub mod services;
