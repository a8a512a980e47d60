use crate::certification::domain::{DatasetFingerprint, ScannedFile};
use crate::shared::error::CertifyError;
use crate::shared::Result;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read buffer size for streaming file digests
const CHUNK_SIZE: usize = 8 * 1024;

/// Domain-separation prefix for dataset-level digests
pub const DATASET_PREFIX: &str = "dataset::";

/// Fingerprinter service computing content-addressed digests
///
/// All digests are SHA-256 rendered as lowercase hex. Dataset-level digests
/// sort their inputs first, so traversal order never changes the result.
pub struct Fingerprinter;

impl Fingerprinter {
    /// Streams a file through SHA-256 in fixed-size chunks
    ///
    /// # Errors
    /// Returns `CertifyError::FileReadError` if the file cannot be opened or read
    pub fn hash_file(path: &Path) -> Result<String> {
        let file = File::open(path).map_err(|e| CertifyError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::hash_reader(BufReader::with_capacity(CHUNK_SIZE, file)).map_err(|e| {
            CertifyError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Streams any reader through SHA-256 in fixed-size chunks
    pub fn hash_reader<R: Read>(mut reader: R) -> std::io::Result<String> {
        let mut hasher = Sha256::new();
        let mut buffer = [0u8; CHUNK_SIZE];
        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buffer[..read]);
        }
        Ok(hex::encode(hasher.finalize()))
    }

    /// Digest of a byte slice
    pub fn hash_bytes(bytes: &[u8]) -> String {
        hex::encode(Sha256::digest(bytes))
    }

    /// Order-independent digest over a multiset of file hashes
    ///
    /// `sha256("dataset::" + concat(sorted(hashes)))`
    pub fn hash_dataset<I, S>(file_hashes: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = file_hashes
            .into_iter()
            .map(|h| h.as_ref().to_string())
            .collect();
        Self::hash_sorted(entries)
    }

    /// Order-independent digest over `filename:hash` bindings
    ///
    /// Renaming a file changes this digest even when contents are unchanged.
    pub fn hash_manifest<I, N, H>(entries: I) -> String
    where
        I: IntoIterator<Item = (N, H)>,
        N: AsRef<str>,
        H: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, hash)| format!("{}:{}", name.as_ref(), hash.as_ref()))
            .collect();
        Self::hash_sorted(entries)
    }

    /// Computes both dataset-level digests for a set of scanned files
    pub fn fingerprint(files: &[ScannedFile]) -> DatasetFingerprint {
        let dataset_hash = Self::hash_dataset(files.iter().map(|f| f.content_hash().as_str()));
        let manifest_hash = Self::hash_manifest(
            files
                .iter()
                .map(|f| (f.path(), f.content_hash().as_str())),
        );
        DatasetFingerprint::new(dataset_hash, manifest_hash)
    }

    fn hash_sorted(mut entries: Vec<String>) -> String {
        entries.sort_unstable();
        let mut hasher = Sha256::new();
        hasher.update(DATASET_PREFIX.as_bytes());
        for entry in &entries {
            hasher.update(entry.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}
