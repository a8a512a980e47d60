use super::risk_band::{RiskBand, Score};
use super::risk_check::{CheckStatus, RiskCheckResult};
use crate::shared::error::CertifyError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum length for a relative dataset path (security limit)
const MAX_PATH_LENGTH: usize = 4096;

/// NewType wrapper for a lowercase hex content digest
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Accepts any non-empty hex string and normalises it to lowercase
    pub fn new(hex_digest: impl Into<String>) -> Result<Self> {
        let digest = hex_digest.into();
        if digest.is_empty() {
            return Err(CertifyError::Validation {
                message: "Content hash cannot be empty".to_string(),
            }
            .into());
        }
        if !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CertifyError::Validation {
                message: format!("Content hash is not a hex digest: {}", digest),
            }
            .into());
        }
        Ok(Self(digest.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for tables (first 12 characters)
    pub fn short(&self) -> &str {
        let end = self.0.len().min(12);
        &self.0[..end]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scalar value extracted from a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Integer(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Float(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

/// Extracted metadata, keyed by field name
///
/// A `BTreeMap` keeps serialisation order stable between runs.
pub type FileMetadata = BTreeMap<String, MetadataValue>;

/// A file enumerated and fingerprinted by a file source
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedFile {
    path: String,
    content_hash: ContentHash,
    size_bytes: u64,
    mime_type: String,
    metadata: FileMetadata,
}

impl ScannedFile {
    /// Creates a scanned file record
    ///
    /// `path` is the dataset-relative path using `/` separators. An empty
    /// mime type is recorded as `"unknown"`.
    pub fn new(
        path: String,
        content_hash: ContentHash,
        size_bytes: u64,
        mime_type: String,
        metadata: FileMetadata,
    ) -> Result<Self> {
        if path.is_empty() {
            return Err(CertifyError::Validation {
                message: "File path cannot be empty".to_string(),
            }
            .into());
        }
        if path.len() > MAX_PATH_LENGTH {
            return Err(CertifyError::Validation {
                message: format!(
                    "File path is too long ({} bytes). Maximum allowed: {} bytes",
                    path.len(),
                    MAX_PATH_LENGTH
                ),
            }
            .into());
        }
        let mime_type = if mime_type.trim().is_empty() {
            "unknown".to_string()
        } else {
            mime_type
        };

        Ok(Self {
            path,
            content_hash,
            size_bytes,
            mime_type,
            metadata,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content_hash(&self) -> &ContentHash {
        &self.content_hash
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Size in KiB rounded to two decimals
    pub fn size_kb(&self) -> f64 {
        (self.size_bytes as f64 / 1024.0 * 100.0).round() / 100.0
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }
}

/// A file after risk checks and scoring
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredFile {
    pub file: ScannedFile,
    pub checks: RiskCheckResult,
    pub check_status: CheckStatus,
    pub score: Score,
    pub risk_band: RiskBand,
    pub coverage_level: &'static str,
    pub premium_adjustment: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_normalises_case() {
        let hash = ContentHash::new("ABC123").unwrap();
        assert_eq!(hash.as_str(), "abc123");
    }

    #[test]
    fn test_content_hash_rejects_empty_and_non_hex() {
        assert!(ContentHash::new("").is_err());
        assert!(ContentHash::new("xyz").is_err());
    }

    #[test]
    fn test_content_hash_short() {
        let hash = ContentHash::new("0123456789abcdef0123").unwrap();
        assert_eq!(hash.short(), "0123456789ab");
        assert_eq!(ContentHash::new("abc").unwrap().short(), "abc");
    }

    #[test]
    fn test_scanned_file_defaults_unknown_mime() {
        let file = ScannedFile::new(
            "notes/readme".to_string(),
            ContentHash::new("abc123").unwrap(),
            10,
            "  ".to_string(),
            FileMetadata::new(),
        )
        .unwrap();
        assert_eq!(file.mime_type(), "unknown");
    }

    #[test]
    fn test_scanned_file_rejects_empty_path() {
        let result = ScannedFile::new(
            String::new(),
            ContentHash::new("abc123").unwrap(),
            10,
            "text/plain".to_string(),
            FileMetadata::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_size_kb_rounding() {
        let file = ScannedFile::new(
            "a.bin".to_string(),
            ContentHash::new("abc123").unwrap(),
            1536,
            "application/octet-stream".to_string(),
            FileMetadata::new(),
        )
        .unwrap();
        assert_eq!(file.size_kb(), 1.5);
    }

    #[test]
    fn test_metadata_value_serializes_untagged() {
        let mut metadata = FileMetadata::new();
        metadata.insert("extension".to_string(), ".png".into());
        metadata.insert("size_bytes".to_string(), 42i64.into());
        metadata.insert("modified_at".to_string(), 1.5f64.into());

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["extension"], ".png");
        assert_eq!(value["size_bytes"], 42);
        assert_eq!(value["modified_at"], 1.5);
    }
}
