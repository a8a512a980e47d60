use super::mime_types::mime_for_extension;
use crate::certification::domain::{ContentHash, FileMetadata, ScannedFile};
use crate::certification::services::{FileFilter, Fingerprinter};
use crate::ports::outbound::{FileSource, ScanFailure, ScanOutcome};
use crate::shared::security::validate_dataset_root;
use crate::shared::error::CertifyError;
use crate::shared::Result;
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use walkdir::WalkDir;

const NON_UTF8_NAME: &str = "file name is not valid UTF-8";

/// A regular file found during the walk, not yet read
struct Candidate {
    absolute: PathBuf,
    relative: String,
    metadata: fs::Metadata,
}

/// DatasetScanner adapter walking a dataset folder on disk
///
/// Implements the FileSource port. The walk never follows symbolic links
/// and skips them entirely. Hashing and metadata extraction run on the
/// rayon pool; output is sorted by relative path.
#[derive(Debug, Default)]
pub struct DatasetScanner;

impl DatasetScanner {
    pub fn new() -> Self {
        Self
    }

    /// Walks the tree and collects files the filter keeps
    fn collect_candidates(
        root: &Path,
        filter: &FileFilter,
        failures: &mut Vec<ScanFailure>,
    ) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(CertifyError::InvalidDatasetPath {
                        path: root.to_path_buf(),
                        reason: format!("Failed to read directory: {}", e),
                    }
                    .into());
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| display_path(root, p))
                        .unwrap_or_else(|| "<unknown>".to_string());
                    tracing::warn!(path = %path, error = %e, "skipping unreadable entry");
                    failures.push(ScanFailure {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_symlink() {
                tracing::debug!(path = %entry.path().display(), "skipping symbolic link");
                continue;
            }
            if !file_type.is_file() {
                continue;
            }

            let Some(relative) = relative_path(root, entry.path()) else {
                let path = display_path(root, entry.path());
                tracing::warn!(path = %path, "skipping file with non UTF-8 name");
                failures.push(ScanFailure {
                    path,
                    reason: NON_UTF8_NAME.to_string(),
                });
                continue;
            };
            if filter.is_excluded(&relative) {
                tracing::debug!(path = %relative, "excluded by pattern");
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => candidates.push(Candidate {
                    absolute: entry.into_path(),
                    relative,
                    metadata,
                }),
                Err(e) => failures.push(ScanFailure {
                    path: relative,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(candidates)
    }

    /// Hashes one file and attaches its metadata
    fn fingerprint_candidate(candidate: Candidate) -> std::result::Result<ScannedFile, ScanFailure> {
        let failure = |reason: String| ScanFailure {
            path: candidate.relative.clone(),
            reason,
        };

        let digest = File::open(&candidate.absolute)
            .and_then(|file| Fingerprinter::hash_reader(BufReader::new(file)))
            .map_err(|e| failure(e.to_string()))?;
        let content_hash = ContentHash::new(digest).map_err(|e| failure(e.to_string()))?;

        let (mime_type, metadata) = extract_metadata(&candidate.absolute, &candidate.metadata);

        ScannedFile::new(
            candidate.relative.clone(),
            content_hash,
            candidate.metadata.len(),
            mime_type.to_string(),
            metadata,
        )
        .map_err(|e| failure(e.to_string()))
    }
}

impl FileSource for DatasetScanner {
    fn scan(&self, root: &Path, filter: &FileFilter) -> Result<ScanOutcome> {
        let root = validate_dataset_root(root)?;
        let mut failures = Vec::new();

        let candidates = Self::collect_candidates(&root, filter, &mut failures)?;
        tracing::debug!(candidates = candidates.len(), "hashing files");

        let results: Vec<std::result::Result<ScannedFile, ScanFailure>> = candidates
            .into_par_iter()
            .map(Self::fingerprint_candidate)
            .collect();

        let mut files = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(file) => files.push(file),
                Err(failure) => {
                    tracing::warn!(path = %failure.path, reason = %failure.reason, "failed to fingerprint file");
                    failures.push(failure);
                }
            }
        }

        files.sort_by(|a, b| a.path().cmp(b.path()));
        failures.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(ScanOutcome { files, failures })
    }
}

/// Dataset-relative path with `/` separators
///
/// `None` when any component is not valid UTF-8; such a name cannot be
/// bound into the manifest without loss.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .map(|parts| parts.join("/"))
}

/// Lossy form of the relative path, only for failure messages
fn display_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// MIME type plus the metadata fields recorded for every file
///
/// Keys: `mime_type`, `size_kb`, `size_bytes`, `extension`, `created_at`,
/// `modified_at` (timestamps as fractional Unix seconds). A timestamp the
/// platform cannot provide is left out.
fn extract_metadata(path: &Path, fs_metadata: &fs::Metadata) -> (&'static str, FileMetadata) {
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let mime_type = mime_for_extension(&extension);
    let size_bytes = fs_metadata.len();

    let mut metadata = FileMetadata::new();
    metadata.insert("mime_type".to_string(), mime_type.into());
    metadata.insert(
        "size_kb".to_string(),
        ((size_bytes as f64 / 1024.0 * 100.0).round() / 100.0).into(),
    );
    metadata.insert(
        "size_bytes".to_string(),
        i64::try_from(size_bytes).unwrap_or(i64::MAX).into(),
    );
    metadata.insert("extension".to_string(), extension.into());

    if let Some(created) = fs_metadata.created().ok().and_then(unix_seconds) {
        metadata.insert("created_at".to_string(), created.into());
    }
    if let Some(modified) = fs_metadata.modified().ok().and_then(unix_seconds) {
        metadata.insert("modified_at".to_string(), modified.into());
    }

    (mime_type, metadata)
}

fn unix_seconds(time: SystemTime) -> Option<f64> {
    time.duration_since(UNIX_EPOCH).ok().map(|d| d.as_secs_f64())
}
