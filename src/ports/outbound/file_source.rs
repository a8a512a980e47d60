use crate::certification::domain::ScannedFile;
use crate::certification::services::FileFilter;
use crate::shared::Result;
use std::path::Path;

/// A file that was found but could not be fingerprinted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    /// Dataset-relative path
    pub path: String,
    pub reason: String,
}

/// Result of enumerating a dataset folder
///
/// `files` is sorted by relative path. Files that could not be read are
/// listed in `failures` and left out of `files`.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub files: Vec<ScannedFile>,
    pub failures: Vec<ScanFailure>,
}

/// FileSource port for enumerating and fingerprinting dataset files
///
/// This port abstracts the file system walk, content hashing and metadata
/// extraction that turn a folder into a list of `ScannedFile`s.
pub trait FileSource {
    /// Scans every regular file below `root` that the filter keeps
    ///
    /// # Arguments
    /// * `root` - Dataset folder
    /// * `filter` - Exclusion patterns applied to relative paths
    ///
    /// # Returns
    /// The scanned files (sorted by relative path) and per-file failures
    ///
    /// # Errors
    /// Returns an error if:
    /// - The root does not exist or is not a directory
    /// - The root itself cannot be traversed
    ///
    /// Unreadable individual files are not errors; they are reported in
    /// `ScanOutcome::failures`.
    fn scan(&self, root: &Path, filter: &FileFilter) -> Result<ScanOutcome>;
}
