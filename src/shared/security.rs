use crate::shared::error::CertifyError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(CertifyError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} operations on symbolic links are not allowed",
                operation
            ),
            hint: "Point the tool at the real file or directory instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates the dataset root and returns its canonical form
///
/// The root must exist, must not be a symbolic link and must resolve to a
/// directory. Files below the root are walked without following links, so
/// canonicalizing the root is enough to pin the scan to one tree.
///
/// # Errors
/// Returns `CertifyError::InvalidDatasetPath` describing the first failed check
pub fn validate_dataset_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(CertifyError::InvalidDatasetPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = fs::symlink_metadata(path).map_err(|e| CertifyError::InvalidDatasetPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(CertifyError::InvalidDatasetPath {
            path: path.to_path_buf(),
            reason: "Security: Dataset path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(CertifyError::InvalidDatasetPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    let canonical = path
        .canonicalize()
        .map_err(|e| CertifyError::InvalidDatasetPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    if !canonical.is_dir() {
        return Err(CertifyError::InvalidDatasetPath {
            path: path.to_path_buf(),
            reason: "Resolved path is not a directory".to_string(),
        }
        .into());
    }

    Ok(canonical)
}
