use datacert::prelude::*;
use std::path::Path;

/// Mock FileSource serving an in-memory list of files
pub struct MockFileSource {
    pub files: Vec<ScannedFile>,
    pub failures: Vec<ScanFailure>,
    pub should_fail: bool,
}

impl MockFileSource {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            failures: Vec::new(),
            should_fail: false,
        }
    }

    /// Adds a file with the given content hash
    pub fn with_file(mut self, path: &str, hash: &str, size_bytes: u64, mime_type: &str) -> Self {
        let mut metadata = FileMetadata::new();
        metadata.insert("mime_type".to_string(), mime_type.into());
        metadata.insert("size_bytes".to_string(), (size_bytes as i64).into());

        self.files.push(
            ScannedFile::new(
                path.to_string(),
                ContentHash::new(hash).unwrap(),
                size_bytes,
                mime_type.to_string(),
                metadata,
            )
            .unwrap(),
        );
        self
    }

    /// Adds a file whose content is `content`, hashed like the scanner would
    pub fn with_content(self, path: &str, content: &[u8], mime_type: &str) -> Self {
        let hash = Fingerprinter::hash_bytes(content);
        self.with_file(path, &hash, content.len() as u64, mime_type)
    }

    pub fn with_unreadable(mut self, path: &str, reason: &str) -> Self {
        self.failures.push(ScanFailure {
            path: path.to_string(),
            reason: reason.to_string(),
        });
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

impl Default for MockFileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSource for MockFileSource {
    fn scan(&self, root: &Path, filter: &FileFilter) -> Result<ScanOutcome> {
        if self.should_fail {
            anyhow::bail!("Mock file source failure for {}", root.display());
        }

        let mut files: Vec<ScannedFile> = self
            .files
            .iter()
            .filter(|f| !filter.is_excluded(f.path()))
            .cloned()
            .collect();
        files.sort_by(|a, b| a.path().cmp(b.path()));

        Ok(ScanOutcome {
            files,
            failures: self.failures.clone(),
        })
    }
}
