/// DatasetFingerprint value object identifying a certified file set
///
/// `dataset_hash` covers file contents only and survives renames;
/// `manifest_hash` also binds each file name to its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFingerprint {
    dataset_hash: String,
    manifest_hash: String,
}

impl DatasetFingerprint {
    pub fn new(dataset_hash: String, manifest_hash: String) -> Self {
        Self {
            dataset_hash,
            manifest_hash,
        }
    }

    pub fn dataset_hash(&self) -> &str {
        &self.dataset_hash
    }

    pub fn manifest_hash(&self) -> &str {
        &self.manifest_hash
    }
}
