//! Storage configuration.

use std::path::PathBuf;

/// Where the file-backed key-value surface lives.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the state file. Created on first write.
    pub data_dir: PathBuf,
    /// State file name inside `data_dir`.
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".stockroom"),
            file_name: "session.json".into(),
        }
    }
}

impl StoreConfig {
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}
