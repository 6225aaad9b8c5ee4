//! StorageConfig and path resolution for the backing file.

use crate::store::{ParsePolicy, TextFileStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_store_path() -> PathBuf {
    PathBuf::from("phonebook.txt")
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backing file (relative to workspace root unless absolute)
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// How malformed lines are treated on load
    #[serde(default)]
    pub parse_policy: ParsePolicy,
}

impl StorageConfig {
    /// Resolve the backing file against the workspace root.
    pub fn resolve_path(&self, workspace_root: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            workspace_root.join(&self.path)
        }
    }

    /// Build the text file store this configuration describes.
    pub fn open_store(&self, workspace_root: &Path) -> TextFileStore {
        TextFileStore::with_policy(self.resolve_path(workspace_root), self.parse_policy)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            parse_policy: ParsePolicy::default(),
        }
    }
}
