//! Configuration
//!
//! Layered configuration for storage, UI and logging. Sources are merged by
//! [`merge::service::MergeService`]; callers go through [`ConfigLoader`].

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
pub mod workspace;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;
pub use workspace::storage_paths::StorageConfig;

/// Workspace config file name, looked up in the workspace root.
pub const WORKSPACE_CONFIG_FILE: &str = "phonebook.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhonebookConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// User-facing language of the interactive shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// Interactive shell settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub language: Language,

    /// Input that cancels a phone or birthdate prompt
    #[serde(default = "default_abort_input")]
    pub abort_input: String,

    /// Colored error and heading output
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_abort_input() -> String {
    "q".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            abort_input: default_abort_input(),
            color: default_true(),
        }
    }
}
