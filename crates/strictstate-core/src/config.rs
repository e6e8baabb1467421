//! Configuration file loading for strictstate.
//!
//! Reads `.strictstate/strictstate.json` and provides typed access to all settings.
//! Falls back to defaults when the config file is missing or incomplete.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::registry::ClassRegistry;
use crate::types::ModelError;

/// Top-level strictstate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrictConfig {
    pub version: String,
    #[serde(default)]
    pub conformance: ConformanceConfig,
    /// Directories of class manifests, relative to the config directory's parent.
    #[serde(default)]
    pub manifests: Vec<String>,
}

/// Conformance tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceConfig {
    /// Let an uninitialized property pass wherever null would.
    #[serde(default)]
    pub absent_as_null: bool,
    /// Reject ints where `float` is declared.
    #[serde(default = "default_true")]
    pub strict_scalars: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            absent_as_null: false,
            strict_scalars: true,
        }
    }
}

impl Default for StrictConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            conformance: ConformanceConfig::default(),
            manifests: vec![],
        }
    }
}

impl StrictConfig {
    /// Load configuration from `strictstate.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join("strictstate.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Manifest directories resolved against `root`.
    pub fn manifest_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.manifests.iter().map(|m| root.join(m)).collect()
    }

    /// Build a registry from every configured manifest directory.
    pub fn load_registry(&self, root: &Path) -> Result<ClassRegistry, ModelError> {
        let mut registry = ClassRegistry::new();
        for dir in self.manifest_dirs(root) {
            registry.load_dir(&dir)?;
        }
        Ok(registry)
    }
}
