//! Class manifests: JSON files holding an array of class declarations.
//!
//! ```json
//! [
//!   { "name": "App\\Order", "parent": "App\\Entity",
//!     "properties": [ { "name": "total", "visibility": "private", "annotation": "@var float" } ] }
//! ]
//! ```

use std::path::Path;

use walkdir::WalkDir;

use crate::registry::ClassRegistry;
use crate::types::{ClassDeclaration, ModelError};

/// Parse a manifest file into class declarations.
pub fn read_manifest(path: &Path) -> Result<Vec<ClassDeclaration>, ModelError> {
    let content = std::fs::read_to_string(path).map_err(|e| ModelError::Manifest {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| ModelError::Manifest {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

impl ClassRegistry {
    /// Register every class in one manifest file. Returns the number of
    /// classes added.
    pub fn load_manifest(&mut self, path: &Path) -> Result<usize, ModelError> {
        let classes = read_manifest(path)?;
        let count = classes.len();
        for class in classes {
            self.register(class)?;
        }
        tracing::debug!(path = %path.display(), count, "manifest loaded");
        Ok(count)
    }

    /// Register every `*.json` manifest found under `dir`, in sorted path
    /// order so duplicate detection is deterministic.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, ModelError> {
        let mut total = 0;
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| ModelError::Manifest {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
                total += self.load_manifest(path)?;
            }
        }
        Ok(total)
    }
}
