//! Local result log configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Number of results kept in the log.
const fn default_keep() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultsConfig {
    /// Result log file. Empty selects `.quiz/results.json`.
    #[serde(default)]
    pub path: String,

    /// Most recent results retained, newest first.
    #[serde(default = "default_keep")]
    pub keep: usize,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            keep: default_keep(),
        }
    }
}

impl ResultsConfig {
    #[must_use]
    pub fn resolved_path(&self, project_root: &Path) -> PathBuf {
        if self.path.is_empty() {
            return project_root.join(crate::PROJECT_DIR).join("results.json");
        }
        project_root.join(&self.path)
    }
}
