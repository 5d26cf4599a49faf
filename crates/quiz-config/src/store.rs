//! Quiz catalog storage configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Which `QuizRepository` adapter backs the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    Memory,
    #[default]
    Json,
    Sqlite,
    Http,
}

impl StoreBackend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Json => "json",
            Self::Sqlite => "sqlite",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_base_url() -> String {
    "http://localhost:3001/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// File path for the `json` and `sqlite` backends. Empty selects
    /// `.quiz/quizzes.json` or `.quiz/quizzes.db` under the project root.
    #[serde(default)]
    pub path: String,

    /// Base URL of the remote quiz service for the `http` backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout for the `http` backend, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Resolve the storage file for file-backed adapters.
    ///
    /// Relative paths are taken from `project_root`.
    #[must_use]
    pub fn resolved_path(&self, project_root: &Path) -> PathBuf {
        if self.path.is_empty() {
            let file = match self.backend {
                StoreBackend::Sqlite => "quizzes.db",
                _ => "quizzes.json",
            };
            return project_root.join(crate::PROJECT_DIR).join(file);
        }
        let path = PathBuf::from(&self.path);
        if path.is_absolute() {
            path
        } else {
            project_root.join(path)
        }
    }
}
