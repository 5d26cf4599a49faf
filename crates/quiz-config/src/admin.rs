//! Admin credential configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "admin".to_string()
}

/// Eight hours.
const fn default_session_ttl_secs() -> u64 {
    8 * 60 * 60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Admin session marker. Empty selects `.quiz/admin-session`.
    #[serde(default)]
    pub session_file: String,

    /// Seconds an admin login stays valid. `0` keeps it until logout.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
            session_file: String::new(),
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

impl AdminConfig {
    #[must_use]
    pub fn resolved_session_file(&self, project_root: &Path) -> PathBuf {
        if self.session_file.is_empty() {
            return project_root.join(crate::PROJECT_DIR).join("admin-session");
        }
        project_root.join(&self.session_file)
    }

    /// `None` when logins never expire.
    #[must_use]
    pub const fn session_ttl(&self) -> Option<Duration> {
        match self.session_ttl_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
