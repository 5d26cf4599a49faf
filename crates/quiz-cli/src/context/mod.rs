mod app_context;
mod config_warnings;
mod project_root;

use std::path::Path;

use anyhow::Context;
use quiz_config::QuizConfig;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;
pub use project_root::find_project_root;

/// Load `.env`, then the layered config rooted at `project_root`.
pub fn load_config(project_root: &Path) -> anyhow::Result<QuizConfig> {
    if let Err(error) = dotenvy::from_path(project_root.join(".env")) {
        if !error.not_found() {
            tracing::warn!(%error, "failed to load .env");
        }
    }
    let config = QuizConfig::load_from(project_root).context("failed to load quiz configuration")?;
    warn_unconfigured(&config);
    Ok(config)
}
