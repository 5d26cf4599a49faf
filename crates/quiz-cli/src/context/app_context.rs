use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use quiz_author::AdminAuth;
use quiz_config::QuizConfig;
use quiz_store::{QuizStore, ResultLog};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: QuizConfig,
    pub project_root: PathBuf,
    pub store: QuizStore,
    pub results: Arc<ResultLog>,
    pub auth: AdminAuth,
}

impl AppContext {
    /// Open the configured catalog backend and the result log under `project_root`.
    pub async fn init(project_root: PathBuf, config: QuizConfig) -> anyhow::Result<Self> {
        let store = QuizStore::open(&config.store, &project_root)
            .await
            .with_context(|| format!("failed to open {} quiz store", config.store.backend.as_str()))?;

        let results_path = config.results.resolved_path(&project_root);
        let results = ResultLog::open(&results_path, config.results.keep)
            .await
            .with_context(|| format!("failed to open result log {}", results_path.display()))?;

        let auth = AdminAuth::from_config(&config.admin, &project_root);

        tracing::debug!(
            root = %project_root.display(),
            backend = config.store.backend.as_str(),
            "application context ready"
        );

        Ok(Self {
            config,
            project_root,
            store,
            results: Arc::new(results),
            auth,
        })
    }
}
