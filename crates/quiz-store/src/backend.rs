//! Backend selection from configuration.

use std::path::Path;
use std::time::Duration;

use quiz_config::{StoreBackend, StoreConfig};
use quiz_core::contracts::QuizRepository;
use quiz_core::entities::Quiz;

use crate::error::StoreError;
use crate::http::HttpQuizStore;
use crate::json_file::JsonFileStore;
use crate::memory::MemoryQuizStore;
use crate::sqlite::SqliteQuizStore;

/// Whichever catalog adapter `[store].backend` names.
pub enum QuizStore {
    Memory(MemoryQuizStore),
    Json(JsonFileStore),
    Sqlite(SqliteQuizStore),
    Http(HttpQuizStore),
}

impl QuizStore {
    /// Open the configured backend. Relative paths resolve against `project_root`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or the HTTP
    /// client cannot be built.
    pub async fn open(config: &StoreConfig, project_root: &Path) -> Result<Self, StoreError> {
        let store = match config.backend {
            StoreBackend::Memory => Self::Memory(MemoryQuizStore::new()),
            StoreBackend::Json => Self::Json(JsonFileStore::new(config.resolved_path(project_root))),
            StoreBackend::Sqlite => {
                let path = config.resolved_path(project_root);
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                Self::Sqlite(SqliteQuizStore::open_local(&path.to_string_lossy()).await?)
            }
            StoreBackend::Http => Self::Http(HttpQuizStore::new(
                &config.base_url,
                Duration::from_secs(config.timeout_secs),
            )?),
        };
        tracing::debug!(backend = %store.backend(), "quiz store opened");
        Ok(store)
    }

    #[must_use]
    pub const fn backend(&self) -> StoreBackend {
        match self {
            Self::Memory(_) => StoreBackend::Memory,
            Self::Json(_) => StoreBackend::Json,
            Self::Sqlite(_) => StoreBackend::Sqlite,
            Self::Http(_) => StoreBackend::Http,
        }
    }

    /// Look up one quiz by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no quiz has this id, or the
    /// backend's error if listing fails.
    pub async fn find(&self, id: &str) -> Result<Quiz, StoreError> {
        self.list()
            .await?
            .into_iter()
            .find(|q| q.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl QuizRepository for QuizStore {
    type Error = StoreError;

    async fn list(&self) -> Result<Vec<Quiz>, StoreError> {
        match self {
            Self::Memory(s) => s.list().await,
            Self::Json(s) => s.list().await,
            Self::Sqlite(s) => s.list().await,
            Self::Http(s) => s.list().await,
        }
    }

    async fn save(&self, quiz: &Quiz) -> Result<(), StoreError> {
        match self {
            Self::Memory(s) => s.save(quiz).await,
            Self::Json(s) => s.save(quiz).await,
            Self::Sqlite(s) => s.save(quiz).await,
            Self::Http(s) => s.save(quiz).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        match self {
            Self::Memory(s) => s.delete(id).await,
            Self::Json(s) => s.delete(id).await,
            Self::Sqlite(s) => s.delete(id).await,
            Self::Http(s) => s.delete(id).await,
        }
    }
}
