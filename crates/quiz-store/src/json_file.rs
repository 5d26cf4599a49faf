//! Catalog kept as a single JSON array file.
//!
//! The whole file is read for every operation and rewritten on every change.
//! Writes go to a sibling temp file first and are renamed into place.

use std::path::{Path, PathBuf};

use quiz_core::contracts::QuizRepository;
use quiz_core::entities::Quiz;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::memory::upsert;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// A store backed by `path`. The file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuizRepository for JsonFileStore {
    type Error = StoreError;

    async fn list(&self) -> Result<Vec<Quiz>, StoreError> {
        read_json_array(&self.path).await
    }

    async fn save(&self, quiz: &Quiz) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut quizzes: Vec<Quiz> = read_json_array(&self.path).await?;
        upsert(&mut quizzes, quiz);
        write_json_atomic(&self.path, &quizzes).await?;
        tracing::debug!(quiz = %quiz.id, path = %self.path.display(), "quiz saved");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut quizzes: Vec<Quiz> = read_json_array(&self.path).await?;
        let before = quizzes.len();
        quizzes.retain(|q| q.id != id);
        if quizzes.len() != before {
            write_json_atomic(&self.path, &quizzes).await?;
            tracing::debug!(quiz = id, path = %self.path.display(), "quiz deleted");
        }
        Ok(())
    }
}

/// Parse a JSON array file. A missing or blank file is an empty list.
pub(crate) async fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Pretty-print `value` to `path`, creating parent directories.
pub(crate) async fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_vec_pretty(value)?;
    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
