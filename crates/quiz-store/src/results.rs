//! Local result history.

use std::path::{Path, PathBuf};

use quiz_core::contracts::ResultSink;
use quiz_core::entities::QuizResult;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::json_file::{read_json_array, write_json_atomic};

/// Most recent results, newest first, capped at `keep` entries.
///
/// When opened with a path every `record` rewrites the file, and the entry
/// only becomes visible once that write succeeds. Recording a result whose id
/// is already present is a no-op.
#[derive(Debug)]
pub struct ResultLog {
    path: Option<PathBuf>,
    keep: usize,
    entries: Mutex<Vec<QuizResult>>,
}

impl ResultLog {
    /// Load the log stored at `path`, or start empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    pub async fn open(path: impl Into<PathBuf>, keep: usize) -> Result<Self, StoreError> {
        let path = path.into();
        let mut entries: Vec<QuizResult> = read_json_array(&path).await?;
        entries.truncate(keep);
        Ok(Self {
            path: Some(path),
            keep,
            entries: Mutex::new(entries),
        })
    }

    /// A log that is never written to disk.
    #[must_use]
    pub fn in_memory(keep: usize) -> Self {
        Self {
            path: None,
            keep,
            entries: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stored results, newest first.
    pub async fn recent(&self) -> Vec<QuizResult> {
        self.entries.lock().await.clone()
    }
}

impl ResultSink for ResultLog {
    type Error = StoreError;

    async fn record(&self, result: &QuizResult) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        if entries.iter().any(|entry| entry.id == result.id) {
            return Ok(());
        }
        let mut updated = Vec::with_capacity(entries.len() + 1);
        updated.push(result.clone());
        updated.extend(entries.iter().cloned());
        updated.truncate(self.keep);
        if let Some(path) = &self.path {
            write_json_atomic(path, updated.as_slice()).await?;
        }
        *entries = updated;
        tracing::debug!(result = %result.id, kept = entries.len(), "result recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn result(n: u32) -> QuizResult {
        QuizResult {
            id: format!("res-{n}"),
            quiz_id: "capitals".into(),
            quiz_title: "Capitals".into(),
            score: n % 4,
            total: 3,
            date: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, n % 60).unwrap(),
        }
    }

    #[tokio::test]
    async fn newest_first_and_capped() {
        let log = ResultLog::in_memory(20);
        for n in 1..=25 {
            log.record(&result(n)).await.unwrap();
        }
        let recent = log.recent().await;
        assert_eq!(recent.len(), 20);
        assert_eq!(recent[0].id, "res-25");
        assert_eq!(recent[19].id, "res-6");
    }

    #[tokio::test]
    async fn recording_the_same_result_twice_keeps_one_entry() {
        let log = ResultLog::in_memory(20);
        log.record(&result(1)).await.unwrap();
        log.record(&result(1)).await.unwrap();
        assert_eq!(log.recent().await.len(), 1);
    }

    #[tokio::test]
    async fn failed_write_keeps_the_result_retryable() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("d");
        let path = parent.join("results.json");
        let log = ResultLog::open(&path, 20).await.unwrap();

        std::fs::write(&parent, "not a directory").unwrap();
        assert!(log.record(&result(1)).await.is_err());
        assert!(log.recent().await.is_empty());

        std::fs::remove_file(&parent).unwrap();
        log.record(&result(1)).await.unwrap();
        assert_eq!(log.recent().await.len(), 1);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("res-1"));
    }

    #[tokio::test]
    async fn persisted_log_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".quiz").join("results.json");
        {
            let log = ResultLog::open(&path, 5).await.unwrap();
            log.record(&result(1)).await.unwrap();
            log.record(&result(2)).await.unwrap();
        }
        let log = ResultLog::open(&path, 5).await.unwrap();
        let ids: Vec<String> = log.recent().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["res-2", "res-1"]);
    }

    #[tokio::test]
    async fn reopening_with_smaller_keep_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        {
            let log = ResultLog::open(&path, 10).await.unwrap();
            for n in 1..=4 {
                log.record(&result(n)).await.unwrap();
            }
        }
        let log = ResultLog::open(&path, 2).await.unwrap();
        assert_eq!(log.recent().await.len(), 2);
    }

    #[tokio::test]
    async fn file_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let log = ResultLog::open(&path, 20).await.unwrap();
        log.record(&result(1)).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"quizTitle\""));
        assert!(raw.contains("\"quizId\""));
    }
}
