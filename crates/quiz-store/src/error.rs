//! Storage error types for quiz-store.

use thiserror::Error;

/// Errors from catalog adapters and the result log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No quiz with this id exists in the catalog.
    #[error("Quiz not found: {0}")]
    NotFound(String),

    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Reading or writing a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored or received payload is not valid quiz JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error talking to the remote catalog.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote catalog answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },
}
