//! Collaborator contracts.
//!
//! The session engine and the admin workflow depend only on these traits;
//! concrete storage technologies live in `quiz-store`. Methods return
//! `Send` futures so callers can hand them to a runtime task.

use std::future::Future;

use crate::entities::{Quiz, QuizResult};

/// Central quiz catalog: list, upsert, delete.
pub trait QuizRepository: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// All quizzes in the catalog.
    fn list(&self) -> impl Future<Output = Result<Vec<Quiz>, Self::Error>> + Send;

    /// Insert or replace a quiz keyed on its id.
    fn save(&self, quiz: &Quiz) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Remove a quiz. Deleting an unknown id is not an error.
    fn delete(&self, id: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Destination for completed results. Callers do not retry on failure.
pub trait ResultSink: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn record(&self, result: &QuizResult) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
