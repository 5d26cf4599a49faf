//! In-process catalog.

use quiz_core::contracts::QuizRepository;
use quiz_core::entities::Quiz;
use tokio::sync::RwLock;

use crate::error::StoreError;

/// Quizzes held in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryQuizStore {
    quizzes: RwLock<Vec<Quiz>>,
}

impl MemoryQuizStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_quizzes(quizzes: Vec<Quiz>) -> Self {
        Self {
            quizzes: RwLock::new(quizzes),
        }
    }
}

impl QuizRepository for MemoryQuizStore {
    type Error = StoreError;

    async fn list(&self) -> Result<Vec<Quiz>, StoreError> {
        Ok(self.quizzes.read().await.clone())
    }

    async fn save(&self, quiz: &Quiz) -> Result<(), StoreError> {
        upsert(&mut *self.quizzes.write().await, quiz);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.quizzes.write().await.retain(|q| q.id != id);
        Ok(())
    }
}

/// Replace the quiz with the same id in place, or append it.
pub(crate) fn upsert(quizzes: &mut Vec<Quiz>, quiz: &Quiz) {
    match quizzes.iter_mut().find(|q| q.id == quiz.id) {
        Some(existing) => *existing = quiz.clone(),
        None => quizzes.push(quiz.clone()),
    }
}
