//! Embedded libSQL catalog.
//!
//! One row per quiz; the question list is stored as JSON text in the
//! `questions` column. Migrations are embedded at compile time and use
//! `IF NOT EXISTS`, so they run on every open.

use libsql::Builder;
use quiz_core::contracts::QuizRepository;
use quiz_core::entities::{Question, Quiz};

use crate::error::StoreError;

const MIGRATION_001: &str = include_str!("../migrations/001_quizzes.sql");

pub struct SqliteQuizStore {
    // Held so the database outlives `conn`.
    _db: libsql::Database,
    conn: libsql::Connection,
}

impl SqliteQuizStore {
    /// Open (or create) a local database file. `":memory:"` gives a
    /// throwaway database.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let store = Self { _db: db, conn };
        store.run_migrations().await?;
        tracing::debug!(path, "sqlite catalog opened");
        Ok(store)
    }

    async fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_quizzes: {e}")))?;
        Ok(())
    }
}

fn row_to_quiz(row: &libsql::Row) -> Result<Quiz, StoreError> {
    let questions_json = row.get::<String>(5)?;
    let questions: Vec<Question> = serde_json::from_str(&questions_json)?;
    let time_limit = row
        .get::<Option<i64>>(4)?
        .map(|minutes| {
            u32::try_from(minutes)
                .map_err(|_| StoreError::Query(format!("time_limit out of range: {minutes}")))
        })
        .transpose()?;

    Ok(Quiz {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        description: row.get::<Option<String>>(2)?.unwrap_or_default(),
        category: row.get::<Option<String>>(3)?.unwrap_or_default(),
        time_limit,
        questions,
    })
}

impl QuizRepository for SqliteQuizStore {
    type Error = StoreError;

    async fn list(&self) -> Result<Vec<Quiz>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, title, description, category, time_limit, questions
                 FROM quizzes ORDER BY rowid",
                (),
            )
            .await?;
        let mut quizzes = Vec::new();
        while let Some(row) = rows.next().await? {
            quizzes.push(row_to_quiz(&row)?);
        }
        Ok(quizzes)
    }

    async fn save(&self, quiz: &Quiz) -> Result<(), StoreError> {
        let questions = serde_json::to_string(&quiz.questions)?;
        self.conn
            .execute(
                "INSERT INTO quizzes (id, title, description, category, time_limit, questions)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(id) DO UPDATE SET
                   title = ?2, description = ?3, category = ?4, time_limit = ?5, questions = ?6",
                libsql::params![
                    quiz.id.as_str(),
                    quiz.title.as_str(),
                    quiz.description.as_str(),
                    quiz.category.as_str(),
                    quiz.time_limit.map(i64::from),
                    questions,
                ],
            )
            .await?;
        tracing::debug!(quiz = %quiz.id, "quiz saved");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM quizzes WHERE id = ?1", [id])
            .await?;
        tracing::debug!(quiz = id, affected, "quiz delete");
        Ok(())
    }
}
