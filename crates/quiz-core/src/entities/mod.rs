//! Entity structs for all quiz domain objects.
//!
//! These structs are the JSON contract shared with every storage backend and
//! with the content generator, so field names serialize in camelCase
//! (`isCorrect`, `timeLimit`, `quizId`). All derive `JsonSchema` for schema
//! validation in tests.

mod quiz;
mod result;

pub use quiz::{Question, Quiz, QuizOption};
pub use result::QuizResult;
