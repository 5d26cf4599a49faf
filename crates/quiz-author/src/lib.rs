//! # quiz-author
//!
//! The admin side of the quiz catalog:
//! - [`draft`]: editing a quiz and checking it against the authoring rules
//! - [`catalog`]: search and pagination for listings
//! - [`auth`]: admin login backed by a session file
//! - [`generator`]: AI-assisted quiz generation

pub mod auth;
pub mod catalog;
pub mod draft;
pub mod error;
pub mod generator;

pub use auth::{AdminAuth, AdminSession};
pub use catalog::{Page, paginate, search};
pub use draft::QuizDraft;
pub use error::AuthorError;
pub use generator::{GeminiGenerator, GeneratedQuiz, QuizGenerator};
