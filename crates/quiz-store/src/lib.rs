//! # quiz-store
//!
//! Catalog persistence behind [`QuizRepository`](quiz_core::contracts::QuizRepository)
//! and the local result history behind
//! [`ResultSink`](quiz_core::contracts::ResultSink).
//!
//! Adapters:
//! - [`MemoryQuizStore`]: in-process list
//! - [`JsonFileStore`]: one JSON array file
//! - [`SqliteQuizStore`]: embedded libSQL database
//! - [`HttpQuizStore`]: remote quiz service
//!
//! [`QuizStore`] picks one of them from `[store]` configuration.

pub mod backend;
pub mod error;
pub mod http;
pub mod json_file;
pub mod memory;
pub mod results;
pub mod sqlite;

#[cfg(test)]
mod test_support;

pub use backend::QuizStore;
pub use error::StoreError;
pub use http::HttpQuizStore;
pub use json_file::JsonFileStore;
pub use memory::MemoryQuizStore;
pub use results::ResultLog;
pub use sqlite::SqliteQuizStore;
