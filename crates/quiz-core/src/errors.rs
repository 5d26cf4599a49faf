//! Cross-cutting error types for the quiz workspace.
//!
//! Domain-specific errors (`StoreError`, `AuthorError`, `ConfigError`) are
//! defined in their respective crates. A unified error is deferred to
//! `quiz-cli` where all crate errors converge through `anyhow`.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can be raised by any quiz crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (shape, counts, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authoring rules rejected a quiz.
    #[error(transparent)]
    Authoring(#[from] ValidationError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
