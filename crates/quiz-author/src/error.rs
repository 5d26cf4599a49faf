use quiz_config::ConfigError;
use quiz_core::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthorError {
    #[error("admin login required, run `quizctl admin login`")]
    NotAuthenticated,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("admin session store error: {0}")]
    SessionStore(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("question {0} does not exist")]
    NoSuchQuestion(usize),

    #[error("question {question} has no option {option}")]
    NoSuchOption { question: usize, option: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("generated quiz rejected: {0}")]
    Generation(String),
}
