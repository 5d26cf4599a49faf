//! # quiz-config
//!
//! Layered configuration loading for the quiz workspace using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUIZ_*` prefix, `__` as separator)
//! 2. Project-level `.quiz/config.toml`
//! 3. User-level `~/.config/quizmaster/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUIZ_STORE__BACKEND` -> `store.backend`,
//! `QUIZ_GENERATOR__API_KEY` -> `generator.api_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use quiz_config::QuizConfig;
//!
//! let config = QuizConfig::load_with_dotenv().expect("config");
//!
//! if config.generator.is_configured() {
//!     println!("Generating with {}", config.generator.model);
//! }
//! ```

mod admin;
mod catalog;
mod error;
mod generator;
mod results;
mod session;
mod store;

pub use admin::AdminConfig;
pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use generator::GeneratorConfig;
pub use results::ResultsConfig;
pub use session::SessionConfig;
pub use store::{StoreBackend, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding project-local quiz state and config.
pub const PROJECT_DIR: &str = ".quiz";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub results: ResultsConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl QuizConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration using `project_root/.quiz/config.toml` as the
    /// project-local layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_at(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load a `.env` file from the current directory (or
    /// an ancestor) before building the figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_at(Path::new("."))
    }

    /// Build the figment provider chain for a project root.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_at(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("QUIZ_").split("__"))
    }

    /// Reject values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.tick_millis == 0 {
            return Err(ConfigError::InvalidValue {
                field: "session.tick_millis".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.catalog.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.page_size".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.results.keep == 0 {
            return Err(ConfigError::InvalidValue {
                field: "results.keep".into(),
                reason: "must keep at least one result".into(),
            });
        }
        if self.generator.min_questions > self.generator.max_questions {
            return Err(ConfigError::InvalidValue {
                field: "generator.min_questions".into(),
                reason: format!(
                    "{} exceeds generator.max_questions ({})",
                    self.generator.min_questions, self.generator.max_questions
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quizmaster").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = QuizConfig::default();
        assert!(!config.generator.is_configured());
        assert_eq!(config.store.backend, StoreBackend::Json);
        assert_eq!(config.results.keep, 20);
        assert!(config.session.lock_penalized);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = QuizConfig::figment_at(Path::new("/nonexistent-quiz-root"));
        let config: QuizConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.catalog.page_size, 6);
        assert_eq!(config.session.tick_millis, 1000);
    }

    #[test]
    fn validate_rejects_zero_tick() {
        let mut config = QuizConfig::default();
        config.session.tick_millis = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("session.tick_millis"));
    }

    #[test]
    fn validate_rejects_inverted_question_bounds() {
        let mut config = QuizConfig::default();
        config.generator.min_questions = 30;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
