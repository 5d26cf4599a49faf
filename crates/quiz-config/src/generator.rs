//! AI-assisted quiz generation configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_language() -> String {
    "English".to_string()
}

const fn default_min_questions() -> usize {
    5
}

const fn default_max_questions() -> usize {
    20
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// API key for the text-generation service. Empty disables generation.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generation API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Language the generated quiz is written in.
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_min_questions")]
    pub min_questions: usize,

    #[serde(default = "default_max_questions")]
    pub max_questions: usize,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            language: default_language(),
            min_questions: default_min_questions(),
            max_questions: default_max_questions(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeneratorConfig {
    /// Check if the generator has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.model.is_empty()
    }

    /// Fail with [`ConfigError::NotConfigured`] unless configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the API key is missing.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: "generator".into(),
            })
        }
    }
}
