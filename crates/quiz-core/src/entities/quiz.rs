use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A quiz as stored in the catalog. Never mutated by a play session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Time limit in minutes. `None` means untimed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Time limit converted to seconds, if the quiz is timed.
    #[must_use]
    pub fn time_limit_secs(&self) -> Option<u32> {
        self.time_limit.map(|minutes| minutes.saturating_mul(60))
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    /// Look up an option of this question by id.
    #[must_use]
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    /// Number of options flagged correct. Authoring requires exactly one.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.is_correct).count()
    }

    /// The first option flagged correct.
    #[must_use]
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.is_correct)
    }
}

/// One answer choice. Named `QuizOption` to stay clear of `std::option::Option`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}
