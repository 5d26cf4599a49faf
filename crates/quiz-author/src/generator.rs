//! AI-assisted quiz generation.
//!
//! [`GeminiGenerator`] asks the Gemini `generateContent` API for a quiz on a
//! topic, constraining the reply with a JSON response schema. The reply is
//! checked (question count within the configured range, four options per
//! question, exactly one correct) and turned into a [`Quiz`] with ids minted
//! by the injected [`IdGenerator`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use quiz_config::GeneratorConfig;
use quiz_core::entities::{Question, Quiz, QuizOption};
use quiz_core::ids::IdGenerator;
use quiz_core::validation::AUTHORING_OPTION_COUNT;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AuthorError;

/// Produces a candidate quiz for a topic.
pub trait QuizGenerator: Send + Sync {
    fn generate(&self, topic: &str) -> impl Future<Output = Result<Quiz, AuthorError>> + Send;
}

// ---------------------------------------------------------------------------
// Generated payload
// ---------------------------------------------------------------------------

/// The structured reply the model is asked for.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuiz {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuestion {
    pub text: String,
    pub options: Vec<GeneratedOption>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOption {
    pub text: String,
    pub is_correct: bool,
}

impl GeneratedQuiz {
    /// Check the payload shape and assign ids.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::Generation` naming the first rule the payload breaks.
    pub fn into_quiz(
        self,
        ids: &dyn IdGenerator,
        min_questions: usize,
        max_questions: usize,
    ) -> Result<Quiz, AuthorError> {
        let count = self.questions.len();
        if !(min_questions..=max_questions).contains(&count) {
            return Err(AuthorError::Generation(format!(
                "expected {min_questions}-{max_questions} questions, got {count}"
            )));
        }
        if self.title.trim().is_empty() {
            return Err(AuthorError::Generation("missing title".into()));
        }
        for (idx, question) in self.questions.iter().enumerate() {
            let number = idx + 1;
            if question.options.len() != AUTHORING_OPTION_COUNT {
                return Err(AuthorError::Generation(format!(
                    "question {number} has {} options, expected {AUTHORING_OPTION_COUNT}",
                    question.options.len()
                )));
            }
            let correct = question.options.iter().filter(|o| o.is_correct).count();
            if correct != 1 {
                return Err(AuthorError::Generation(format!(
                    "question {number} has {correct} correct options, expected 1"
                )));
            }
        }

        Ok(Quiz {
            id: ids.next_id(),
            title: self.title,
            description: self.description,
            category: self.category,
            time_limit: None,
            questions: self
                .questions
                .into_iter()
                .map(|q| Question {
                    id: ids.next_id(),
                    text: q.text,
                    options: q
                        .options
                        .into_iter()
                        .map(|o| QuizOption {
                            id: ids.next_id(),
                            text: o.text,
                            is_correct: o.is_correct,
                        })
                        .collect(),
                })
                .collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Gemini client
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

pub struct GeminiGenerator {
    http: reqwest::Client,
    config: GeneratorConfig,
    ids: Arc<dyn IdGenerator>,
}

impl GeminiGenerator {
    /// # Errors
    ///
    /// Returns `AuthorError::Config` if no API key is configured, or
    /// `AuthorError::Http` if the HTTP client cannot be built.
    pub fn new(config: &GeneratorConfig, ids: Arc<dyn IdGenerator>) -> Result<Self, AuthorError> {
        config.require()?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("quizctl/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config: config.clone(),
            ids,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    fn request_body(&self, topic: &str) -> Value {
        let prompt = format!(
            "Generate a quiz in {language} about the topic: \"{topic}\". \
             The quiz must have at least {min} and at most {max} multiple-choice questions, \
             each with exactly 4 options of which exactly one is correct. \
             Return structured JSON.",
            language = self.config.language,
            min = self.config.min_questions,
            max = self.config.max_questions,
        );
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        })
    }
}

impl QuizGenerator for GeminiGenerator {
    async fn generate(&self, topic: &str) -> Result<Quiz, AuthorError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AuthorError::Generation("topic is empty".into()));
        }
        tracing::info!(topic, model = %self.config.model, "generating quiz");

        let resp = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&self.request_body(topic))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(AuthorError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let body: GenerateResponse = resp.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AuthorError::Generation("empty response from model".into()))?;

        let generated: GeneratedQuiz = serde_json::from_str(&text)
            .map_err(|e| AuthorError::Generation(format!("unparseable quiz JSON: {e}")))?;
        let quiz = generated.into_quiz(
            self.ids.as_ref(),
            self.config.min_questions,
            self.config.max_questions,
        )?;
        tracing::info!(quiz = %quiz.id, questions = quiz.questions.len(), "quiz generated");
        Ok(quiz)
    }
}

/// Response schema in the Gemini `Schema` dialect.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "category": { "type": "STRING" },
            "questions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "text": { "type": "STRING" },
                        "options": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "text": { "type": "STRING" },
                                    "isCorrect": { "type": "BOOLEAN" }
                                },
                                "required": ["text", "isCorrect"]
                            }
                        }
                    },
                    "required": ["text", "options"]
                }
            }
        },
        "required": ["title", "description", "category", "questions"]
    })
}
