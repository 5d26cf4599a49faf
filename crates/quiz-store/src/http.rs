//! Remote catalog over HTTP.
//!
//! ```text
//! GET    {base}/health
//! GET    {base}/quizzes
//! POST   {base}/quizzes          upsert, body is the quiz JSON
//! DELETE {base}/quizzes/{id}
//! ```

use std::time::Duration;

use quiz_core::contracts::QuizRepository;
use quiz_core::entities::Quiz;

use crate::error::StoreError;

pub struct HttpQuizStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpQuizStore {
    /// Client for the service at `base_url` (for example
    /// `http://localhost:3001/api`). Every request is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Http` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("quizctl/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the service answers its health check.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the service is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), StoreError> {
        let url = format!("{}/health", self.base_url);
        check_response(self.http.get(&url).send().await?).await?;
        Ok(())
    }

    fn quiz_url(&self, id: &str) -> String {
        format!("{}/quizzes/{}", self.base_url, urlencoding::encode(id))
    }
}

impl QuizRepository for HttpQuizStore {
    type Error = StoreError;

    async fn list(&self) -> Result<Vec<Quiz>, StoreError> {
        let url = format!("{}/quizzes", self.base_url);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn save(&self, quiz: &Quiz) -> Result<(), StoreError> {
        let url = format!("{}/quizzes", self.base_url);
        check_response(self.http.post(&url).json(quiz).send().await?).await?;
        tracing::debug!(quiz = %quiz.id, "quiz saved remotely");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let resp = self.http.delete(self.quiz_url(id)).send().await?;
        // an id the service does not know is already deleted
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(());
        }
        check_response(resp).await?;
        Ok(())
    }
}

/// Non-success statuses become [`StoreError::Api`] carrying the body.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    if !resp.status().is_success() {
        return Err(StoreError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = check_response(mock_response(200, "[]")).await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn failure_carries_status_and_body() {
        let err = check_response(mock_response(500, "database locked"))
            .await
            .unwrap_err();
        match err {
            StoreError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database locked");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn trailing_slash_is_trimmed_and_ids_are_encoded() {
        let store = HttpQuizStore::new("http://localhost:3001/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(store.base_url(), "http://localhost:3001/api");
        assert_eq!(
            store.quiz_url("a b/c"),
            "http://localhost:3001/api/quizzes/a%20b%2Fc"
        );
    }
}
