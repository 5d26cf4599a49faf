//! Presentation snapshot of a session.

use quiz_core::entities::QuizResult;
use quiz_core::enums::SessionStatus;
use serde::Serialize;

use crate::scoring::{Grade, Score};
use crate::session::QuizSession;

/// Everything a front end needs to draw the current screen. Option
/// correctness is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub quiz_id: String,
    pub title: String,
    pub status: SessionStatus,
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    /// Percentage through the quiz, counting the question on screen.
    pub progress: u32,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub selected: Option<String>,
    pub penalized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<String>,
    pub can_previous: bool,
    pub can_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    /// `A`, `B`, `C`, ...
    pub letter: char,
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub result: QuizResult,
    pub percentage: u32,
    pub grade: Grade,
    pub message: String,
}

impl ResultView {
    #[must_use]
    pub fn new(result: &QuizResult) -> Self {
        let score = Score {
            score: result.score,
            total: result.total,
        };
        let grade = score.grade();
        Self {
            result: result.clone(),
            percentage: score.percentage(),
            grade,
            message: grade.message().to_string(),
        }
    }
}

impl SessionView {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let index = session.current_index();
        let total = session.shuffled().len();
        let question = session.current_question();
        let slot = session.answers().get(index);

        let options = question
            .map(|q| {
                q.options
                    .iter()
                    .zip('A'..='Z')
                    .map(|(option, letter)| OptionView {
                        letter,
                        id: option.id.clone(),
                        text: option.text.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let progress = if total == 0 {
            0
        } else {
            u32::try_from(((index + 1) * 100 + total / 2) / total).unwrap_or(100)
        };

        Self {
            quiz_id: session.quiz().id.clone(),
            title: session.quiz().title.clone(),
            status: session.status(),
            position: index + 1,
            total,
            progress,
            prompt: question.map(|q| q.text.clone()).unwrap_or_default(),
            options,
            selected: slot.and_then(|s| s.chosen()).map(str::to_string),
            penalized: slot.is_some_and(crate::answer::AnswerSlot::is_penalty),
            remaining: session.remaining_secs().map(format_clock),
            can_previous: session.can_previous(),
            can_next: session.can_next(),
            result: session.result().map(ResultView::new),
        }
    }
}

/// `m:ss`, minutes unpadded.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
