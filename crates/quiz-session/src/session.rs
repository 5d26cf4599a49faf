//! The quiz play state machine.
//!
//! ```text
//! NotStarted --start--> InProgress --next/penalty on last, tick to 0--> Completed
//!      ^                     |                                            |
//!      +-------reset---------+--------------------reset-------------------+
//! ```
//!
//! A session owns its shuffled copy of the quiz and its answer slots
//! exclusively. Operations are synchronous and never fail for expected
//! input; see [`Transition`].

use std::sync::Arc;

use chrono::Utc;
use quiz_core::entities::{Question, Quiz, QuizResult};
use quiz_core::enums::{SessionStatus, ViolationKind};
use quiz_core::errors::CoreError;
use quiz_core::ids::IdGenerator;
use quiz_core::validation::validate_playable;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::answer::AnswerSlot;
use crate::scoring::{self, Score};
use crate::shuffle::ShuffledQuiz;
use crate::transition::{Notice, Transition};
use crate::view::SessionView;

pub struct QuizSession {
    quiz: Quiz,
    shuffled: ShuffledQuiz,
    status: SessionStatus,
    current_index: usize,
    answers: Vec<AnswerSlot>,
    remaining_secs: Option<u32>,
    result: Option<QuizResult>,
    rng: StdRng,
    ids: Arc<dyn IdGenerator>,
    lock_penalized: bool,
}

impl QuizSession {
    /// Create a session with an entropy-seeded shuffle.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the quiz has no questions or a
    /// question has fewer than two options.
    pub fn new(quiz: Quiz, ids: Arc<dyn IdGenerator>) -> Result<Self, CoreError> {
        Self::with_rng(quiz, ids, StdRng::from_entropy())
    }

    /// Create a session drawing every shuffle (initial and on reset) from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`QuizSession::new`].
    pub fn with_rng(
        quiz: Quiz,
        ids: Arc<dyn IdGenerator>,
        mut rng: StdRng,
    ) -> Result<Self, CoreError> {
        validate_playable(&quiz)?;
        let shuffled = ShuffledQuiz::new(&quiz, &mut rng);
        let answers = vec![AnswerSlot::Unanswered; quiz.question_count()];
        let remaining_secs = full_time(&quiz);
        Ok(Self {
            quiz,
            shuffled,
            status: SessionStatus::NotStarted,
            current_index: 0,
            answers,
            remaining_secs,
            result: None,
            rng,
            ids,
            lock_penalized: true,
        })
    }

    /// Whether `select_option` may overwrite a penalty slot. Locked by default.
    #[must_use]
    pub const fn with_penalty_lock(mut self, locked: bool) -> Self {
        self.lock_penalized = locked;
        self
    }

    // -- accessors ----------------------------------------------------------

    /// The quiz as supplied, before shuffling.
    #[must_use]
    pub const fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub const fn shuffled(&self) -> &ShuffledQuiz {
        &self.shuffled
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.shuffled.question(self.current_index)
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerSlot] {
        &self.answers
    }

    /// Seconds left, or `None` for an untimed quiz.
    #[must_use]
    pub const fn remaining_secs(&self) -> Option<u32> {
        self.remaining_secs
    }

    #[must_use]
    pub const fn is_timed(&self) -> bool {
        self.remaining_secs.is_some()
    }

    #[must_use]
    pub const fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        matches!(self.status, SessionStatus::InProgress)
    }

    /// Score of the answers recorded so far.
    #[must_use]
    pub fn score(&self) -> Score {
        scoring::score(&self.shuffled, &self.answers)
    }

    /// Whether `previous()` would currently be accepted.
    #[must_use]
    pub fn can_previous(&self) -> bool {
        self.previous_refusal().is_none()
    }

    /// Whether `next()` would currently be accepted.
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.next_refusal().is_none()
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }

    // -- operations ---------------------------------------------------------

    /// `NotStarted -> InProgress`. The host starts the timer and integrity
    /// monitoring when this returns `Transition::Started`.
    pub fn start(&mut self) -> Transition {
        if self.status != SessionStatus::NotStarted {
            return self.ignore("start", Notice::AlreadyStarted);
        }
        self.status = SessionStatus::InProgress;
        tracing::debug!(quiz = %self.quiz.id, questions = self.answers.len(), "session started");
        Transition::Started
    }

    /// Record `option_id` for the current question, replacing a previous choice.
    pub fn select_option(&mut self, option_id: &str) -> Transition {
        if !self.is_in_progress() {
            return self.ignore("select_option", Notice::NotInProgress);
        }
        let known = self
            .current_question()
            .is_some_and(|question| question.option(option_id).is_some());
        if !known {
            return self.ignore("select_option", Notice::UnknownOption);
        }
        let index = self.current_index;
        if self.lock_penalized && self.answers[index].is_penalty() {
            return self.ignore("select_option", Notice::PenaltyLocked);
        }

        self.answers[index] = AnswerSlot::Chosen(option_id.to_string());
        tracing::debug!(quiz = %self.quiz.id, index, option = option_id, "option selected");
        Transition::Selected {
            index,
            option_id: option_id.to_string(),
        }
    }

    /// Advance to the next question, or complete on the last one. Refused
    /// while the current question is unanswered.
    pub fn next(&mut self) -> Transition {
        if let Some(notice) = self.next_refusal() {
            return self.ignore("next", notice);
        }
        self.advance_or_complete()
    }

    /// Step back one question. Refused on the first question and when the
    /// preceding question was penalized.
    pub fn previous(&mut self) -> Transition {
        if let Some(notice) = self.previous_refusal() {
            return self.ignore("previous", notice);
        }
        self.current_index -= 1;
        tracing::debug!(quiz = %self.quiz.id, index = self.current_index, "moved back");
        Transition::Retreated {
            index: self.current_index,
        }
    }

    /// Mark the current question as a penalty (overwriting any answer), then
    /// advance or complete. Each call penalizes exactly one question.
    pub fn penalize_and_advance(&mut self, kind: ViolationKind) -> Transition {
        if !self.is_in_progress() {
            return self.ignore("penalize_and_advance", Notice::NotInProgress);
        }
        let index = self.current_index;
        self.answers[index] = AnswerSlot::Penalty;
        tracing::warn!(quiz = %self.quiz.id, index, violation = %kind, "question penalized");
        let then = self.advance_or_complete();
        Transition::Penalized {
            index,
            kind,
            then: Box::new(then),
        }
    }

    /// One second of play time elapsed. Completes the session when time runs out.
    pub fn tick(&mut self) -> Transition {
        if !self.is_in_progress() {
            return self.ignore("tick", Notice::NotInProgress);
        }
        let Some(remaining) = self.remaining_secs else {
            return self.ignore("tick", Notice::Untimed);
        };
        let remaining = remaining.saturating_sub(1);
        self.remaining_secs = Some(remaining);
        if remaining == 0 {
            tracing::info!(quiz = %self.quiz.id, "time is up");
            return self.complete();
        }
        Transition::Ticked { remaining }
    }

    /// Back to `NotStarted` with a fresh shuffle, cleared answers and result,
    /// and the full time limit. Accepted in every state.
    pub fn reset(&mut self) -> Transition {
        self.shuffled = ShuffledQuiz::new(&self.quiz, &mut self.rng);
        self.status = SessionStatus::NotStarted;
        self.current_index = 0;
        self.answers = vec![AnswerSlot::Unanswered; self.quiz.question_count()];
        self.result = None;
        self.remaining_secs = full_time(&self.quiz);
        tracing::debug!(quiz = %self.quiz.id, "session reset");
        Transition::Reset
    }

    // -- internals ----------------------------------------------------------

    fn next_refusal(&self) -> Option<Notice> {
        if !self.is_in_progress() {
            return Some(Notice::NotInProgress);
        }
        if !self.answers[self.current_index].is_filled() {
            return Some(Notice::Unanswered);
        }
        None
    }

    fn previous_refusal(&self) -> Option<Notice> {
        if !self.is_in_progress() {
            return Some(Notice::NotInProgress);
        }
        if self.current_index == 0 {
            return Some(Notice::AtFirstQuestion);
        }
        if self.answers[self.current_index - 1].is_penalty() {
            return Some(Notice::PreviousPenalized);
        }
        None
    }

    fn advance_or_complete(&mut self) -> Transition {
        if self.current_index + 1 >= self.shuffled.len() {
            return self.complete();
        }
        self.current_index += 1;
        tracing::debug!(quiz = %self.quiz.id, index = self.current_index, "advanced");
        Transition::Advanced {
            index: self.current_index,
        }
    }

    /// `InProgress -> Completed`, scoring the recorded answers.
    fn complete(&mut self) -> Transition {
        debug_assert!(self.status.can_transition_to(SessionStatus::Completed));
        let Score { score, .. } = self.score();
        let result = QuizResult {
            id: self.ids.next_id(),
            quiz_id: self.quiz.id.clone(),
            quiz_title: self.quiz.title.clone(),
            score,
            total: u32::try_from(self.quiz.question_count()).unwrap_or(u32::MAX),
            date: Utc::now(),
        };
        self.status = SessionStatus::Completed;
        self.result = Some(result.clone());
        tracing::info!(
            quiz = %self.quiz.id,
            result = %result.id,
            score = result.score,
            total = result.total,
            "session completed"
        );
        Transition::Completed { result }
    }

    fn ignore(&self, operation: &'static str, notice: Notice) -> Transition {
        tracing::warn!(
            quiz = %self.quiz.id,
            status = %self.status,
            index = self.current_index,
            operation,
            notice = notice.as_str(),
            "operation refused"
        );
        Transition::Ignored { notice }
    }
}

/// A zero limit means untimed.
fn full_time(quiz: &Quiz) -> Option<u32> {
    quiz.time_limit_secs().filter(|secs| *secs > 0)
}

impl std::fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("quiz", &self.quiz.id)
            .field("status", &self.status)
            .field("current_index", &self.current_index)
            .field("answers", &self.answers)
            .field("remaining_secs", &self.remaining_secs)
            .field("result", &self.result)
            .field("lock_penalized", &self.lock_penalized)
            .finish_non_exhaustive()
    }
}
