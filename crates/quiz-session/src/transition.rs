//! Outcomes of session operations.
//!
//! Every operation on [`QuizSession`](crate::QuizSession) returns a
//! `Transition`. Refused preconditions are `Transition::Ignored` carrying a
//! [`Notice`] for the player; nothing in the session raises an error for
//! expected input.

use quiz_core::entities::QuizResult;
use quiz_core::enums::ViolationKind;
use serde::Serialize;
use std::fmt;

/// What an operation did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transition {
    Started,
    /// An option was recorded for the question at `index`.
    Selected { index: usize, option_id: String },
    /// Moved forward to `index`.
    Advanced { index: usize },
    /// Moved back to `index`.
    Retreated { index: usize },
    /// The question at `index` was penalized. Followed by the advance or
    /// completion it forced.
    Penalized {
        index: usize,
        kind: ViolationKind,
        then: Box<Self>,
    },
    /// One second elapsed; `remaining` seconds are left.
    Ticked { remaining: u32 },
    /// The session finished and was scored.
    Completed { result: QuizResult },
    /// State wiped and the quiz re-shuffled.
    Reset,
    /// The operation was refused; state is unchanged.
    Ignored { notice: Notice },
}

impl Transition {
    /// The completion result, if this transition (or the one a penalty forced)
    /// finished the session.
    #[must_use]
    pub fn completed_result(&self) -> Option<&QuizResult> {
        match self {
            Self::Completed { result } => Some(result),
            Self::Penalized { then, .. } => then.completed_result(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }

    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        match self {
            Self::Ignored { notice } => Some(*notice),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

/// Why an operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// The session is not in progress (not started yet, or already completed).
    NotInProgress,
    /// `start()` on a session that is already running or finished.
    AlreadyStarted,
    /// `next()` while the current question has no answer.
    Unanswered,
    /// `previous()` on the first question.
    AtFirstQuestion,
    /// `previous()` when the preceding question was penalized.
    PreviousPenalized,
    /// `select_option()` on a penalized question while penalties are locked.
    PenaltyLocked,
    /// `select_option()` with an id that is not an option of the current question.
    UnknownOption,
    /// `tick()` on a quiz without a time limit.
    Untimed,
}

impl Notice {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotInProgress => "not_in_progress",
            Self::AlreadyStarted => "already_started",
            Self::Unanswered => "unanswered",
            Self::AtFirstQuestion => "at_first_question",
            Self::PreviousPenalized => "previous_penalized",
            Self::PenaltyLocked => "penalty_locked",
            Self::UnknownOption => "unknown_option",
            Self::Untimed => "untimed",
        }
    }

    /// Text shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotInProgress => "The quiz is not in progress.",
            Self::AlreadyStarted => "The quiz has already started.",
            Self::Unanswered => "Choose an answer before moving on.",
            Self::AtFirstQuestion => "This is the first question.",
            Self::PreviousPenalized => "You cannot go back to a penalized question.",
            Self::PenaltyLocked => "This question was skipped as a penalty and cannot be answered.",
            Self::UnknownOption => "That option does not belong to this question.",
            Self::Untimed => "This quiz has no time limit.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
