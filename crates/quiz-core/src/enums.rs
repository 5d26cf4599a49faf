//! Session status and integrity violation enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `SessionStatus` provides `allowed_next_states()` to enforce valid
//! transitions in the session engine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SessionStatus
// ---------------------------------------------------------------------------

/// Lifecycle of one play session.
///
/// ```text
/// not_started → in_progress → completed
///      ↑______________|____________|   (reset)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl SessionStatus {
    /// Valid next states from the current state. Reset back to `NotStarted`
    /// is allowed from every state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::NotStarted => &[Self::InProgress, Self::NotStarted],
            Self::InProgress => &[Self::Completed, Self::NotStarted],
            Self::Completed => &[Self::NotStarted],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ViolationKind
// ---------------------------------------------------------------------------

/// A suspicious action observed while a session is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The page or terminal lost visibility/focus.
    Visibility,
    /// The pointer left the viewport entirely.
    PointerExit,
}

impl ViolationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visibility => "visibility",
            Self::PointerExit => "pointer_exit",
        }
    }

    /// User-facing notice shown before the penalty is applied.
    #[must_use]
    pub const fn notice(self) -> &'static str {
        match self {
            Self::Visibility => {
                "Focus change detected! The current question was skipped as a penalty."
            }
            Self::PointerExit => {
                "The pointer left the quiz window. The current question was skipped as a penalty."
            }
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
