use serde::{Deserialize, Serialize};

/// What a session has recorded for one question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "optionId", rename_all = "snake_case")]
pub enum AnswerSlot {
    #[default]
    Unanswered,
    /// The player picked this option id.
    Chosen(String),
    /// Skipped by an integrity violation. Never matches an option.
    Penalty,
}

impl AnswerSlot {
    /// `true` for anything other than `Unanswered`. A penalty counts as
    /// answered so `next()` can move past it.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        !matches!(self, Self::Unanswered)
    }

    #[must_use]
    pub const fn is_penalty(&self) -> bool {
        matches!(self, Self::Penalty)
    }

    /// The chosen option id, if the player picked one.
    #[must_use]
    pub fn chosen(&self) -> Option<&str> {
        match self {
            Self::Chosen(id) => Some(id),
            Self::Unanswered | Self::Penalty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slot_predicates() {
        assert!(!AnswerSlot::Unanswered.is_filled());
        assert!(AnswerSlot::Penalty.is_filled());
        assert!(AnswerSlot::Penalty.is_penalty());
        assert!(AnswerSlot::Chosen("o1".into()).is_filled());
        assert_eq!(AnswerSlot::Chosen("o1".into()).chosen(), Some("o1"));
        assert_eq!(AnswerSlot::Penalty.chosen(), None);
    }

    #[test]
    fn slot_serializes_tagged() {
        let json = serde_json::to_value(AnswerSlot::Chosen("o2".into())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "chosen", "optionId": "o2"}));
        let json = serde_json::to_value(AnswerSlot::Penalty).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "penalty"}));
    }
}
