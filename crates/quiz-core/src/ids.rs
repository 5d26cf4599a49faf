//! Id generation.
//!
//! Everything that mints an id (results, drafts, generated questions and
//! options) takes an `IdGenerator` so tests can substitute deterministic ids.

use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix for ids minted by [`SequentialIds`] for results.
pub const PREFIX_RESULT: &str = "res";
/// Prefix for quiz ids.
pub const PREFIX_QUIZ: &str = "quiz";
/// Prefix for question ids.
pub const PREFIX_QUESTION: &str = "qst";
/// Prefix for option ids.
pub const PREFIX_OPTION: &str = "opt";

/// Source of unique identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers. The production generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `{prefix}-{n}` identifiers, counting from 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{n}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sequential_ids_count_from_one() {
        let ids = SequentialIds::new(PREFIX_RESULT);
        assert_eq!(ids.next_id(), "res-1");
        assert_eq!(ids.next_id(), "res-2");
    }

    #[test]
    fn uuid_ids_are_unique() {
        let ids = UuidIds;
        let minted: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(minted.len(), 100);
        assert!(minted.iter().all(|id| uuid::Uuid::parse_str(id).is_ok()));
    }
}
