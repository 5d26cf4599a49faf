//! Session-scoped shuffle of question and option order.
//!
//! Uses `SliceRandom::shuffle` (Fisher-Yates), so every permutation is
//! equally likely. Only order changes: ids, texts, and correctness flags
//! travel with their elements.

use quiz_core::entities::{Question, Quiz};
use rand::Rng;
use rand::seq::SliceRandom;

/// A quiz whose questions, and each question's options, have been permuted.
///
/// Built once per session run and never mutated, so option positions stay
/// stable while answers are being recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledQuiz {
    quiz: Quiz,
}

impl ShuffledQuiz {
    /// Copy `quiz` and shuffle its questions and every option list independently.
    pub fn new<R: Rng + ?Sized>(quiz: &Quiz, rng: &mut R) -> Self {
        let mut quiz = quiz.clone();
        quiz.questions.shuffle(rng);
        for question in &mut quiz.questions {
            question.options.shuffle(rng);
        }
        Self { quiz }
    }

    #[must_use]
    pub fn quiz_id(&self) -> &str {
        &self.quiz.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.quiz.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.quiz.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.quiz.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quiz.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quiz.questions.is_empty()
    }

    /// The shuffled copy as a plain quiz.
    #[must_use]
    pub const fn as_quiz(&self) -> &Quiz {
        &self.quiz
    }
}
