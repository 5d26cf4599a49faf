//! Scoring and result grading.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::answer::AnswerSlot;
use crate::shuffle::ShuffledQuiz;

/// Correct answers out of the question count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub score: u32,
    pub total: u32,
}

impl Score {
    /// Rounded percentage in `0..=100`. An empty quiz scores 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percentage(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let pct = (f64::from(self.score) / f64::from(self.total) * 100.0).round();
        pct.clamp(0.0, 100.0) as u32
    }

    #[must_use]
    pub fn grade(self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

/// Count answers that name a correct option of the question at the same index.
///
/// Unanswered and penalty slots never match. Slots beyond the question list
/// are ignored; the total is always the question count.
#[must_use]
pub fn score(quiz: &ShuffledQuiz, answers: &[AnswerSlot]) -> Score {
    let correct = quiz
        .questions()
        .iter()
        .zip(answers)
        .filter(|(question, slot)| {
            slot.chosen()
                .and_then(|id| question.option(id))
                .is_some_and(|option| option.is_correct)
        })
        .count();

    Score {
        score: u32::try_from(correct).unwrap_or(u32::MAX),
        total: u32::try_from(quiz.len()).unwrap_or(u32::MAX),
    }
}

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

/// Result-screen tier for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Perfect,
    Great,
    Good,
    KeepStudying,
}

impl Grade {
    #[must_use]
    pub const fn from_percentage(pct: u32) -> Self {
        match pct {
            100.. => Self::Perfect,
            70..=99 => Self::Great,
            50..=69 => Self::Good,
            _ => Self::KeepStudying,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Great => "great",
            Self::Good => "good",
            Self::KeepStudying => "keep_studying",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect! You got every question right.",
            Self::Great => "Great job! You know this topic well.",
            Self::Good => "Good effort! A little more practice will help.",
            Self::KeepStudying => "Keep studying! You will get there.",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    use super::*;
    use crate::test_support::{correct_id, numbered_quiz, wrong_id};

    #[test]
    fn all_correct_scores_total_for_any_shuffle() {
        let quiz = numbered_quiz(7, 4);
        for seed in 0..16 {
            let shuffled = ShuffledQuiz::new(&quiz, &mut StdRng::seed_from_u64(seed));
            let answers: Vec<AnswerSlot> = shuffled
                .questions()
                .iter()
                .map(|q| AnswerSlot::Chosen(correct_id(&q.id)))
                .collect();
            assert_eq!(score(&shuffled, &answers), Score { score: 7, total: 7 });
        }
    }

    #[test]
    fn unanswered_and_penalty_slots_score_zero() {
        let shuffled = ShuffledQuiz::new(&numbered_quiz(3, 4), &mut StdRng::seed_from_u64(3));
        let answers = vec![
            AnswerSlot::Unanswered,
            AnswerSlot::Penalty,
            AnswerSlot::Unanswered,
        ];
        assert_eq!(score(&shuffled, &answers), Score { score: 0, total: 3 });
    }

    #[test]
    fn answer_must_belong_to_the_question_at_that_index() {
        let shuffled = ShuffledQuiz::new(&numbered_quiz(2, 4), &mut StdRng::seed_from_u64(9));
        let first = shuffled.questions()[0].id.clone();
        let second = shuffled.questions()[1].id.clone();
        // correct option ids, but swapped between questions
        let answers = vec![
            AnswerSlot::Chosen(correct_id(&second)),
            AnswerSlot::Chosen(correct_id(&first)),
        ];
        assert_eq!(score(&shuffled, &answers).score, 0);
    }

    #[test]
    fn mixed_answers() {
        let shuffled = ShuffledQuiz::new(&numbered_quiz(4, 4), &mut StdRng::seed_from_u64(5));
        let ids: Vec<String> = shuffled.questions().iter().map(|q| q.id.clone()).collect();
        let answers = vec![
            AnswerSlot::Chosen(correct_id(&ids[0])),
            AnswerSlot::Chosen(wrong_id(&ids[1])),
            AnswerSlot::Penalty,
            AnswerSlot::Chosen(correct_id(&ids[3])),
        ];
        let result = score(&shuffled, &answers);
        assert_eq!(result, Score { score: 2, total: 4 });
        assert_eq!(result.percentage(), 50);
        assert_eq!(result.grade(), Grade::Good);
    }

    #[rstest]
    #[case(3, 3, 100, Grade::Perfect)]
    #[case(7, 10, 70, Grade::Great)]
    #[case(2, 3, 67, Grade::Good)]
    #[case(1, 2, 50, Grade::Good)]
    #[case(1, 3, 33, Grade::KeepStudying)]
    #[case(0, 0, 0, Grade::KeepStudying)]
    fn percentage_and_grade(
        #[case] correct: u32,
        #[case] total: u32,
        #[case] pct: u32,
        #[case] grade: Grade,
    ) {
        let s = Score {
            score: correct,
            total,
        };
        assert_eq!(s.percentage(), pct);
        assert_eq!(s.grade(), grade);
    }
}
