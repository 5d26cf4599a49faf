//! Shared fixtures for quiz-store unit tests.

use quiz_core::entities::{Question, Quiz, QuizOption};

/// A two-question quiz with four options per question, the first one correct.
pub fn sample_quiz(id: &str, title: &str) -> Quiz {
    Quiz {
        id: id.into(),
        title: title.into(),
        description: format!("{title} description"),
        category: "General".into(),
        time_limit: Some(3),
        questions: (1..=2)
            .map(|q| Question {
                id: format!("{id}-q{q}"),
                text: format!("{title} question {q}"),
                options: (1..=4)
                    .map(|o| QuizOption {
                        id: format!("{id}-q{q}-o{o}"),
                        text: format!("Option {o}"),
                        is_correct: o == 1,
                    })
                    .collect(),
            })
            .collect(),
    }
}
