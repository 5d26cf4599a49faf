//! Shared fixtures for unit tests.

use quiz_core::entities::{Question, Quiz, QuizOption};

/// Quiz with `questions` questions of `options` options each. In question
/// `q{n}` the option `q{n}-o0` is correct, the rest are not.
pub fn numbered_quiz(questions: usize, options: usize) -> Quiz {
    Quiz {
        id: "quiz-numbers".into(),
        title: "Numbers".into(),
        description: "Generated fixture".into(),
        category: "Test".into(),
        time_limit: None,
        questions: (0..questions)
            .map(|q| Question {
                id: format!("q{q}"),
                text: format!("Question {q}"),
                options: (0..options)
                    .map(|o| QuizOption {
                        id: format!("q{q}-o{o}"),
                        text: format!("Answer {o}"),
                        is_correct: o == 0,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Correct option id for the question with id `question_id` in [`numbered_quiz`].
pub fn correct_id(question_id: &str) -> String {
    format!("{question_id}-o0")
}

/// A wrong option id for the question with id `question_id`.
pub fn wrong_id(question_id: &str) -> String {
    format!("{question_id}-o1")
}
