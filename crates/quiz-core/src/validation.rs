//! Quiz validation rules.
//!
//! Authoring is strict (exactly four options, exactly one correct). Playing is
//! lenient: any question with at least two options can be played, and the
//! answer key is never checked at play time.

use std::fmt;

use thiserror::Error;

use crate::entities::Quiz;
use crate::errors::CoreError;

/// Options every authored question must carry.
pub const AUTHORING_OPTION_COUNT: usize = 4;

/// Minimum options for a question to be playable.
pub const MIN_PLAYABLE_OPTIONS: usize = 2;

/// A single authoring rule violation. Question numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingTitle,
    NoQuestions,
    EmptyPrompt { question: usize },
    OptionCount { question: usize, found: usize },
    BlankOption { question: usize, option: usize },
    CorrectCount { question: usize, found: usize },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => f.write_str("title is required"),
            Self::NoQuestions => f.write_str("add at least one question"),
            Self::EmptyPrompt { question } => write!(f, "question {question} has no text"),
            Self::OptionCount { question, found } => write!(
                f,
                "question {question} has {found} options (expected {AUTHORING_OPTION_COUNT})"
            ),
            Self::BlankOption { question, option } => {
                write!(f, "question {question} option {option} has no text")
            }
            Self::CorrectCount { question, found } => write!(
                f,
                "question {question} has {found} correct options (expected exactly 1)"
            ),
        }
    }
}

/// Every issue found on a quiz, reported together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("quiz failed validation: {}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collect all authoring issues for a quiz. Empty means valid.
#[must_use]
pub fn authoring_issues(quiz: &Quiz) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if quiz.title.trim().is_empty() {
        issues.push(ValidationIssue::MissingTitle);
    }
    if quiz.questions.is_empty() {
        issues.push(ValidationIssue::NoQuestions);
    }

    for (idx, question) in quiz.questions.iter().enumerate() {
        let number = idx + 1;
        if question.text.trim().is_empty() {
            issues.push(ValidationIssue::EmptyPrompt { question: number });
        }
        if question.options.len() != AUTHORING_OPTION_COUNT {
            issues.push(ValidationIssue::OptionCount {
                question: number,
                found: question.options.len(),
            });
        }
        for (opt_idx, option) in question.options.iter().enumerate() {
            if option.text.trim().is_empty() {
                issues.push(ValidationIssue::BlankOption {
                    question: number,
                    option: opt_idx + 1,
                });
            }
        }
        let correct = question.correct_count();
        if correct != 1 {
            issues.push(ValidationIssue::CorrectCount {
                question: number,
                found: correct,
            });
        }
    }

    issues
}

/// Validate a quiz against the authoring rules.
///
/// # Errors
///
/// Returns [`ValidationError`] listing every issue found.
pub fn validate_authoring(quiz: &Quiz) -> Result<(), ValidationError> {
    let issues = authoring_issues(quiz);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

/// Check that a quiz can be played at all.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the quiz has no questions or a
/// question has fewer than two options.
pub fn validate_playable(quiz: &Quiz) -> Result<(), CoreError> {
    if quiz.questions.is_empty() {
        return Err(CoreError::Validation(format!(
            "quiz {} has no questions",
            quiz.id
        )));
    }
    if let Some((idx, question)) = quiz
        .questions
        .iter()
        .enumerate()
        .find(|(_, question)| question.options.len() < MIN_PLAYABLE_OPTIONS)
    {
        return Err(CoreError::Validation(format!(
            "question {} ({}) of quiz {} has {} options, need at least {MIN_PLAYABLE_OPTIONS}",
            idx + 1,
            question.id,
            quiz.id,
            question.options.len()
        )));
    }
    Ok(())
}
