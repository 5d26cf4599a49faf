//! Editable quiz drafts.
//!
//! A draft is a `Quiz` that may be invalid while it is being edited; only
//! [`QuizDraft::finish`] checks the authoring rules. Question and option
//! positions in this API are 1-based, matching how they are shown to authors.

use quiz_core::entities::{Question, Quiz, QuizOption};
use quiz_core::ids::IdGenerator;
use quiz_core::validation::{AUTHORING_OPTION_COUNT, validate_authoring};

use crate::error::AuthorError;

/// Category given to new drafts.
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDraft {
    quiz: Quiz,
}

impl QuizDraft {
    /// Blank draft with a fresh id and the default category.
    pub fn new(ids: &dyn IdGenerator) -> Self {
        Self {
            quiz: Quiz {
                id: ids.next_id(),
                title: String::new(),
                description: String::new(),
                category: DEFAULT_CATEGORY.to_string(),
                time_limit: None,
                questions: Vec::new(),
            },
        }
    }

    /// Edit an existing quiz. Its id is kept, so saving replaces it.
    #[must_use]
    pub const fn edit(quiz: Quiz) -> Self {
        Self { quiz }
    }

    #[must_use]
    pub const fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.quiz.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.quiz.description = description.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.quiz.category = category.into();
    }

    /// Minutes allowed; `None` or `Some(0)` means untimed.
    pub fn set_time_limit(&mut self, minutes: Option<u32>) {
        self.quiz.time_limit = minutes.filter(|m| *m > 0);
    }

    /// Append a blank question with four blank options, the last one marked
    /// correct. Returns its 1-based position.
    pub fn add_question(&mut self, ids: &dyn IdGenerator) -> usize {
        let options = (0..AUTHORING_OPTION_COUNT)
            .map(|i| QuizOption {
                id: ids.next_id(),
                text: String::new(),
                is_correct: i + 1 == AUTHORING_OPTION_COUNT,
            })
            .collect();
        self.quiz.questions.push(Question {
            id: ids.next_id(),
            text: String::new(),
            options,
        });
        self.quiz.questions.len()
    }

    /// # Errors
    ///
    /// Returns `AuthorError::NoSuchQuestion` for an out-of-range position.
    pub fn set_question_text(
        &mut self,
        question: usize,
        text: impl Into<String>,
    ) -> Result<(), AuthorError> {
        self.question_mut(question)?.text = text.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AuthorError::NoSuchQuestion` or `AuthorError::NoSuchOption`
    /// for out-of-range positions.
    pub fn set_option_text(
        &mut self,
        question: usize,
        option: usize,
        text: impl Into<String>,
    ) -> Result<(), AuthorError> {
        let q = self.question_mut(question)?;
        let slot = option
            .checked_sub(1)
            .and_then(|i| q.options.get_mut(i))
            .ok_or(AuthorError::NoSuchOption { question, option })?;
        slot.text = text.into();
        Ok(())
    }

    /// Make `option` the only correct option of `question`.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::NoSuchQuestion` or `AuthorError::NoSuchOption`
    /// for out-of-range positions.
    pub fn set_correct(&mut self, question: usize, option: usize) -> Result<(), AuthorError> {
        let q = self.question_mut(question)?;
        if option == 0 || option > q.options.len() {
            return Err(AuthorError::NoSuchOption { question, option });
        }
        for (i, opt) in q.options.iter_mut().enumerate() {
            opt.is_correct = i + 1 == option;
        }
        Ok(())
    }

    /// Remove a question, shifting later ones up.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::NoSuchQuestion` for an out-of-range position.
    pub fn remove_question(&mut self, question: usize) -> Result<Question, AuthorError> {
        if question == 0 || question > self.quiz.questions.len() {
            return Err(AuthorError::NoSuchQuestion(question));
        }
        Ok(self.quiz.questions.remove(question - 1))
    }

    /// Check the authoring rules and hand back the quiz.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::Validation` listing every problem found.
    pub fn finish(self) -> Result<Quiz, AuthorError> {
        validate_authoring(&self.quiz)?;
        Ok(self.quiz)
    }

    fn question_mut(&mut self, question: usize) -> Result<&mut Question, AuthorError> {
        question
            .checked_sub(1)
            .and_then(|i| self.quiz.questions.get_mut(i))
            .ok_or(AuthorError::NoSuchQuestion(question))
    }
}
