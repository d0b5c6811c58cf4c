//! Quiz error types.
//!
//! Lookup failures mean an answer references something the bank does not
//! contain. The front end only offers existing questions and choices, so
//! seeing one at runtime points at an integration defect, not bad user input.

use thiserror::Error;

use crate::model::Category;

/// Errors raised by the question bank, the scorer and the quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// An answer references a question id absent from the bank.
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),

    /// An answer's choice index is out of range for its question.
    #[error("choice index {index} out of range for question '{question_id}' ({len} choices)")]
    ChoiceOutOfRange {
        question_id: String,
        index: usize,
        len: usize,
    },

    /// The question bank has no questions.
    #[error("question bank is empty")]
    EmptyBank,

    /// A question has no choices.
    #[error("question '{0}' has no choices")]
    EmptyQuestion(String),

    /// Two questions share an id.
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(String),

    /// The highest reachable score for a category does not fit in a `u32`.
    #[error("weights for the {0} team overflow the maximum possible score")]
    WeightOverflow(Category),

    /// The session is complete, so there is no current question to answer.
    #[error("quiz is complete, no current question")]
    NoCurrentQuestion,
}

impl QuizError {
    /// Returns `true` for lookup failures (unknown question, bad index).
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            QuizError::UnknownQuestion(_) | QuizError::ChoiceOutOfRange { .. }
        )
    }

    /// Returns `true` for static configuration errors caught at bank construction.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            QuizError::EmptyBank
                | QuizError::EmptyQuestion(_)
                | QuizError::DuplicateQuestion(_)
                | QuizError::WeightOverflow(_)
        )
    }
}
