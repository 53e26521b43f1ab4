//! Error types.
//!
//! Two families:
//! - `QuizError`: building a question bank or engine failed. Only raised
//!   during setup, never while a session is being played.
//! - `Rejection`: an intent was not valid for the current session state.
//!   The session is left untouched whenever one is returned.

use thiserror::Error;

use crate::core::Category;

/// Errors raised while constructing a question bank or engine.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question bank has no questions.
    #[error("question bank is empty")]
    EmptyBank,

    /// A question does not have exactly one option per category.
    #[error("question {question} has {found} options, expected {expected}")]
    OptionCount {
        question: usize,
        found: usize,
        expected: usize,
    },

    /// A question offers the same category twice.
    #[error("question {question} lists category {category} more than once")]
    DuplicateCategory { question: usize, category: Category },

    /// A question does not have exactly one correct option.
    #[error("question {question} has {found} correct options, expected 1")]
    CorrectCount { question: usize, found: usize },

    /// The configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// An intent that was ignored because the session was not in a state to accept it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// An option was already selected for the current question.
    #[error("the current question has already been answered")]
    AlreadyAnswered,

    /// Advance was requested before an option was selected.
    #[error("the current question has not been answered yet")]
    NotAnswered,

    /// The session is finished; only a retake is accepted.
    #[error("the quiz is already complete")]
    SessionComplete,

    /// A result was requested while questions remain.
    #[error("the quiz is still in progress")]
    SessionInProgress,

    /// The option does not belong to the current question.
    #[error("option {0} is not part of the current question")]
    ForeignOption(Category),
}
