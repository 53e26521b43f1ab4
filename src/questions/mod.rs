//! Quiz content: options, questions and the validated question bank.
//!
//! Everything here is immutable template data. Sessions shuffle copies of it.

pub mod definition;
pub mod bank;

pub use definition::{Options, Question, QuizOption};
pub use bank::QuestionBank;
