//! # animal-quiz
//!
//! A quiz engine that asks a fixed set of multiple-choice questions,
//! tallies correct answers per animal, and matches the player to an animal.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: The engine never holds the `Session`. Callers
//!    own it and lend it to the engine for each intent.
//!
//! 2. **Reject, Don't Corrupt**: Intents that are invalid for the current
//!    state return a `Rejection` and leave the session untouched.
//!
//! 3. **Pure Presentation**: Rendering decisions (selected, disabled,
//!    labels, share text) are pure functions of the session.
//!
//! ## Architecture
//!
//! - **Deterministic Shuffles**: ChaCha8-backed RNG with one fork per
//!   session, so a fixed seed reproduces every session exactly.
//!
//! - **Persistent Data Structures**: Session questions live in an `im`
//!   vector, so snapshots are O(1).
//!
//! ## Modules
//!
//! - `core`: Categories, RNG, configuration, intents, session state
//! - `questions`: Options, questions, the validated question bank
//! - `rules`: `QuizEngine` state machine and scoring
//! - `view`: View models for the presentation layer
//! - `error`: Setup errors and intent rejections

pub mod core;
pub mod questions;
pub mod rules;
pub mod view;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Category, CategoryMap,
    QuizRng,
    QuizConfig,
    Intent, IntentRecord,
    Feedback, Session, SessionPhase,
};

pub use crate::questions::{Question, QuestionBank, QuizOption};

pub use crate::rules::{Advance, Outcome, QuizEngine, QuizResult};

pub use crate::view::{map_session, OptionState, QuizVm};

pub use crate::error::{QuizError, Rejection};
