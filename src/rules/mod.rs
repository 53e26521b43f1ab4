//! Quiz rules: the engine that drives a session through its state machine.
//!
//! `QuizEngine` creates sessions, validates and applies user intents, and
//! scores completed sessions. It never interprets presentation concerns;
//! those live in `view`.

pub mod engine;

pub use engine::{Advance, Outcome, QuizEngine, QuizResult};
