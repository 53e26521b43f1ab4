//! User intents forwarded by the presentation layer.
//!
//! The presentation layer never mutates a session itself. It turns clicks
//! into `Intent`s and hands them to the engine, which accepts or rejects them.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A discrete user action.
///
/// Options are addressed by category: within one question every option
/// belongs to a different category, so the category identifies it uniquely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "category", rename_all = "snake_case")]
pub enum Intent {
    /// Choose the option attributed to this category on the current question.
    Select(Category),
    /// Move past the answered question.
    Advance,
    /// Throw the session away and start over with a fresh shuffle.
    Retake,
}

/// An accepted intent, kept for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// The intent that was applied.
    pub intent: Intent,

    /// Question index the session was on when the intent was applied.
    pub question: usize,

    /// Position of this record in the session history.
    pub sequence: usize,
}

impl IntentRecord {
    /// Create a new intent record.
    #[must_use]
    pub fn new(intent: Intent, question: usize, sequence: usize) -> Self {
        Self {
            intent,
            question,
            sequence,
        }
    }
}
