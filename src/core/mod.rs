//! Core quiz types: categories, RNG, configuration, intents and session state.
//!
//! These are the building blocks the engine and view layer share.

pub mod category;
pub mod rng;
pub mod config;
pub mod intent;
pub mod session;

pub use category::{Category, CategoryMap, UnknownCategory};
pub use rng::QuizRng;
pub use config::QuizConfig;
pub use intent::{Intent, IntentRecord};
pub use session::{Feedback, Session, SessionPhase};
