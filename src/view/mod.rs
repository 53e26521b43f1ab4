//! View models: pure projections of a session for the presentation layer.
//!
//! Nothing here mutates state. The presentation layer renders a `QuizVm`,
//! turns clicks into `Intent`s and hands them to the engine; the next render
//! maps the updated session again.

mod question_vm;
mod result_vm;

pub use question_vm::{OptionState, OptionVm, QuestionVm, map_question};
pub use result_vm::{ImageVm, RESULT_IMAGE_SIZE, ResultVm, image_path, map_result, share_text};

use crate::core::{QuizConfig, Session};
use crate::rules::QuizResult;

/// Everything the presentation layer needs to render one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizVm {
    Question(QuestionVm),
    Result(ResultVm),
}

/// Map a session to its current screen.
#[must_use]
pub fn map_session(session: &Session, config: &QuizConfig) -> QuizVm {
    match map_question(session) {
        Some(question) => QuizVm::Question(question),
        None => QuizVm::Result(map_result(QuizResult::summarize(session), config)),
    }
}
