//! Question screen view model.
//!
//! Option states, the progress header and the advance label are all derived
//! from the session on every render.

use crate::core::{Category, Feedback, Session};

/// How an option button should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    /// Nothing selected yet; the option can be clicked.
    Selectable,
    /// The locked-in answer.
    Selected,
    /// Another option was chosen; this one is inert.
    Disabled,
}

impl OptionState {
    /// Whether the option still accepts clicks.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, OptionState::Selectable)
    }
}

/// One option button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    /// Button text.
    pub label: String,
    /// Category the option is attributed to; the `Select` intent payload.
    pub category: Category,
    pub state: OptionState,
}

/// Everything the question screen renders.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    /// 1-based question number.
    pub number: usize,
    /// Number of questions in the session.
    pub total: usize,
    /// "Question N of M".
    pub header: String,
    /// Share of the quiz reached, counting the current question.
    pub progress_percent: f32,
    pub prompt: String,
    /// Options in session order.
    pub options: Vec<OptionVm>,
    /// Set once an option is selected.
    pub feedback: Option<Feedback>,
    /// Label of the advance control, present once an option is selected.
    pub advance_label: Option<&'static str>,
}

impl QuestionVm {
    /// "Correct!" or "Incorrect!" after a selection.
    #[must_use]
    pub fn feedback_text(&self) -> Option<&'static str> {
        self.feedback.map(Feedback::message)
    }
}

/// Map the active question. `None` once the session is complete.
#[must_use]
pub fn map_question(session: &Session) -> Option<QuestionVm> {
    let question = session.current_question()?;
    let selected = session.selected_category();
    let number = session.index() + 1;
    let total = session.question_count();

    let options = question
        .options
        .iter()
        .map(|option| OptionVm {
            label: option.label.clone(),
            category: option.category,
            state: match selected {
                None => OptionState::Selectable,
                Some(category) if category == option.category => OptionState::Selected,
                Some(_) => OptionState::Disabled,
            },
        })
        .collect();

    let advance_label = selected.map(|_| {
        if session.is_last_question() {
            "See Result"
        } else {
            "Next"
        }
    });

    Some(QuestionVm {
        number,
        total,
        header: format!("Question {number} of {total}"),
        progress_percent: (number * 100) as f32 / total as f32,
        prompt: question.text.clone(),
        options,
        feedback: session.feedback(),
        advance_label,
    })
}
