//! Session: the mutable state of one quiz attempt.
//!
//! A `Session` is created by `QuizEngine::initialize` and owned by the
//! caller. Only the engine mutates it; everything else reads it.
//!
//! ## Invariants
//!
//! - `score == tally.total()`
//! - `score <= answered()`
//! - `index <= question_count()`
//! - at most one selection per question, and it never changes once made
//!
//! Questions are stored in an `im::Vector`, so snapshotting a session
//! (undo stacks, view diffing) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryMap};
use super::intent::{Intent, IntentRecord};
use crate::questions::{Question, QuizOption};

/// Answer feedback shown after a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    /// Feedback for an option.
    #[must_use]
    pub fn for_option(option: &QuizOption) -> Self {
        if option.is_correct {
            Feedback::Correct
        } else {
            Feedback::Incorrect
        }
    }

    /// User-facing message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct!",
            Feedback::Incorrect => "Incorrect!",
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Where a session stands in the quiz state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// The current question has no selection yet.
    AwaitingAnswer,
    /// The current question has been answered with this category.
    Answered(Category),
    /// Every question has been answered and advanced past.
    Complete,
}

/// One attempt at the quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Shuffled questions, each with shuffled options.
    questions: Vector<Question>,

    /// Index of the active question.
    index: usize,

    /// Number of correct answers so far.
    score: u32,

    /// Correct answers per category.
    tally: CategoryMap<u32>,

    /// Selection on the active question.
    selected: Option<Category>,

    /// Set once the last question has been advanced past.
    complete: bool,

    /// Seed of the RNG branch that shuffled this session.
    seed: u64,

    /// Accepted intents, oldest first.
    history: Vector<IntentRecord>,
}

impl Session {
    /// Create a fresh session over already-shuffled questions.
    #[must_use]
    pub(crate) fn new(questions: Vector<Question>, seed: u64) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
            tally: CategoryMap::default(),
            selected: None,
            complete: false,
            seed,
            history: Vector::new(),
        }
    }

    // === Queries ===

    /// All questions in session order.
    #[must_use]
    pub fn questions(&self) -> &Vector<Question> {
        &self.questions
    }

    /// Total number of questions.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Index of the active question (equals the last index once complete).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The active question, or `None` once complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.complete {
            None
        } else {
            self.questions.get(self.index)
        }
    }

    /// Whether the active question is the last one.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// Correct answers so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Correct answers per category.
    #[must_use]
    pub fn tally(&self) -> &CategoryMap<u32> {
        &self.tally
    }

    /// Category of the selected option on the active question.
    #[must_use]
    pub fn selected_category(&self) -> Option<Category> {
        self.selected
    }

    /// The selected option on the active question.
    #[must_use]
    pub fn selected(&self) -> Option<&QuizOption> {
        let category = self.selected?;
        self.current_question()?.option(category)
    }

    /// Feedback for the active selection, cleared on advance.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.selected().map(Feedback::for_option)
    }

    /// Whether the session has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn answered(&self) -> usize {
        if self.complete {
            self.questions.len()
        } else {
            self.index + usize::from(self.selected.is_some())
        }
    }

    /// Current state-machine phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.complete, self.selected) {
            (true, _) => SessionPhase::Complete,
            (false, Some(category)) => SessionPhase::Answered(category),
            (false, None) => SessionPhase::AwaitingAnswer,
        }
    }

    /// Seed of the RNG branch that shuffled this session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Accepted intents, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<IntentRecord> {
        &self.history
    }

    // === Transitions (engine only) ===

    /// Lock in a selection on the active question.
    pub(crate) fn record_selection(&mut self, option: &QuizOption) {
        debug_assert!(self.selected.is_none(), "selection already locked");
        self.selected = Some(option.category);
        if option.is_correct {
            self.score += 1;
            self.tally[option.category] += 1;
        }
    }

    /// Clear the selection and move on, completing after the last question.
    pub(crate) fn step(&mut self) {
        self.selected = None;
        if self.is_last_question() {
            self.complete = true;
        } else {
            self.index += 1;
        }
    }

    /// Append an accepted intent to the history.
    pub(crate) fn record_intent(&mut self, intent: Intent, question: usize) {
        let sequence = self.history.len();
        self.history.push_back(IntentRecord::new(intent, question, sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QuestionBank;

    fn session() -> Session {
        Session::new(QuestionBank::animals().iter().cloned().collect(), 1)
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.question_count(), 5);
        assert_eq!(s.index(), 0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.tally().total(), 0);
        assert_eq!(s.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(s.feedback(), None);
        assert_eq!(s.answered(), 0);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_record_correct_selection() {
        let mut s = session();
        let option = s.current_question().unwrap().option(Category::Cat).unwrap().clone();
        s.record_selection(&option);

        assert_eq!(s.score(), 1);
        assert_eq!(s.tally()[Category::Cat], 1);
        assert_eq!(s.phase(), SessionPhase::Answered(Category::Cat));
        assert_eq!(s.feedback(), Some(Feedback::Correct));
        assert_eq!(s.answered(), 1);
    }

    #[test]
    fn test_record_incorrect_selection() {
        let mut s = session();
        let option = s.current_question().unwrap().option(Category::Dog).unwrap().clone();
        s.record_selection(&option);

        assert_eq!(s.score(), 0);
        assert_eq!(s.tally().total(), 0);
        assert_eq!(s.feedback(), Some(Feedback::Incorrect));
    }

    #[test]
    fn test_step_through_to_complete() {
        let mut s = session();
        for i in 0..5 {
            assert_eq!(s.index(), i);
            let option = s.current_question().unwrap().options[0].clone();
            s.record_selection(&option);
            s.step();
            assert_eq!(s.selected_category(), None);
        }
        assert!(s.is_complete());
        assert_eq!(s.index(), 4);
        assert_eq!(s.phase(), SessionPhase::Complete);
        assert!(s.current_question().is_none());
        assert_eq!(s.answered(), 5);
    }

    #[test]
    fn test_history_sequence() {
        let mut s = session();
        s.record_intent(Intent::Select(Category::Fox), 0);
        s.record_intent(Intent::Advance, 0);

        let seqs: Vec<_> = s.history().iter().map(|r| r.sequence).collect();
        assert_eq!(seqs, vec![0, 1]);
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(Feedback::Correct.message(), "Correct!");
        assert_eq!(format!("{}", Feedback::Incorrect), "Incorrect!");
    }

    #[test]
    fn test_session_serialization() {
        let mut s = session();
        let option = s.current_question().unwrap().options[2].clone();
        s.record_selection(&option);

        let json = serde_json::to_string(&s).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
