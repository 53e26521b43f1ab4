//! The quiz engine: session creation, state transitions and scoring.
//!
//! The engine owns the question bank, configuration and RNG. It never owns
//! a session: callers hold the `Session` and lend it to the engine for the
//! duration of one intent.
//!
//! ## State machine
//!
//! ```text
//! AwaitingAnswer --select--> Answered --advance (not last)--> AwaitingAnswer
//!                            Answered --advance (last)------> Complete
//! Complete --retake--> AwaitingAnswer (fresh shuffle)
//! ```
//!
//! Any other intent returns a `Rejection` and leaves the session untouched.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Category, Feedback, Intent, QuizConfig, QuizRng, Session};
use crate::error::{QuizError, Rejection};
use crate::questions::{Question, QuestionBank, QuizOption};

/// Result of a completed session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Category with the highest tally (first in enumeration order on ties).
    pub matched: Category,
    /// Correct answers.
    pub score: u32,
    /// Questions in the session.
    pub total: usize,
}

impl QuizResult {
    /// Score a completed session.
    pub fn of(session: &Session) -> Result<Self, Rejection> {
        if !session.is_complete() {
            return Err(Rejection::SessionInProgress);
        }
        Ok(Self::summarize(session))
    }

    /// Summarize a session's tallies so far, complete or not.
    #[must_use]
    pub(crate) fn summarize(session: &Session) -> Self {
        Self {
            matched: session.tally().leader(),
            score: session.score(),
            total: session.question_count(),
        }
    }
}

/// What an accepted advance did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Next(usize),
    /// The last question was passed; the session is complete.
    Finished,
}

/// What an accepted intent did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Selected(Feedback),
    Advanced(Advance),
    Restarted,
}

/// Quiz engine.
///
/// ## Example
///
/// ```
/// use animal_quiz::core::{Intent, QuizConfig};
/// use animal_quiz::rules::QuizEngine;
///
/// let mut engine = QuizEngine::new(QuizConfig::new().with_seed(42)).unwrap();
/// let mut session = engine.initialize();
///
/// while !session.is_complete() {
///     let correct = session.current_question().unwrap().correct_option().unwrap().category;
///     engine.apply(&mut session, Intent::Select(correct)).unwrap();
///     engine.apply(&mut session, Intent::Advance).unwrap();
/// }
///
/// let result = engine.compute_result(&session).unwrap();
/// assert_eq!(result.score, 5);
/// ```
#[derive(Clone, Debug)]
pub struct QuizEngine {
    config: QuizConfig,
    bank: QuestionBank,
    rng: QuizRng,
}

impl QuizEngine {
    /// Build an engine from configuration, validating any custom questions.
    pub fn new(config: QuizConfig) -> Result<Self, QuizError> {
        let bank = config.bank()?;
        Ok(Self::with_bank(bank, config))
    }

    /// Build an engine over an already validated bank.
    ///
    /// `config.questions` is ignored in favour of `bank`.
    #[must_use]
    pub fn with_bank(bank: QuestionBank, config: QuizConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => QuizRng::new(seed),
            None => QuizRng::from_entropy(),
        };
        debug!(seed = rng.seed(), questions = bank.len(), "quiz engine ready");
        Self { config, bank, rng }
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// The template question set.
    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Start a new session.
    ///
    /// Question order and each question's option order are shuffled
    /// independently, each with a uniform Fisher-Yates shuffle.
    pub fn initialize(&mut self) -> Session {
        let mut rng = self.rng.fork();
        let seed = rng.seed();

        let mut questions: Vec<Question> = self.bank.questions().to_vec();
        rng.shuffle(&mut questions);
        for question in &mut questions {
            rng.shuffle(&mut question.options);
        }
        trace!(seed, "questions and options shuffled");

        debug!(seed, questions = questions.len(), "session initialized");
        Session::new(Vector::from(questions), seed)
    }

    /// Select an option on the current question.
    ///
    /// Rejected without effect when the session is complete, when the
    /// question already has a selection, or when `option` is not one of
    /// the current question's options.
    pub fn select_option(&self, session: &mut Session, option: &QuizOption) -> Result<Feedback, Rejection> {
        let owned = self.lookup_option(session, option.category)?.clone();
        if owned != *option {
            return self.reject(session, Rejection::ForeignOption(option.category));
        }
        Ok(self.commit_selection(session, owned))
    }

    /// Select the current question's option attributed to `category`.
    pub fn select_category(&self, session: &mut Session, category: Category) -> Result<Feedback, Rejection> {
        let owned = self.lookup_option(session, category)?.clone();
        Ok(self.commit_selection(session, owned))
    }

    /// Move past the answered question.
    pub fn advance(&self, session: &mut Session) -> Result<Advance, Rejection> {
        if session.is_complete() {
            return self.reject(session, Rejection::SessionComplete);
        }
        if session.selected_category().is_none() {
            return self.reject(session, Rejection::NotAnswered);
        }

        session.record_intent(Intent::Advance, session.index());
        session.step();

        if session.is_complete() {
            debug!(score = session.score(), total = session.question_count(), "session complete");
            Ok(Advance::Finished)
        } else {
            debug!(index = session.index(), "advanced");
            Ok(Advance::Next(session.index()))
        }
    }

    /// Compute the matched category of a completed session.
    ///
    /// The match is the category with the highest tally. Ties go to the
    /// category declared first in `Category`, so a perfect run or a run
    /// with no correct answers both resolve to `Category::Cat`.
    pub fn compute_result(&self, session: &Session) -> Result<QuizResult, Rejection> {
        QuizResult::of(session)
    }

    /// Replace a completed session with a freshly shuffled one.
    pub fn retake(&mut self, session: &mut Session) -> Result<(), Rejection> {
        if !session.is_complete() {
            return self.reject(session, Rejection::SessionInProgress);
        }
        *session = self.initialize();
        debug!(seed = session.seed(), "retake");
        Ok(())
    }

    /// Dispatch a user intent.
    pub fn apply(&mut self, session: &mut Session, intent: Intent) -> Result<Outcome, Rejection> {
        match intent {
            Intent::Select(category) => self.select_category(session, category).map(Outcome::Selected),
            Intent::Advance => self.advance(session).map(Outcome::Advanced),
            Intent::Retake => self.retake(session).map(|()| Outcome::Restarted),
        }
    }

    // === Helpers ===

    /// Resolve `category` to the current question's option, checking the lock.
    fn lookup_option<'s>(&self, session: &'s Session, category: Category) -> Result<&'s QuizOption, Rejection> {
        if session.is_complete() {
            return self.reject(session, Rejection::SessionComplete);
        }
        if session.selected_category().is_some() {
            return self.reject(session, Rejection::AlreadyAnswered);
        }
        match session.current_question().and_then(|q| q.option(category)) {
            Some(option) => Ok(option),
            None => self.reject(session, Rejection::ForeignOption(category)),
        }
    }

    fn commit_selection(&self, session: &mut Session, option: QuizOption) -> Feedback {
        session.record_intent(Intent::Select(option.category), session.index());
        session.record_selection(&option);
        let feedback = Feedback::for_option(&option);
        debug!(
            index = session.index(),
            category = %option.category,
            ?feedback,
            score = session.score(),
            "option selected"
        );
        feedback
    }

    fn reject<T>(&self, session: &Session, rejection: Rejection) -> Result<T, Rejection> {
        debug!(index = session.index(), %rejection, "intent ignored");
        Err(rejection)
    }
}
