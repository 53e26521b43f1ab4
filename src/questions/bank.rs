//! Question bank: the validated template set a session is shuffled from.

use tracing::debug;

use super::definition::Question;
use crate::core::Category;
use crate::error::QuizError;

/// A validated, non-empty set of questions.
///
/// Every question offers exactly one option per category and exactly one
/// correct option, so any session built from a bank upholds the same shape.
///
/// ## Example
///
/// ```
/// use animal_quiz::questions::QuestionBank;
///
/// let bank = QuestionBank::animals();
/// assert_eq!(bank.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate and wrap a list of questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        for (index, question) in questions.iter().enumerate() {
            validate_question(index, question)?;
        }
        debug!(questions = questions.len(), "question bank validated");
        Ok(Self { questions })
    }

    /// The built-in animal quiz.
    #[must_use]
    pub fn animals() -> Self {
        Self {
            questions: vec![
                Question::one_per_category("What type of animal do you prefer for a pet?", Category::Cat),
                Question::one_per_category("Which animal do you think is the most independent?", Category::Cat),
                Question::one_per_category("Which animal would you choose for a quick getaway?", Category::Fox),
                Question::one_per_category("Which animal do you think is the most energetic?", Category::Dog),
                Question::one_per_category("Which animal would you prefer for a long ride?", Category::Horse),
            ],
        }
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated bank; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in template order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Iterate over questions in template order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::animals()
    }
}

fn validate_question(index: usize, question: &Question) -> Result<(), QuizError> {
    if question.options.len() != Category::COUNT {
        return Err(QuizError::OptionCount {
            question: index,
            found: question.options.len(),
            expected: Category::COUNT,
        });
    }

    let mut seen = [false; Category::COUNT];
    for option in &question.options {
        let slot = &mut seen[option.category.index()];
        if *slot {
            return Err(QuizError::DuplicateCategory {
                question: index,
                category: option.category,
            });
        }
        *slot = true;
    }

    let correct = question.options.iter().filter(|o| o.is_correct).count();
    if correct != 1 {
        return Err(QuizError::CorrectCount {
            question: index,
            found: correct,
        });
    }

    Ok(())
}
