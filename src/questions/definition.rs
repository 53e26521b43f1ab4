//! Question definitions - static quiz data.
//!
//! `Question` and `QuizOption` are immutable template data. A session works
//! on a shuffled copy, so the template order carries no meaning for play.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Category;

/// Inline capacity for a question's options: one per category.
pub type Options = SmallVec<[QuizOption; Category::COUNT]>;

/// A single answer choice, attributed to one category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizOption {
    /// Text shown on the option button.
    pub label: String,

    /// Category credited when this option is the correct answer.
    pub category: Category,

    /// Whether choosing this option scores a point.
    #[serde(default)]
    pub is_correct: bool,
}

impl QuizOption {
    /// Create an incorrect option.
    #[must_use]
    pub fn new(label: impl Into<String>, category: Category) -> Self {
        Self {
            label: label.into(),
            category,
            is_correct: false,
        }
    }

    /// Mark this option as the correct answer (builder pattern).
    #[must_use]
    pub fn correct(mut self) -> Self {
        self.is_correct = true;
        self
    }
}

/// A multiple-choice question.
///
/// ## Example
///
/// ```
/// use animal_quiz::core::Category;
/// use animal_quiz::questions::Question;
///
/// let q = Question::one_per_category("Which animal purrs?", Category::Cat);
///
/// assert_eq!(q.options.len(), 5);
/// assert_eq!(q.correct_option().map(|o| o.category), Some(Category::Cat));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// Prompt text.
    pub text: String,

    /// Answer choices, in display order.
    pub options: Options,
}

impl Question {
    /// Create a question from explicit options.
    #[must_use]
    pub fn new(text: impl Into<String>, options: impl IntoIterator<Item = QuizOption>) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().collect(),
        }
    }

    /// Create a question offering every category, labelled with its
    /// capitalized name, with `correct` as the right answer.
    #[must_use]
    pub fn one_per_category(text: impl Into<String>, correct: Category) -> Self {
        let options = Category::all().map(|category| {
            let option = QuizOption::new(category.label(), category);
            if category == correct {
                option.correct()
            } else {
                option
            }
        });
        Self::new(text, options)
    }

    /// The option attributed to `category`, if offered.
    #[must_use]
    pub fn option(&self, category: Category) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.category == category)
    }

    /// The correct option, if any.
    #[must_use]
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_builder() {
        let option = QuizOption::new("Fox", Category::Fox);
        assert!(!option.is_correct);
        assert!(option.correct().is_correct);
    }

    #[test]
    fn test_one_per_category() {
        let q = Question::one_per_category("Which animal is fastest?", Category::Horse);

        let categories: Vec<_> = q.options.iter().map(|o| o.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert_eq!(q.options.iter().filter(|o| o.is_correct).count(), 1);
        assert_eq!(q.option(Category::Horse).map(|o| o.label.as_str()), Some("Horse"));
        assert!(!q.options.spilled());
    }

    #[test]
    fn test_question_serialization() {
        let q = Question::one_per_category("Pick one", Category::Dog);
        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(q, back);
    }

    #[test]
    fn test_missing_is_correct_defaults_false() {
        let json = r#"{"label":"Dog","category":"dog"}"#;
        let option: QuizOption = serde_json::from_str(json).unwrap();
        assert!(!option.is_correct);
    }
}
