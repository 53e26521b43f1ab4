//! Quiz configuration.
//!
//! Callers configure the engine at startup with a `QuizConfig`, either via
//! builder methods or parsed from TOML:
//!
//! ```toml
//! seed = 42
//! title = "Animal Quiz"
//! share_url = "https://example.com"
//! image_root = "/static/"
//! ```
//!
//! A `[[questions]]` array may replace the built-in question bank.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::questions::{Question, QuestionBank};

/// Default link appended to the share text.
pub const DEFAULT_SHARE_URL: &str = "https://example.com";

/// Default quiz title used in the share text.
pub const DEFAULT_TITLE: &str = "Animal Quiz";

/// Default prefix for result image paths.
pub const DEFAULT_IMAGE_ROOT: &str = "/";

/// Complete quiz configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// RNG seed. `None` seeds from OS entropy, so every run shuffles differently.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Quiz title, as quoted in the share text.
    #[serde(default = "default_title")]
    pub title: String,

    /// Link appended to the share text.
    #[serde(default = "default_share_url")]
    pub share_url: String,

    /// Prefix for `<category>.png` result images.
    #[serde(default = "default_image_root")]
    pub image_root: String,

    /// Custom question set. `None` uses the built-in animal questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_share_url() -> String {
    DEFAULT_SHARE_URL.to_string()
}

fn default_image_root() -> String {
    DEFAULT_IMAGE_ROOT.to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: None,
            title: default_title(),
            share_url: default_share_url(),
            image_root: default_image_root(),
            questions: None,
        }
    }
}

impl QuizConfig {
    /// Create a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, QuizError> {
        Ok(toml::from_str(text)?)
    }

    /// Fix the RNG seed for reproducible shuffles.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the quiz title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the share link.
    #[must_use]
    pub fn with_share_url(mut self, url: impl Into<String>) -> Self {
        self.share_url = url.into();
        self
    }

    /// Set the result image prefix.
    #[must_use]
    pub fn with_image_root(mut self, root: impl Into<String>) -> Self {
        self.image_root = root.into();
        self
    }

    /// Replace the built-in question set.
    #[must_use]
    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = Some(questions);
        self
    }

    /// Build the question bank this configuration describes.
    pub fn bank(&self) -> Result<QuestionBank, QuizError> {
        match &self.questions {
            Some(questions) => QuestionBank::new(questions.clone()),
            None => Ok(QuestionBank::animals()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.title, "Animal Quiz");
        assert_eq!(config.share_url, "https://example.com");
        assert_eq!(config.image_root, "/");
        assert_eq!(config.bank().unwrap(), QuestionBank::animals());
    }

    #[test]
    fn test_builder() {
        let config = QuizConfig::new()
            .with_seed(7)
            .with_title("Pet Quiz")
            .with_share_url("https://pets.example")
            .with_image_root("/img/");

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.title, "Pet Quiz");
        assert_eq!(config.share_url, "https://pets.example");
        assert_eq!(config.image_root, "/img/");
    }

    #[test]
    fn test_from_toml_partial() {
        let config = QuizConfig::from_toml_str("seed = 99\nshare_url = \"https://quiz.example\"\n").unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.share_url, "https://quiz.example");
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_from_toml_empty() {
        assert_eq!(QuizConfig::from_toml_str("").unwrap(), QuizConfig::default());
    }

    #[test]
    fn test_from_toml_with_questions() {
        let text = r#"
            [[questions]]
            text = "Which animal naps the most?"
            options = [
                { label = "Cat", category = "cat", is_correct = true },
                { label = "Dog", category = "dog" },
                { label = "Fox", category = "fox" },
                { label = "Hamster", category = "hamster" },
                { label = "Horse", category = "horse" },
            ]
        "#;
        let config = QuizConfig::from_toml_str(text).unwrap();
        let bank = config.bank().unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(
            bank.questions()[0].correct_option().map(|o| o.category),
            Some(Category::Cat)
        );
    }

    #[test]
    fn test_from_toml_invalid_bank() {
        let text = r#"
            [[questions]]
            text = "Too few"
            options = [{ label = "Cat", category = "cat", is_correct = true }]
        "#;
        let config = QuizConfig::from_toml_str(text).unwrap();
        assert!(matches!(config.bank(), Err(QuizError::OptionCount { found: 1, .. })));
    }

    #[test]
    fn test_from_toml_syntax_error() {
        assert!(matches!(QuizConfig::from_toml_str("seed = ["), Err(QuizError::Config(_))));
    }
}
