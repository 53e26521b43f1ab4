//! Result screen view model and the share text.

use crate::core::{Category, QuizConfig};
use crate::rules::QuizResult;

/// Rendered edge length of result images, in pixels.
pub const RESULT_IMAGE_SIZE: u32 = 512;

/// The matched animal's picture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageVm {
    /// Static asset path, see [`image_path`].
    pub src: String,
    /// Animal name.
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

impl ImageVm {
    /// Square result image for `category` under `image_root`.
    #[must_use]
    pub fn for_category(category: Category, image_root: &str) -> Self {
        Self {
            src: image_path(category, image_root),
            alt: category.name().to_string(),
            width: RESULT_IMAGE_SIZE,
            height: RESULT_IMAGE_SIZE,
        }
    }
}

/// Everything the result screen renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    /// The result this screen was built from.
    pub result: QuizResult,
    pub heading: &'static str,
    pub image: ImageVm,
    /// "You scored S out of T points."
    pub score_line: String,
    /// "You are most similar to a <Animal>!"
    pub match_line: String,
    /// Text handed to the share action.
    pub share_text: String,
    /// Label of the control that sends `Intent::Retake`.
    pub retake_label: &'static str,
}

/// Map a completed result to the result screen.
#[must_use]
pub fn map_result(result: QuizResult, config: &QuizConfig) -> ResultVm {
    ResultVm {
        result,
        heading: "Your Animal Match",
        image: ImageVm::for_category(result.matched, &config.image_root),
        score_line: format!("You scored {} out of {} points.", result.score, result.total),
        match_line: format!("You are most similar to a {}!", result.matched),
        share_text: share_text(result.score, config),
        retake_label: "Retake Quiz",
    }
}

/// Text for the share action: the score plus the configured link.
///
/// ```
/// use animal_quiz::core::QuizConfig;
/// use animal_quiz::view::share_text;
///
/// let config = QuizConfig::new().with_share_url("https://quiz.example");
/// assert_eq!(
///     share_text(3, &config),
///     "I scored 3 on the Animal Quiz! Check it out: https://quiz.example"
/// );
/// ```
#[must_use]
pub fn share_text(score: u32, config: &QuizConfig) -> String {
    format!("I scored {score} on the {}! Check it out: {}", config.title, config.share_url)
}

/// Static image path for a category: `<image_root>/<category>.png`.
#[must_use]
pub fn image_path(category: Category, image_root: &str) -> String {
    let separator = if image_root.is_empty() || image_root.ends_with('/') { "" } else { "/" };
    format!("{image_root}{separator}{}.png", category.name())
}
