use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Difficulty, QuizCategory};

/// Body of `POST /api/generate-quiz`. Only `content` presence is checked up
/// front; everything else rides through to the prompt as-is.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub content: String,

    pub difficulty: Difficulty,

    pub category: QuizCategory,

    #[validate(range(min = 1, message = "count must be a positive integer"))]
    pub count: u8,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct GoogleAuthRequest {
    #[serde(default)]
    pub token: String,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct SubmitRatingRequest {
    // 1-5 in the UI; deliberately not range-checked here, matching the
    // store's behavior of persisting whatever integer arrives.
    pub rating: i32,
}
