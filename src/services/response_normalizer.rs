use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizCategory, QuizQuestion},
};

static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("fence pattern is valid"));

/// Removes the first markdown fence pair, leaving the wrapped text.
/// Completions without fences pass through untouched apart from trimming.
pub fn strip_code_fence(raw: &str) -> String {
    FENCE_RE.replace(raw, "$1").trim().to_string()
}

/// Turns raw completion text into the question list, or the distinct
/// user-visible error for each way the model can get it wrong. No schema
/// repair: entries deserialize leniently and malformed ones reach rendering.
pub fn normalize_completion(
    raw: &str,
    category: QuizCategory,
) -> AppResult<Vec<QuizQuestion>> {
    let cleaned = strip_code_fence(raw);

    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|_| AppError::Upstream("Failed to parse AI response".to_string()))?;

    if let Value::Object(map) = &value {
        if let Some(error) = map.get("error") {
            let message = error
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| error.to_string());
            return Err(AppError::Upstream(message));
        }
        return Err(AppError::Upstream(
            "Invalid question format received".to_string(),
        ));
    }

    if !value.is_array() {
        return Err(AppError::Upstream(
            "Invalid question format received".to_string(),
        ));
    }

    let mut questions: Vec<QuizQuestion> = serde_json::from_value(value)
        .map_err(|_| AppError::Upstream("Invalid question format received".to_string()))?;

    if category.is_diagram_only() {
        questions.retain(QuizQuestion::has_diagram);
    }

    Ok(questions)
}
