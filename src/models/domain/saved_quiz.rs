use serde::{Deserialize, Serialize};

use crate::models::domain::QuizQuestion;

/// Snapshot of the last generated quiz, persisted wholesale so the quiz
/// survives a popup close. The `quizHTML` key name is the one the stored
/// blobs have always used.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedQuiz {
    pub questions: Vec<QuizQuestion>,
    #[serde(rename = "quizHTML", default)]
    pub rendered_markup: String,
}
