use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HTML_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// One generated quiz item as emitted by the completion model.
///
/// Deserialization is deliberately lenient. The model output is untrusted
/// free text, and no schema repair is attempted: entries with missing fields
/// flow through to rendering and simply display incomplete there.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    #[serde(rename = "type", default)]
    pub question_type: String,
    #[serde(default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
}

impl QuizQuestion {
    pub fn is_multiple_choice(&self) -> bool {
        self.options.as_ref().is_some_and(|o| !o.is_empty())
    }

    pub fn has_diagram(&self) -> bool {
        self.diagram.as_deref().is_some_and(|d| !d.trim().is_empty())
    }

    /// Index of the single option equal to `answer` under grading
    /// normalization. Grading depends on exactly one option matching; `None`
    /// means the entry violates that and grades as incorrect everywhere.
    pub fn matching_option(&self) -> Option<usize> {
        let answer = normalize_answer_text(self.answer.as_deref()?);
        let options = self.options.as_ref()?;

        let mut found = None;
        for (idx, option) in options.iter().enumerate() {
            if normalize_answer_text(option) == answer {
                if found.is_some() {
                    return None;
                }
                found = Some(idx);
            }
        }
        found
    }
}

/// Normalization applied to both sides of an answer comparison: HTML tags
/// stripped, whitespace collapsed, case folded.
pub fn normalize_answer_text(text: &str) -> String {
    let stripped = HTML_TAG_RE.replace_all(text, "");
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
