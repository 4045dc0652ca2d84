use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested difficulty level, interpolated verbatim into the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

/// Question category. The wire names match the extension's dropdown values;
/// lowercase aliases are accepted because older popup revisions sent them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuizCategory {
    #[serde(rename = "General", alias = "general")]
    General,
    #[serde(rename = "Programming", alias = "programming")]
    Programming,
    #[serde(rename = "Scenario-Based", alias = "scenario-based")]
    ScenarioBased,
    #[serde(rename = "Conceptual", alias = "conceptual")]
    Conceptual,
    #[serde(rename = "Mermaid Diagram", alias = "mermaid-diagram", alias = "diagram")]
    MermaidDiagram,
    #[serde(rename = "Interview", alias = "interview")]
    Interview,
}

impl QuizCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            QuizCategory::General => "General",
            QuizCategory::Programming => "Programming",
            QuizCategory::ScenarioBased => "Scenario-Based",
            QuizCategory::Conceptual => "Conceptual",
            QuizCategory::MermaidDiagram => "Mermaid Diagram",
            QuizCategory::Interview => "Interview",
        }
    }

    /// The `type` tag questions of this category carry in the model output.
    pub fn type_tag(&self) -> String {
        self.display_name().to_lowercase().replace(' ', "-")
    }

    /// Diagram-only views drop questions without a diagram field.
    pub fn is_diagram_only(&self) -> bool {
        matches!(self, QuizCategory::MermaidDiagram)
    }
}

impl fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
