//! Typed view-model for a generated quiz.
//!
//! State lives in the view and is passed in and out explicitly; there is no
//! process-wide questions singleton. A UI shell maps these states onto
//! whatever widgets it has.

use uuid::Uuid;

use crate::models::domain::quiz_question::{normalize_answer_text, QuizQuestion};
use crate::render::mermaid::{self, DiagramIssue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    /// Either clicked correctly or highlighted as the right answer.
    Correct,
    Incorrect,
    /// Not selected, visually de-emphasized after a pick.
    Dimmed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    /// Letter shown before the option text: A, B, C, ...
    pub label: char,
    pub text: String,
    pub state: OptionState,
    pub is_answer: bool,
}

/// Answer text split on `~~~language` fences so code runs get highlighting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerSegment {
    Text(String),
    Code { language: String, source: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagramState {
    Hidden,
    Rendered { element_id: String, source: String },
    /// Validation failed; the issues are shown inline instead of the diagram.
    Failed(Vec<DiagramIssue>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramView {
    pub raw: String,
    pub state: DiagramState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub number: usize,
    pub question: String,
    pub type_tag: String,
    pub options: Vec<OptionView>,
    pub answer: Option<Vec<AnswerSegment>>,
    pub answer_visible: bool,
    pub diagram: Option<DiagramView>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizView {
    pub questions: Vec<QuestionView>,
}

impl QuizView {
    pub fn build(questions: &[QuizQuestion]) -> Self {
        let questions = questions
            .iter()
            .enumerate()
            .map(|(idx, q)| QuestionView::build(idx + 1, q))
            .collect();

        Self { questions }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Grades a click on one option. Returns whether the pick was correct, or
    /// `None` when the indexes don't resolve to a clickable option.
    pub fn select_option(&mut self, question: usize, option: usize) -> Option<bool> {
        let view = self.questions.get_mut(question)?;
        if option >= view.options.len() {
            return None;
        }

        let correct = view.options[option].is_answer;
        for (idx, opt) in view.options.iter_mut().enumerate() {
            opt.state = if idx == option {
                if correct {
                    OptionState::Correct
                } else {
                    OptionState::Incorrect
                }
            } else if opt.is_answer {
                OptionState::Correct
            } else {
                OptionState::Dimmed
            };
        }

        Some(correct)
    }

    /// Puts every option of a question back to its idle look. Resets are
    /// explicit; nothing clears on a timer.
    pub fn clear_selection(&mut self, question: usize) {
        if let Some(view) = self.questions.get_mut(question) {
            for opt in &mut view.options {
                opt.state = OptionState::Idle;
            }
        }
    }

    /// Toggles answer visibility; returns the new visibility.
    pub fn toggle_answer(&mut self, question: usize) -> Option<bool> {
        let view = self.questions.get_mut(question)?;
        view.answer_visible = !view.answer_visible;
        Some(view.answer_visible)
    }

    /// Toggles the diagram. Revealing runs the source through the sanitizer
    /// and validator; structural defects surface as an inline error state
    /// rather than disappearing silently.
    pub fn toggle_diagram(&mut self, question: usize) -> Option<&DiagramState> {
        let view = self.questions.get_mut(question)?;
        let diagram = view.diagram.as_mut()?;

        diagram.state = match diagram.state {
            DiagramState::Hidden => {
                let sanitized = mermaid::sanitize(&diagram.raw);
                let issues = mermaid::validate(&sanitized);
                if issues.is_empty() {
                    DiagramState::Rendered {
                        element_id: format!("mermaid-svg-{}", Uuid::new_v4()),
                        source: sanitized,
                    }
                } else {
                    DiagramState::Failed(issues)
                }
            }
            _ => DiagramState::Hidden,
        };

        Some(&diagram.state)
    }
}

impl QuestionView {
    fn build(number: usize, question: &QuizQuestion) -> Self {
        let answer_idx = question.matching_option();

        let options = question
            .options
            .as_deref()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(idx, text)| OptionView {
                label: option_label(idx),
                text: text.clone(),
                state: OptionState::Idle,
                is_answer: answer_idx == Some(idx),
            })
            .collect();

        let answer = question
            .answer
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .map(parse_answer_segments);

        let diagram = question
            .diagram
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|raw| DiagramView {
                raw: raw.to_string(),
                state: DiagramState::Hidden,
            });

        Self {
            number,
            question: question.question.clone(),
            type_tag: question.question_type.clone(),
            options,
            answer,
            answer_visible: false,
            diagram,
        }
    }

    /// Whether the clicked text would grade as correct, using the same
    /// normalization as option building.
    pub fn grades_correct(&self, clicked: &str) -> bool {
        self.options
            .iter()
            .find(|o| normalize_answer_text(&o.text) == normalize_answer_text(clicked))
            .is_some_and(|o| o.is_answer)
    }
}

fn option_label(idx: usize) -> char {
    char::from(b'A' + (idx % 26) as u8)
}

/// Splits an answer on `~~~language` fences. An unterminated fence swallows
/// the remainder as code, which matches how the popup rendered it.
fn parse_answer_segments(answer: &str) -> Vec<AnswerSegment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut code: Option<(String, String)> = None;

    for line in answer.lines() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("~~~") {
            match code.take() {
                Some((language, source)) => {
                    segments.push(AnswerSegment::Code {
                        language,
                        source: source.trim_end().to_string(),
                    });
                }
                None => {
                    if !text.trim().is_empty() {
                        segments.push(AnswerSegment::Text(text.trim().to_string()));
                    }
                    text.clear();
                    code = Some((rest.trim().to_string(), String::new()));
                }
            }
        } else {
            match &mut code {
                Some((_, source)) => {
                    source.push_str(line);
                    source.push('\n');
                }
                None => {
                    text.push_str(line);
                    text.push('\n');
                }
            }
        }
    }

    if let Some((language, source)) = code {
        segments.push(AnswerSegment::Code {
            language,
            source: source.trim_end().to_string(),
        });
    } else if !text.trim().is_empty() {
        segments.push(AnswerSegment::Text(text.trim().to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq() -> QuizQuestion {
        QuizQuestion {
            question_type: "scenario-based".to_string(),
            question: "Which method is best?".to_string(),
            options: Some(vec![
                "Linear scan".to_string(),
                "Binary search".to_string(),
                "Shuffle and pray".to_string(),
            ]),
            answer: Some("Binary search".to_string()),
            diagram: None,
        }
    }

    fn open_ended(answer: &str) -> QuizQuestion {
        QuizQuestion {
            question_type: "conceptual".to_string(),
            question: "Why?".to_string(),
            options: None,
            answer: Some(answer.to_string()),
            diagram: None,
        }
    }

    #[test]
    fn build_numbers_and_letters_questions() {
        let view = QuizView::build(&[mcq(), open_ended("Because.")]);

        assert_eq!(view.question_count(), 2);
        assert_eq!(view.questions[0].number, 1);
        assert_eq!(view.questions[1].number, 2);

        let labels: Vec<char> = view.questions[0].options.iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!['A', 'B', 'C']);
        assert!(view.questions[0].options[1].is_answer);
    }

    #[test]
    fn selecting_the_right_option_marks_and_dims() {
        let mut view = QuizView::build(&[mcq()]);

        assert_eq!(view.select_option(0, 1), Some(true));
        let options = &view.questions[0].options;
        assert_eq!(options[1].state, OptionState::Correct);
        assert_eq!(options[0].state, OptionState::Dimmed);
        assert_eq!(options[2].state, OptionState::Dimmed);
    }

    #[test]
    fn selecting_a_wrong_option_still_highlights_the_answer() {
        let mut view = QuizView::build(&[mcq()]);

        assert_eq!(view.select_option(0, 0), Some(false));
        let options = &view.questions[0].options;
        assert_eq!(options[0].state, OptionState::Incorrect);
        assert_eq!(options[1].state, OptionState::Correct);
        assert_eq!(options[2].state, OptionState::Dimmed);
    }

    #[test]
    fn clear_selection_returns_options_to_idle() {
        let mut view = QuizView::build(&[mcq()]);
        view.select_option(0, 0);
        view.clear_selection(0);

        assert!(view.questions[0]
            .options
            .iter()
            .all(|o| o.state == OptionState::Idle));
    }

    #[test]
    fn grading_is_normalization_insensitive() {
        let view = QuizView::build(&[mcq()]);
        assert!(view.questions[0].grades_correct("  BINARY   search "));
        assert!(!view.questions[0].grades_correct("Linear scan"));
    }

    #[test]
    fn toggle_answer_flips_visibility() {
        let mut view = QuizView::build(&[open_ended("Because.")]);

        assert_eq!(view.toggle_answer(0), Some(true));
        assert!(view.questions[0].answer_visible);
        assert_eq!(view.toggle_answer(0), Some(false));
    }

    #[test]
    fn answers_with_fenced_code_split_into_segments() {
        let answer = "To read a file in Python:\n\n~~~python\nwith open('f') as f:\n    print(f.read())\n~~~\n\nThis opens the file.";
        let view = QuizView::build(&[open_ended(answer)]);

        let segments = view.questions[0].answer.as_ref().unwrap();
        assert_eq!(segments.len(), 3);
        assert!(matches!(&segments[0], AnswerSegment::Text(t) if t.contains("read a file")));
        match &segments[1] {
            AnswerSegment::Code { language, source } => {
                assert_eq!(language, "python");
                assert!(source.contains("print(f.read())"));
            }
            other => panic!("expected code segment, got {:?}", other),
        }
        assert!(matches!(&segments[2], AnswerSegment::Text(t) if t.contains("opens the file")));
    }

    #[test]
    fn unterminated_code_fence_becomes_code() {
        let view = QuizView::build(&[open_ended("~~~rust\nfn main() {}")]);
        let segments = view.questions[0].answer.as_ref().unwrap();
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], AnswerSegment::Code { language, .. } if language == "rust"));
    }

    #[test]
    fn toggling_a_valid_diagram_renders_it() {
        let mut view = QuizView::build(&[crate::test_utils::fixtures::diagram_question()]);

        match view.toggle_diagram(0).unwrap() {
            DiagramState::Rendered { element_id, source } => {
                assert!(element_id.starts_with("mermaid-svg-"));
                assert!(source.contains("A[\"Start\"]"));
            }
            other => panic!("expected rendered diagram, got {:?}", other),
        }

        // Second toggle hides it again.
        assert!(matches!(view.toggle_diagram(0).unwrap(), DiagramState::Hidden));
    }

    #[test]
    fn invalid_diagrams_surface_issues_inline() {
        let question = QuizQuestion {
            question_type: "mermaid-diagram".to_string(),
            question: "Visualize the flow".to_string(),
            options: None,
            answer: None,
            diagram: Some("graph TD\n    X[Unclosed label --> Y".to_string()),
        };
        let mut view = QuizView::build(&[question]);

        match view.toggle_diagram(0).unwrap() {
            DiagramState::Failed(issues) => {
                assert!(!issues.is_empty());
                assert!(issues[0].to_string().starts_with("line "));
            }
            other => panic!("expected failed diagram, got {:?}", other),
        }
    }

    #[test]
    fn questions_without_diagrams_have_no_diagram_toggle() {
        let mut view = QuizView::build(&[mcq()]);
        assert!(view.toggle_diagram(0).is_none());
    }
}
