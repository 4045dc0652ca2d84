pub mod html;
pub mod mermaid;
pub mod view;

pub use html::render_html;
pub use view::{
    AnswerSegment, DiagramState, DiagramView, OptionState, OptionView, QuestionView, QuizView,
};
