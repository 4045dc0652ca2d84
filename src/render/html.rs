//! Serializes a [`QuizView`](crate::render::view::QuizView) into the markup
//! snapshot persisted alongside the questions. The structure mirrors what the
//! popup has always stored: one `div.question` block per item with lettered
//! options, a hidden answer block, and toggle buttons.
//!
//! All interpolated model text is escaped here; the view-model keeps it raw.

use crate::render::view::{
    AnswerSegment, DiagramState, OptionState, OptionView, QuestionView, QuizView,
};

pub fn render_html(view: &QuizView) -> String {
    let mut out = String::new();
    for question in &view.questions {
        render_question(&mut out, question);
    }
    out
}

fn render_question(out: &mut String, question: &QuestionView) {
    out.push_str("<div class=\"question\">\n");
    out.push_str(&format!("  <h3>Question {}</h3>\n", question.number));
    out.push_str(&format!("  <p>{}</p>\n", escape_html(&question.question)));

    for option in &question.options {
        render_option(out, option);
    }

    if let Some(segments) = &question.answer {
        let display = if question.answer_visible { "block" } else { "none" };
        out.push_str(&format!(
            "  <div class=\"answer\" style=\"display: {};\">Answer: ",
            display
        ));
        for segment in segments {
            render_segment(out, segment);
        }
        out.push_str("</div>\n");
    }

    if let Some(diagram) = &question.diagram {
        match &diagram.state {
            DiagramState::Hidden => {
                out.push_str(&format!(
                    "  <div class=\"diagram\" style=\"display: none;\" data-mermaid-code=\"{}\"></div>\n",
                    escape_html(&diagram.raw)
                ));
            }
            DiagramState::Rendered { element_id, source } => {
                out.push_str(&format!(
                    "  <div class=\"diagram\" id=\"{}\" data-mermaid-code=\"{}\"></div>\n",
                    element_id,
                    escape_html(source)
                ));
            }
            DiagramState::Failed(issues) => {
                out.push_str("  <div class=\"error\">Diagram failed to render:<ul>");
                for issue in issues {
                    out.push_str(&format!("<li>{}</li>", escape_html(&issue.to_string())));
                }
                out.push_str("</ul></div>\n");
            }
        }
        out.push_str("  <button class=\"toggle-diagram\">Show Diagram</button>\n");
    }

    if question.answer.is_some() {
        out.push_str("  <button class=\"toggle-answer\">Show Answer</button>\n");
    }

    out.push_str("</div>\n");
}

fn render_option(out: &mut String, option: &OptionView) {
    let state_class = match option.state {
        OptionState::Idle => "",
        OptionState::Correct => " correct",
        OptionState::Incorrect => " incorrect",
        OptionState::Dimmed => " dimmed",
    };
    out.push_str(&format!(
        "  <div class=\"option{}\" data-correct=\"{}\">{}) {}</div>\n",
        state_class,
        option.is_answer,
        option.label,
        escape_html(&option.text)
    ));
}

fn render_segment(out: &mut String, segment: &AnswerSegment) {
    match segment {
        AnswerSegment::Text(text) => out.push_str(&escape_html(text)),
        AnswerSegment::Code { language, source } => {
            out.push_str(&format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                escape_html(language),
                escape_html(source)
            ));
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
