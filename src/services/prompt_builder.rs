use crate::{
    constants::quiz_prompt,
    models::{domain::QuizCategory, dto::request::GenerateQuizRequest},
};

/// Assembles the single instruction string sent to the completion model.
///
/// The caller's content is interpolated verbatim. That leaves the prompt open
/// to injection through page text; a page that wants to sabotage its own quiz
/// can, and that trade-off is accepted.
pub fn build_quiz_prompt(request: &GenerateQuizRequest) -> String {
    let mut prompt = format!(
        "Generate {} {} level questions in the \"{}\" category based on: {}\n\n",
        request.count, request.difficulty, request.category, request.content
    );

    prompt.push_str(quiz_prompt::CATEGORY_REQUIREMENTS);
    prompt.push_str("\n\n");
    prompt.push_str(category_brief(request.category));
    prompt.push_str("\n\n");
    prompt.push_str(quiz_prompt::FORMAT_CONTRACT);
    prompt.push_str("\n\n");
    prompt.push_str(quiz_prompt::CODING_RULES);
    prompt.push_str("\n\n");
    prompt.push_str(quiz_prompt::SCENARIO_FORMAT_RULES);
    prompt.push_str("\n\n");
    prompt.push_str(quiz_prompt::MERMAID_RULES);
    prompt.push_str(&format!(
        "\n\nUse \"{}\" as the \"type\" value. Ensure valid JSON syntax and proper escaping. \
         Generate exactly {} items.",
        request.category.type_tag(),
        request.count
    ));

    prompt
}

fn category_brief(category: QuizCategory) -> &'static str {
    match category {
        QuizCategory::General => quiz_prompt::GENERAL_BRIEF,
        QuizCategory::Programming => quiz_prompt::PROGRAMMING_BRIEF,
        QuizCategory::ScenarioBased => quiz_prompt::SCENARIO_BRIEF,
        QuizCategory::Conceptual => quiz_prompt::CONCEPTUAL_BRIEF,
        QuizCategory::MermaidDiagram => quiz_prompt::MERMAID_BRIEF,
        QuizCategory::Interview => quiz_prompt::INTERVIEW_BRIEF,
    }
}
