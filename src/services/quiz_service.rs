use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::QuizQuestion, dto::request::GenerateQuizRequest},
    services::{model_service::CompletionModel, prompt_builder, response_normalizer},
};

/// Page text beyond this many bytes is dropped before prompting.
pub const MAX_CONTENT_LENGTH: usize = 12_000;

/// Runs the generation pipeline: input check, prompt assembly, one completion
/// exchange, normalization. Every failure is terminal for the request.
pub struct QuizService {
    model: Arc<dyn CompletionModel>,
}

impl QuizService {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    pub async fn generate(&self, request: &GenerateQuizRequest) -> AppResult<Vec<QuizQuestion>> {
        if request.content.trim().is_empty() {
            return Err(AppError::ValidationError("No content provided".to_string()));
        }
        request.validate()?;

        let request = truncate_content(request.clone());

        log::info!(
            "Generating quiz: category={} difficulty={} count={} content_len={}",
            request.category,
            request.difficulty,
            request.count,
            request.content.len()
        );

        let prompt = prompt_builder::build_quiz_prompt(&request);
        let raw = self.model.complete(&prompt).await?;

        response_normalizer::normalize_completion(&raw, request.category)
    }
}

fn truncate_content(mut request: GenerateQuizRequest) -> GenerateQuizRequest {
    if request.content.len() > MAX_CONTENT_LENGTH {
        let mut cut = MAX_CONTENT_LENGTH;
        while !request.content.is_char_boundary(cut) {
            cut -= 1;
        }
        request.content.truncate(cut);
    }
    request
}
