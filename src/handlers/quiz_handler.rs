use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::GenerateQuizRequest,
};

#[post("/api/generate-quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    log::info!(
        "Quiz generation request from {}: category={} difficulty={} count={} content_len={}",
        auth.0.email,
        request.category,
        request.difficulty,
        request.count,
        request.content.len()
    );

    let questions = state.quiz_service.generate(&request).await?;
    Ok(HttpResponse::Ok().json(questions))
}
