use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::SubmitRatingRequest,
        response::{MessageResponse, RatingStatusResponse},
    },
};

#[post("/api/submit-rating")]
async fn submit_rating(
    state: web::Data<AppState>,
    request: web::Json<SubmitRatingRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state
        .user_service
        .submit_rating(&auth.0.sub, request.rating)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Rating submitted successfully")))
}

#[get("/api/check-rating")]
async fn check_rating(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let has_rating = state.user_service.has_rating(&auth.0.sub).await?;
    Ok(HttpResponse::Ok().json(RatingStatusResponse { has_rating }))
}
