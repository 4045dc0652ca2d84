use actix_web::{http::header::AUTHORIZATION, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::GoogleAuthRequest,
        response::{AuthResponse, MessageResponse},
    },
};

/// Exchanges a Google OAuth access token for a signed session token,
/// upserting the user row on the way through.
#[post("/api/auth/google")]
pub async fn google_auth(
    state: web::Data<AppState>,
    request: web::Json<GoogleAuthRequest>,
) -> Result<HttpResponse, AppError> {
    let token = request.into_inner().token;
    if token.trim().is_empty() {
        return Err(AppError::ValidationError("No token provided".to_string()));
    }

    let info = state.google_auth_service.fetch_user_info(&token).await?;
    let user = state.user_service.upsert_oauth_user(&info).await?;
    let session_token = state.jwt_service.create_token(&user)?;

    log::info!("Auth successful for user: {}", user.email);

    Ok(HttpResponse::Ok().json(AuthResponse {
        token: session_token,
    }))
}

/// Logout is client-local token deletion; the server only acknowledges and
/// logs. A token already issued stays valid until its fixed expiry.
#[post("/api/auth/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    request: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let Some(token) = token else {
        log::info!("Logout attempt with no token");
        return Ok(HttpResponse::Ok().json(MessageResponse::new("Already logged out")));
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => log::info!("User logged out successfully: {}", claims.email),
        Err(_) => log::info!("Invalid token during logout"),
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Logged out successfully")))
}
