use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoUserRepository, UserRepository},
    services::{GoogleAuthService, OpenAiModel, QuizService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub google_auth_service: Arc<GoogleAuthService>,
    pub jwt_service: Arc<JwtService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db, &config.users_collection));
        user_repository.ensure_indexes().await?;
        let user_service = Arc::new(UserService::new(user_repository));

        let model = Arc::new(OpenAiModel::new(
            config.openai_api_url.clone(),
            config.openai_api_key.clone(),
        ));
        let quiz_service = Arc::new(QuizService::new(model));

        let google_auth_service = Arc::new(GoogleAuthService::new());
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Ok(Self {
            user_service,
            quiz_service,
            google_auth_service,
            jwt_service,
            db,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
