use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{domain::User, google_auth::GoogleUserInfo},
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Creates or refreshes the account row on login; the email is the key.
    pub async fn upsert_oauth_user(&self, info: &GoogleUserInfo) -> AppResult<User> {
        let user = self.repository.upsert_by_email(info).await?;
        log::info!("Upserted user on login: {}", user.email);
        Ok(user)
    }

    pub async fn submit_rating(&self, user_id: &str, rating: i32) -> AppResult<()> {
        self.repository.set_rating(user_id, rating).await
    }

    /// Whether the user has rated yet; unknown users simply have not.
    pub async fn has_rating(&self, user_id: &str) -> AppResult<bool> {
        let user = self.repository.find_by_id(user_id).await?;
        Ok(user.map(|u| u.has_rating()).unwrap_or(false))
    }
}
