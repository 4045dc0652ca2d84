use reqwest::Client;
use std::time::Duration;

use crate::{
    errors::{AppError, AppResult},
    models::google_auth::GoogleUserInfo,
};

const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Exchanges a Google OAuth access token for the account's profile by calling
/// the userinfo endpoint. Verification failures all map to auth errors so the
/// caller falls back to the login state.
pub struct GoogleAuthService {
    client: Client,
    userinfo_url: String,
}

impl GoogleAuthService {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client options are static and valid");

        Self {
            client,
            userinfo_url: GOOGLE_USERINFO_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_userinfo_url(url: impl Into<String>) -> Self {
        let mut service = Self::new();
        service.userinfo_url = url.into();
        service
    }

    pub async fn fetch_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self
            .client
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Unauthorized(format!("Failed to request user info: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Unauthorized(
                "Failed to get user info from Google".to_string(),
            ));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::Unauthorized(format!("Failed to parse user info: {}", e)))
    }
}

impl Default for GoogleAuthService {
    fn default() -> Self {
        Self::new()
    }
}
