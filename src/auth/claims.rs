use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::User;

/// Session-token claims. Fixed expiry, no refresh flow: once `exp` passes,
/// re-authentication is indistinguishable from a first login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user id)
    pub email: String,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user: &User, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user.subject(),
            email: user.email.clone(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let user = User::test_user("jane@example.com");
        let claims = Claims::new(&user, 24);

        // Without an ObjectId the subject falls back to email
        assert_eq!(claims.sub, "jane@example.com");
        assert_eq!(claims.email, "jane@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_claims_expiry_window() {
        let user = User::test_user("jane@example.com");
        let claims = Claims::new(&user, 24);

        let window = claims.exp - claims.iat;
        assert_eq!(window, 24 * 60 * 60);
    }
}
