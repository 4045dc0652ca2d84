use serde::{Deserialize, Serialize};

/// Subset of Google's OAuth2 userinfo response the backend cares about.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GoogleUserInfo {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_userinfo_payload() {
        let json = r#"{
            "sub": "110169484474386276334",
            "email": "jane@example.com",
            "email_verified": true,
            "name": "Jane Doe",
            "picture": "https://lh3.googleusercontent.com/a/photo.jpg"
        }"#;

        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.email, "jane@example.com");
        assert_eq!(info.name, "Jane Doe");
        assert!(info.picture.is_some());
    }

    #[test]
    fn tolerates_missing_profile_fields() {
        let info: GoogleUserInfo =
            serde_json::from_str(r#"{"email": "jane@example.com"}"#).unwrap();
        assert!(info.name.is_empty());
        assert!(info.picture.is_none());
    }
}
