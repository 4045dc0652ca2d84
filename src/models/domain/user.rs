use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::google_auth::GoogleUserInfo;

/// One row per Google account, keyed by email and upserted on every login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn from_google(info: &GoogleUserInfo) -> Self {
        User {
            id: None,
            email: info.email.clone(),
            name: info.name.clone(),
            picture: info.picture.clone(),
            rating: None,
            created_at: Some(Utc::now()),
        }
    }

    /// Session-token subject: the ObjectId hex when the row has been stored,
    /// email otherwise.
    pub fn subject(&self) -> String {
        self.id
            .as_ref()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| self.email.clone())
    }

    pub fn has_rating(&self) -> bool {
        self.rating.is_some()
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(email: &str) -> Self {
        User {
            id: None,
            email: email.to_string(),
            name: "Test User".to_string(),
            picture: None,
            rating: None,
            created_at: Some(Utc::now()),
        }
    }
}
