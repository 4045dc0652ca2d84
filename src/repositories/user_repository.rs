use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::{domain::User, google_auth::GoogleUserInfo},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn upsert_by_email(&self, info: &GoogleUserInfo) -> AppResult<User>;
    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>>;
    async fn set_rating(&self, user_id: &str, rating: i32) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

/// Session subjects are ObjectId hex for stored rows, email for the fallback.
fn subject_filter(user_id: &str) -> Document {
    match ObjectId::parse_str(user_id) {
        Ok(oid) => doc! { "_id": oid },
        Err(_) => doc! { "email": user_id },
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn upsert_by_email(&self, info: &GoogleUserInfo) -> AppResult<User> {
        let filter = doc! { "email": &info.email };
        let update = doc! {
            "$set": {
                "name": &info.name,
                "picture": info.picture.as_deref(),
            },
            "$setOnInsert": {
                "created_at": Utc::now().to_rfc3339(),
            },
        };

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let user = self
            .collection
            .find_one_and_update(filter, update)
            .with_options(options)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError(format!("Upsert returned no document for {}", info.email))
            })?;

        Ok(user)
    }

    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(subject_filter(user_id)).await?;
        Ok(user)
    }

    async fn set_rating(&self, user_id: &str, rating: i32) -> AppResult<()> {
        let result = self
            .collection
            .update_one(subject_filter(user_id), doc! { "$set": { "rating": rating } })
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "User '{}' not found",
                user_id
            )));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("Created unique index on email field");

        Ok(())
    }
}
