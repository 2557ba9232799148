use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account record as stored in the `users` collection.
/// `email` carries a unique index; see `Store::ensure_indexes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub hashed_password: String,
    pub created_at: bson::DateTime,
}

impl UserDoc {
    pub fn new(email: String, full_name: String, hashed_password: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            full_name,
            hashed_password,
            created_at: bson::DateTime::now(),
        }
    }
}

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserDoc> for UserProfile {
    fn from(doc: UserDoc) -> Self {
        Self {
            id: doc.id,
            email: doc.email,
            full_name: doc.full_name,
            created_at: doc.created_at.to_chrono(),
        }
    }
}
