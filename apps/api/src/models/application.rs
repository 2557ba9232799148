use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job application record as stored in the `applications` collection.
/// `(user_id, job_id)` carries a unique compound index; see
/// `Store::ensure_indexes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub job_id: String,
    pub resume_id: String,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: bson::DateTime,
}

impl ApplicationDoc {
    pub fn new(
        user_id: String,
        job_id: String,
        resume_id: String,
        cover_letter: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            job_id,
            resume_id,
            cover_letter,
            status: "applied".to_string(),
            applied_at: bson::DateTime::now(),
        }
    }
}

/// API view of an application with an RFC-3339 timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: String,
    pub user_id: String,
    pub job_id: String,
    pub resume_id: String,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

impl From<ApplicationDoc> for Application {
    fn from(doc: ApplicationDoc) -> Self {
        Self {
            id: doc.id,
            user_id: doc.user_id,
            job_id: doc.job_id,
            resume_id: doc.resume_id,
            cover_letter: doc.cover_letter,
            status: doc.status,
            applied_at: doc.applied_at.to_chrono(),
        }
    }
}
