use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resume record as stored in the `resumes` collection.
/// Owned exclusively by its creator; every read filters by `(id, user_id)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub file_path: Option<String>,
    pub ats_score: Option<f64>,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl ResumeDoc {
    pub fn new(user_id: String, title: String, content: String) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            title,
            content,
            file_path: None,
            ats_score: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// API view of a resume with RFC-3339 timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct Resume {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub file_path: Option<String>,
    pub ats_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeDoc> for Resume {
    fn from(doc: ResumeDoc) -> Self {
        Self {
            id: doc.id,
            user_id: doc.user_id,
            title: doc.title,
            content: doc.content,
            file_path: doc.file_path,
            ats_score: doc.ats_score,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}
