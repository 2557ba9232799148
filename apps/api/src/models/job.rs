use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};

/// Job listing record as stored in the `jobs` collection.
/// Read-only to users; the collection is seeded at startup when empty.
/// `category` is either `internship` or `job`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_date: bson::DateTime,
    pub deadline: Option<bson::DateTime>,
    pub salary: Option<String>,
    pub stipend: Option<String>,
    pub category: String,
}

/// API view of a job listing with RFC-3339 timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_date: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    pub salary: Option<String>,
    pub stipend: Option<String>,
    pub category: String,
}

impl From<JobDoc> for JobListing {
    fn from(doc: JobDoc) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            company: doc.company,
            location: doc.location,
            job_type: doc.job_type,
            description: doc.description,
            requirements: doc.requirements,
            posted_date: doc.posted_date.to_chrono(),
            deadline: doc.deadline.map(|d| d.to_chrono()),
            salary: doc.salary,
            stipend: doc.stipend,
            category: doc.category,
        }
    }
}
