//! MongoDB access layer: one shared client per process, typed collection
//! handles, and the unique indexes that back the API's conflict semantics.

use anyhow::Result;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOptions, IndexOptions},
    Client, Collection, Database, IndexModel,
};
use tracing::info;

use crate::models::application::ApplicationDoc;
use crate::models::job::JobDoc;
use crate::models::resume::ResumeDoc;
use crate::models::user::UserDoc;

/// Error code MongoDB reports for unique-index violations.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Connects to MongoDB and returns the typed store.
pub async fn connect(mongo_url: &str, db_name: &str) -> Result<Store> {
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(mongo_url).await?;
    let db = client.database(db_name);
    info!("MongoDB client initialized (database: {db_name})");
    Ok(Store::new(&db))
}

/// Typed handles to the four collections backing the API.
#[derive(Clone)]
pub struct Store {
    users: Collection<UserDoc>,
    resumes: Collection<ResumeDoc>,
    jobs: Collection<JobDoc>,
    applications: Collection<ApplicationDoc>,
}

impl Store {
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection("users"),
            resumes: db.collection("resumes"),
            jobs: db.collection("jobs"),
            applications: db.collection("applications"),
        }
    }

    /// Creates the indexes the handlers rely on. The unique indexes close
    /// the duplicate-email and duplicate-application races at the storage
    /// layer; inserts that lose the race fail with a duplicate-key error.
    pub async fn ensure_indexes(&self) -> Result<()> {
        self.users
            .create_index(unique_index(doc! { "email": 1 }), None)
            .await?;
        self.applications
            .create_index(unique_index(doc! { "user_id": 1, "job_id": 1 }), None)
            .await?;
        self.resumes
            .create_index(plain_index(doc! { "user_id": 1 }), None)
            .await?;
        self.applications
            .create_index(plain_index(doc! { "user_id": 1 }), None)
            .await?;
        self.jobs
            .create_index(plain_index(doc! { "category": 1 }), None)
            .await?;
        info!("MongoDB indexes ensured");
        Ok(())
    }

    // ─── users ──────────────────────────────────────────────────────────

    pub async fn insert_user(&self, user: &UserDoc) -> Result<(), MongoError> {
        self.users.insert_one(user, None).await?;
        Ok(())
    }

    pub async fn find_user(&self, id: &str) -> Result<Option<UserDoc>, MongoError> {
        self.users.find_one(doc! { "_id": id }, None).await
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserDoc>, MongoError> {
        self.users.find_one(doc! { "email": email }, None).await
    }

    // ─── resumes ────────────────────────────────────────────────────────

    pub async fn insert_resume(&self, resume: &ResumeDoc) -> Result<(), MongoError> {
        self.resumes.insert_one(resume, None).await?;
        Ok(())
    }

    pub async fn find_resume(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<ResumeDoc>, MongoError> {
        self.resumes
            .find_one(doc! { "_id": id, "user_id": user_id }, None)
            .await
    }

    pub async fn list_resumes(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<ResumeDoc>, MongoError> {
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self.resumes.find(doc! { "user_id": user_id }, options).await?;
        cursor.try_collect().await
    }

    pub async fn delete_resume(&self, id: &str, user_id: &str) -> Result<bool, MongoError> {
        let result = self
            .resumes
            .delete_one(doc! { "_id": id, "user_id": user_id }, None)
            .await?;
        Ok(result.deleted_count > 0)
    }

    // ─── jobs ───────────────────────────────────────────────────────────

    pub async fn count_jobs(&self) -> Result<u64, MongoError> {
        self.jobs.count_documents(None, None).await
    }

    pub async fn insert_jobs(&self, jobs: &[JobDoc]) -> Result<(), MongoError> {
        self.jobs.insert_many(jobs, None).await?;
        Ok(())
    }

    pub async fn find_job(&self, id: &str) -> Result<Option<JobDoc>, MongoError> {
        self.jobs.find_one(doc! { "_id": id }, None).await
    }

    pub async fn list_jobs(
        &self,
        category: Option<&str>,
        limit: i64,
    ) -> Result<Vec<JobDoc>, MongoError> {
        let filter = match category {
            Some(category) => doc! { "category": category },
            None => doc! {},
        };
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self.jobs.find(filter, options).await?;
        cursor.try_collect().await
    }

    // ─── applications ───────────────────────────────────────────────────

    pub async fn insert_application(
        &self,
        application: &ApplicationDoc,
    ) -> Result<(), MongoError> {
        self.applications.insert_one(application, None).await?;
        Ok(())
    }

    pub async fn list_applications(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<ApplicationDoc>, MongoError> {
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self
            .applications
            .find(doc! { "user_id": user_id }, options)
            .await?;
        cursor.try_collect().await
    }
}

fn unique_index(keys: mongodb::bson::Document) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build()
}

fn plain_index(keys: mongodb::bson::Document) -> IndexModel {
    IndexModel::builder().keys(keys).build()
}

/// True when a write failed because it violated a unique index.
pub fn is_duplicate_key_error(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::BulkWrite(failure) => failure
            .write_errors
            .iter()
            .flatten()
            .any(|e| e.code == DUPLICATE_KEY_CODE),
        _ => false,
    }
}
