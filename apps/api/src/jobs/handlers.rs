//! Axum route handlers for the public Jobs API. No authentication.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::JobListing;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/jobs
///
/// Public listing, optionally filtered by category tag
/// (`internship` | `job`).
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let jobs = state
        .store
        .list_jobs(params.category.as_deref(), limit)
        .await?;

    Ok(Json(jobs.into_iter().map(JobListing::from).collect()))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobListing>, AppError> {
    let job = state
        .store
        .find_job(&job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    Ok(Json(job.into()))
}
