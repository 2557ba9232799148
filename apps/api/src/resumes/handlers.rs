//! Axum route handlers for the Resume API.
//!
//! Every route is scoped to the authenticated caller. Reads and deletes
//! filter by `(id, user_id)`, so a resume owned by someone else is
//! indistinguishable from a missing one.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeDoc};
use crate::resumes::analysis::{self, AtsAnalysis, JobMatchReport, DEFAULT_REWRITE_TONE};
use crate::state::AppState;

const LIST_LIMIT: i64 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeCreateRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_content: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchJobRequest {
    pub resume_content: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct RewriteRequest {
    pub resume_content: String,
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub rewritten_content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// CRUD handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(request): Json<ResumeCreateRequest>,
) -> Result<Json<Resume>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let resume = ResumeDoc::new(auth_user.user_id, request.title, request.content);
    state.store.insert_resume(&resume).await?;

    Ok(Json(resume.into()))
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Resume>>, AppError> {
    let resumes = state
        .store
        .list_resumes(&auth_user.user_id, LIST_LIMIT)
        .await?;

    Ok(Json(resumes.into_iter().map(Resume::from).collect()))
}

/// GET /api/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(resume_id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let resume = state
        .store
        .find_resume(&resume_id, &auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    Ok(Json(resume.into()))
}

/// DELETE /api/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(resume_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = state
        .store
        .delete_resume(&resume_id, &auth_user.user_id)
        .await?;

    if !deleted {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }

    Ok(Json(json!({ "message": "Resume deleted successfully" })))
}

// ────────────────────────────────────────────────────────────────────────────
// AI handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resumes/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AtsAnalysis>, AppError> {
    if request.resume_content.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_content cannot be empty".to_string(),
        ));
    }

    let report = analysis::analyze_resume(&state.llm, &request.resume_content).await?;
    Ok(Json(report))
}

/// POST /api/resumes/match-job
pub async fn handle_match_job(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(request): Json<MatchJobRequest>,
) -> Result<Json<JobMatchReport>, AppError> {
    if request.resume_content.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_content cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let report =
        analysis::match_job(&state.llm, &request.resume_content, &request.job_description).await?;
    Ok(Json(report))
}

/// POST /api/resumes/rewrite
pub async fn handle_rewrite(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    if request.resume_content.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_content cannot be empty".to_string(),
        ));
    }

    let tone = request.tone.as_deref().unwrap_or(DEFAULT_REWRITE_TONE);
    let rewritten_content =
        analysis::rewrite_resume(&state.llm, &request.resume_content, tone).await?;

    Ok(Json(RewriteResponse { rewritten_content }))
}
