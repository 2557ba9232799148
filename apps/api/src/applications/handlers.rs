//! Axum route handlers for the Applications API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::db;
use crate::errors::AppError;
use crate::models::application::{Application, ApplicationDoc};
use crate::state::AppState;

const LIST_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ApplicationCreateRequest {
    pub job_id: String,
    pub resume_id: String,
    pub cover_letter: Option<String>,
}

/// POST /api/applications
///
/// The referenced job must exist and the resume must belong to the caller.
/// At most one application per (account, job) pair; the unique compound
/// index rejects the duplicate, whichever request loses the race.
pub async fn handle_create_application(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(request): Json<ApplicationCreateRequest>,
) -> Result<Json<Application>, AppError> {
    state
        .store
        .find_job(&request.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    state
        .store
        .find_resume(&request.resume_id, &auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let application = ApplicationDoc::new(
        auth_user.user_id,
        request.job_id,
        request.resume_id,
        request.cover_letter,
    );

    if let Err(err) = state.store.insert_application(&application).await {
        if db::is_duplicate_key_error(&err) {
            return Err(AppError::Conflict("Already applied to this job".to_string()));
        }
        return Err(err.into());
    }

    Ok(Json(application.into()))
}

/// GET /api/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Application>>, AppError> {
    let applications = state
        .store
        .list_applications(&auth_user.user_id, LIST_LIMIT)
        .await?;

    Ok(Json(
        applications.into_iter().map(Application::from).collect(),
    ))
}
