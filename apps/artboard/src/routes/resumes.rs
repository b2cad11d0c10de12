//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeInput, ResumeRecord};
use crate::state::AppState;

fn validate_input(input: &ResumeInput) -> Result<(), AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    Ok(())
}

/// POST /api/v1/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    Json(input): Json<ResumeInput>,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    validate_input(&input)?;
    let record = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/resumes
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<ResumeRecord>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    Ok(Json(state.store.get(id).await?))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ResumeInput>,
) -> Result<Json<ResumeRecord>, AppError> {
    validate_input(&input)?;
    Ok(Json(state.store.update(id, input).await?))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
