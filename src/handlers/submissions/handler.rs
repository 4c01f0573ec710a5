//! Submission handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{error::AppResult, models::Submission, state::AppState};

use super::{request::CreateSubmissionRequest, response::SubmissionsListResponse};

/// Record a submission against a problem
pub async fn create_submission(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
    Json(payload): Json<CreateSubmissionRequest>,
) -> AppResult<(StatusCode, Json<Submission>)> {
    payload.validate()?;

    let submission = state
        .submissions()
        .create_submission(&problem_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(submission)))
}

/// List submissions recorded against a problem
pub async fn list_submissions(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<SubmissionsListResponse>> {
    let submissions = state.submissions().list_submissions(&problem_id).await?;
    let total = submissions.len();

    Ok(Json(SubmissionsListResponse { submissions, total }))
}
