//! Problem handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{Problem, TestCase},
    state::AppState,
};

use super::{
    request::{CreateProblemRequest, CreateTestCaseRequest},
    response::{ProblemDetailResponse, ProblemsListResponse, TestCasesListResponse},
};

/// List all problems
pub async fn list_problems(State(state): State<AppState>) -> AppResult<Json<ProblemsListResponse>> {
    let problems = state.catalog().list_problems().await?;
    let total = problems.len();

    Ok(Json(ProblemsListResponse { problems, total }))
}

/// Create a new problem
pub async fn create_problem(
    State(state): State<AppState>,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<Problem>)> {
    payload.validate()?;

    let problem = state.catalog().create_problem(payload).await?;

    Ok((StatusCode::CREATED, Json(problem)))
}

/// Get a specific problem with its sample test cases
pub async fn get_problem(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<ProblemDetailResponse>> {
    let problem = state.catalog().get_problem(&problem_id).await?;
    Ok(Json(problem))
}

/// Add a test case to a problem
pub async fn add_test_case(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
    Json(payload): Json<CreateTestCaseRequest>,
) -> AppResult<(StatusCode, Json<TestCase>)> {
    payload.validate()?;

    let test_case = state.catalog().add_test_case(&problem_id, payload).await?;

    Ok((StatusCode::CREATED, Json(test_case)))
}

/// List a problem's test cases in ascending difficulty order
///
/// A problem with no registered test cases yields an empty list, not an
/// error.
pub async fn list_test_cases(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<TestCasesListResponse>> {
    let test_cases = state.catalog().test_cases_in_order(&problem_id);
    let total = test_cases.len();

    Ok(Json(TestCasesListResponse { test_cases, total }))
}
