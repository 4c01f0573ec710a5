//! Submission response DTOs

use serde::Serialize;

use crate::models::Submission;

/// Submissions list response
#[derive(Debug, Serialize)]
pub struct SubmissionsListResponse {
    pub submissions: Vec<Submission>,
    pub total: usize,
}
