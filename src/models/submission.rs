//! Submission model
//!
//! Submissions are inert records: they are persisted and listed but no
//! judging pipeline processes them here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Submission database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub submission_id: String,
    pub problem_id: String,
    pub code: String,
    pub language: String,
    pub status: String,
    pub runtime_ms: Option<i32>,
    pub memory_kb: Option<i32>,
    pub test_cases_passed: Option<i32>,
    pub total_test_cases: Option<i32>,
    pub error_message: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub evaluated_at: Option<DateTime<Utc>>,
}
