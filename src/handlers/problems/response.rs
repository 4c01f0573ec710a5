//! Problem response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Problem, TestCase};

/// Problem detail response
///
/// Combines the problem record with its sample test cases and the total
/// test case count (hidden cases included in the count only).
#[derive(Debug, Serialize)]
pub struct ProblemDetailResponse {
    pub problem_id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Option<String>,
    pub time_limit_ms: i32,
    pub memory_limit_mb: i32,
    pub created_at: DateTime<Utc>,
    pub sample_test_cases: Vec<TestCase>,
    pub total_test_cases: usize,
}

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<Problem>,
    pub total: usize,
}

/// Test cases list response (difficulty-ascending)
#[derive(Debug, Serialize)]
pub struct TestCasesListResponse {
    pub test_cases: Vec<TestCase>,
    pub total: usize,
}
