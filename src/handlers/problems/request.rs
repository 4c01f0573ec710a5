//! Problem request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PROBLEM_DESCRIPTION_LENGTH, MAX_PROBLEM_TITLE_LENGTH};

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_PROBLEM_DESCRIPTION_LENGTH))]
    pub description: String,

    /// Difficulty label (e.g. "easy", "hard")
    pub difficulty: Option<String>,

    /// Time limit in milliseconds (defaults to 2000)
    pub time_limit_ms: Option<i32>,

    /// Memory limit in megabytes (defaults to 256)
    pub memory_limit_mb: Option<i32>,
}

/// Create test case request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTestCaseRequest {
    /// Input data fed to a solution
    pub input: String,

    /// Expected output
    pub expected_output: String,

    /// Sort key for the difficulty-ordered index
    pub difficulty_level: i32,

    /// Is this test case visible to end users? Defaults to hidden.
    pub is_sample: Option<bool>,
}
