//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_SUBMISSION_CODE_LENGTH;

/// Create submission request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    #[validate(length(min = 1, max = MAX_SUBMISSION_CODE_LENGTH))]
    pub code: String,

    #[validate(length(min = 1))]
    pub language: String,
}
