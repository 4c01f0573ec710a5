//! Test case model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Test case database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub test_case_id: String,
    pub problem_id: String,
    pub input: String,
    pub expected_output: String,
    /// Sort key for the per-problem difficulty-ordered index
    pub difficulty_level: i32,
    /// Sample test cases are visible to end users; hidden ones are not
    pub is_sample: bool,
    pub created_at: DateTime<Utc>,
}

impl TestCase {
    /// Get a preview of the input (truncated), used for logging
    ///
    /// The cut is moved back to the nearest char boundary so multi-byte
    /// input never panics the slice.
    pub fn input_preview(&self, max_len: usize) -> String {
        if self.input.len() <= max_len {
            self.input.clone()
        } else {
            let mut boundary = max_len;
            while !self.input.is_char_boundary(boundary) {
                boundary -= 1;
            }
            format!("{}...", &self.input[..boundary])
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn test_case(input: &str) -> TestCase {
        TestCase {
            test_case_id: "tc1".to_string(),
            problem_id: "two-sum".to_string(),
            input: input.to_string(),
            expected_output: String::new(),
            difficulty_level: 1,
            is_sample: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_input_preview_short_input_is_unchanged() {
        assert_eq!(test_case("1 2 3").input_preview(40), "1 2 3");
    }

    #[test]
    fn test_input_preview_truncates_long_input() {
        let preview = test_case(&"x".repeat(100)).input_preview(40);
        assert_eq!(preview, format!("{}...", "x".repeat(40)));
    }

    #[test]
    fn test_input_preview_respects_char_boundaries() {
        // 14 three-byte chars = 42 bytes; a raw byte cut at 40 would land
        // inside the 14th char
        let preview = test_case(&"あ".repeat(14)).input_preview(40);
        assert_eq!(preview, format!("{}...", "あ".repeat(13)));
    }
}
