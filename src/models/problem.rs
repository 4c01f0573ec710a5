//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Problem database model
///
/// The identifier is a slug derived from the title at creation time and is
/// immutable for the lifetime of the problem.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub problem_id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Option<String>,
    pub time_limit_ms: i32,
    pub memory_limit_mb: i32,
    pub created_at: DateTime<Utc>,
}
