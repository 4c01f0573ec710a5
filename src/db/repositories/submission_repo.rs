//! Submission repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{error::AppResult, models::Submission};

/// Store operations for submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist a submission and return the stored record
    async fn save(&self, submission: &Submission) -> AppResult<Submission>;

    /// Fetch all submissions recorded against a problem
    async fn find_by_problem_id(&self, problem_id: &str) -> AppResult<Vec<Submission>>;
}

/// Postgres-backed submission store
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionRepository {
    async fn save(&self, submission: &Submission) -> AppResult<Submission> {
        let saved = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (
                submission_id, problem_id, code, language, status,
                runtime_ms, memory_kb, test_cases_passed, total_test_cases,
                error_message, submitted_at, evaluated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&submission.submission_id)
        .bind(&submission.problem_id)
        .bind(&submission.code)
        .bind(&submission.language)
        .bind(&submission.status)
        .bind(submission.runtime_ms)
        .bind(submission.memory_kb)
        .bind(submission.test_cases_passed)
        .bind(submission.total_test_cases)
        .bind(&submission.error_message)
        .bind(submission.submitted_at)
        .bind(submission.evaluated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn find_by_problem_id(&self, problem_id: &str) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE problem_id = $1 ORDER BY submitted_at DESC"#,
        )
        .bind(problem_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }
}
