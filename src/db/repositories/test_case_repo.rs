//! Test case repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{error::AppResult, models::TestCase};

/// Store operations for test cases
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestCaseStore: Send + Sync {
    /// Persist a test case and return the stored record
    async fn save(&self, test_case: &TestCase) -> AppResult<TestCase>;

    /// Fetch all test cases owned by a problem, in the store's natural order
    async fn find_by_problem_id(&self, problem_id: &str) -> AppResult<Vec<TestCase>>;

    /// Fetch a problem's test cases filtered by sample visibility
    async fn find_by_problem_id_and_is_sample(
        &self,
        problem_id: &str,
        is_sample: bool,
    ) -> AppResult<Vec<TestCase>>;
}

/// Postgres-backed test case store
pub struct PgTestCaseRepository {
    pool: PgPool,
}

impl PgTestCaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestCaseStore for PgTestCaseRepository {
    async fn save(&self, test_case: &TestCase) -> AppResult<TestCase> {
        let saved = sqlx::query_as::<_, TestCase>(
            r#"
            INSERT INTO test_cases (
                test_case_id, problem_id, input, expected_output,
                difficulty_level, is_sample, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&test_case.test_case_id)
        .bind(&test_case.problem_id)
        .bind(&test_case.input)
        .bind(&test_case.expected_output)
        .bind(test_case.difficulty_level)
        .bind(test_case.is_sample)
        .bind(test_case.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn find_by_problem_id(&self, problem_id: &str) -> AppResult<Vec<TestCase>> {
        // No ORDER BY: the store's natural return order is what fixes the
        // tie-break order among equal difficulties at startup
        let test_cases =
            sqlx::query_as::<_, TestCase>(r#"SELECT * FROM test_cases WHERE problem_id = $1"#)
                .bind(problem_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(test_cases)
    }

    async fn find_by_problem_id_and_is_sample(
        &self,
        problem_id: &str,
        is_sample: bool,
    ) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"SELECT * FROM test_cases WHERE problem_id = $1 AND is_sample = $2"#,
        )
        .bind(problem_id)
        .bind(is_sample)
        .fetch_all(&self.pool)
        .await?;

        Ok(test_cases)
    }
}
