//! Problem repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{error::AppResult, models::Problem};

/// Store operations for problems
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProblemStore: Send + Sync {
    /// Persist a problem and return the stored record
    async fn save(&self, problem: &Problem) -> AppResult<Problem>;

    /// Find a problem by its identifier
    async fn find_by_id(&self, problem_id: &str) -> AppResult<Option<Problem>>;

    /// Fetch all problems
    async fn find_all(&self) -> AppResult<Vec<Problem>>;

    /// Check whether a problem identifier exists
    async fn exists_by_id(&self, problem_id: &str) -> AppResult<bool>;
}

/// Postgres-backed problem store
pub struct PgProblemRepository {
    pool: PgPool,
}

impl PgProblemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProblemStore for PgProblemRepository {
    async fn save(&self, problem: &Problem) -> AppResult<Problem> {
        let saved = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (
                problem_id, title, description, difficulty,
                time_limit_ms, memory_limit_mb, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&problem.problem_id)
        .bind(&problem.title)
        .bind(&problem.description)
        .bind(&problem.difficulty)
        .bind(problem.time_limit_ms)
        .bind(problem.memory_limit_mb)
        .bind(problem.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, problem_id: &str) -> AppResult<Option<Problem>> {
        let problem =
            sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE problem_id = $1"#)
                .bind(problem_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(problem)
    }

    async fn find_all(&self) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems"#)
            .fetch_all(&self.pool)
            .await?;

        Ok(problems)
    }

    async fn exists_by_id(&self, problem_id: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM problems WHERE problem_id = $1)"#)
                .bind(problem_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
