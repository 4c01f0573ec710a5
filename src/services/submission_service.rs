//! Submission service
//!
//! Submissions are recorded and listed only. No judging pipeline consumes
//! them here; they stay in the status they were stamped with at creation.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    constants::SUBMISSION_STATUS_QUEUED,
    db::repositories::SubmissionStore,
    error::{AppError, AppResult},
    handlers::submissions::request::CreateSubmissionRequest,
    models::Submission,
    services::CatalogService,
};

/// Submission recording business logic
pub struct SubmissionService {
    catalog: Arc<CatalogService>,
    submissions: Arc<dyn SubmissionStore>,
}

impl SubmissionService {
    pub fn new(catalog: Arc<CatalogService>, submissions: Arc<dyn SubmissionStore>) -> Self {
        Self {
            catalog,
            submissions,
        }
    }

    /// Record a submission against a problem
    pub async fn create_submission(
        &self,
        problem_id: &str,
        payload: CreateSubmissionRequest,
    ) -> AppResult<Submission> {
        if !self.catalog.problem_exists(problem_id).await? {
            return Err(AppError::NotFound(format!("Problem not found: {problem_id}")));
        }

        let submission = Submission {
            submission_id: Uuid::new_v4().to_string(),
            problem_id: problem_id.to_string(),
            code: payload.code,
            language: payload.language,
            status: SUBMISSION_STATUS_QUEUED.to_string(),
            runtime_ms: None,
            memory_kb: None,
            test_cases_passed: None,
            total_test_cases: None,
            error_message: None,
            submitted_at: Utc::now(),
            evaluated_at: None,
        };

        let saved = self.submissions.save(&submission).await?;

        tracing::info!(
            "Recorded submission {} for problem {} ({})",
            saved.submission_id,
            problem_id,
            saved.language
        );

        Ok(saved)
    }

    /// List all submissions recorded against a problem
    pub async fn list_submissions(&self, problem_id: &str) -> AppResult<Vec<Submission>> {
        if !self.catalog.problem_exists(problem_id).await? {
            return Err(AppError::NotFound(format!("Problem not found: {problem_id}")));
        }

        self.submissions.find_by_problem_id(problem_id).await
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use crate::{
        db::repositories::{ProblemStore, TestCaseStore},
        handlers::problems::request::CreateProblemRequest,
        models::{Problem, TestCase},
    };

    use super::*;

    #[derive(Default)]
    struct InMemoryProblemStore {
        rows: Mutex<Vec<Problem>>,
    }

    #[async_trait::async_trait]
    impl ProblemStore for InMemoryProblemStore {
        async fn save(&self, problem: &Problem) -> AppResult<Problem> {
            self.rows.lock().push(problem.clone());
            Ok(problem.clone())
        }

        async fn find_by_id(&self, problem_id: &str) -> AppResult<Option<Problem>> {
            Ok(self
                .rows
                .lock()
                .iter()
                .find(|p| p.problem_id == problem_id)
                .cloned())
        }

        async fn find_all(&self) -> AppResult<Vec<Problem>> {
            Ok(self.rows.lock().clone())
        }

        async fn exists_by_id(&self, problem_id: &str) -> AppResult<bool> {
            Ok(self.rows.lock().iter().any(|p| p.problem_id == problem_id))
        }
    }

    #[derive(Default)]
    struct NoTestCases;

    #[async_trait::async_trait]
    impl TestCaseStore for NoTestCases {
        async fn save(&self, test_case: &TestCase) -> AppResult<TestCase> {
            Ok(test_case.clone())
        }

        async fn find_by_problem_id(&self, _problem_id: &str) -> AppResult<Vec<TestCase>> {
            Ok(Vec::new())
        }

        async fn find_by_problem_id_and_is_sample(
            &self,
            _problem_id: &str,
            _is_sample: bool,
        ) -> AppResult<Vec<TestCase>> {
            Ok(Vec::new())
        }
    }

    #[derive(Default)]
    struct InMemorySubmissionStore {
        rows: Mutex<Vec<Submission>>,
    }

    #[async_trait::async_trait]
    impl SubmissionStore for InMemorySubmissionStore {
        async fn save(&self, submission: &Submission) -> AppResult<Submission> {
            self.rows.lock().push(submission.clone());
            Ok(submission.clone())
        }

        async fn find_by_problem_id(&self, problem_id: &str) -> AppResult<Vec<Submission>> {
            Ok(self
                .rows
                .lock()
                .iter()
                .filter(|s| s.problem_id == problem_id)
                .cloned()
                .collect())
        }
    }

    async fn service_with_problem() -> SubmissionService {
        let catalog = Arc::new(CatalogService::new(
            Arc::new(InMemoryProblemStore::default()),
            Arc::new(NoTestCases),
        ));
        catalog
            .create_problem(CreateProblemRequest {
                title: "Two Sum".to_string(),
                description: "description".to_string(),
                difficulty: None,
                time_limit_ms: None,
                memory_limit_mb: None,
            })
            .await
            .expect("create problem");

        SubmissionService::new(catalog, Arc::new(InMemorySubmissionStore::default()))
    }

    fn submission_request() -> CreateSubmissionRequest {
        CreateSubmissionRequest {
            code: "fn main() {}".to_string(),
            language: "rust".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_submission_stamps_queued_state() {
        let service = service_with_problem().await;

        let saved = service
            .create_submission("two-sum", submission_request())
            .await
            .expect("create submission");

        assert_eq!(saved.status, "QUEUED");
        assert!(saved.runtime_ms.is_none());
        assert!(saved.evaluated_at.is_none());

        let listed = service
            .list_submissions("two-sum")
            .await
            .expect("list submissions");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].submission_id, saved.submission_id);
    }

    #[tokio::test]
    async fn test_submission_against_missing_problem_is_not_found() {
        let service = service_with_problem().await;

        let err = service
            .create_submission("missing", submission_request())
            .await
            .expect_err("missing problem");
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service
            .list_submissions("missing")
            .await
            .expect_err("missing problem");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
