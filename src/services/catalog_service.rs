//! Catalog service
//!
//! Orchestrates the problem cache, the tree registry, and the backing store.
//! The startup load runs once before the service takes traffic; every write
//! afterwards persists first and then updates the in-memory layer, so the
//! maps can always be rebuilt from the store alone.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    constants::{DEFAULT_MEMORY_LIMIT_MB, DEFAULT_TIME_LIMIT_MS},
    db::repositories::{ProblemStore, TestCaseStore},
    error::{AppError, AppResult},
    handlers::problems::{
        request::{CreateProblemRequest, CreateTestCaseRequest},
        response::ProblemDetailResponse,
    },
    index::{ProblemCache, TestCaseTree, TreeRegistry},
    models::{Problem, TestCase},
    utils::slug::slugify,
};

/// Problem catalog business logic
pub struct CatalogService {
    problems: Arc<dyn ProblemStore>,
    test_cases: Arc<dyn TestCaseStore>,
    cache: ProblemCache,
    registry: TreeRegistry,
}

impl CatalogService {
    pub fn new(problems: Arc<dyn ProblemStore>, test_cases: Arc<dyn TestCaseStore>) -> Self {
        Self {
            problems,
            test_cases,
            cache: ProblemCache::new(),
            registry: TreeRegistry::new(),
        }
    }

    /// Load all problems and build test case trees
    ///
    /// Runs once at startup, before the server accepts requests. Test cases
    /// are inserted in the store's natural return order, which fixes the
    /// tie-break order among equal difficulties for the process lifetime.
    pub async fn initialize(&self) -> AppResult<()> {
        tracing::info!("Loading problems and building test case trees...");

        let all_problems = self.problems.find_all().await?;
        tracing::info!("Found {} problems in store", all_problems.len());

        for problem in all_problems {
            let mut tree = TestCaseTree::new();
            let test_cases = self.test_cases.find_by_problem_id(&problem.problem_id).await?;
            for test_case in test_cases {
                tree.insert(test_case);
            }

            tracing::info!(
                "Loaded problem '{}' with {} test cases",
                problem.title,
                tree.count()
            );

            self.registry.put(&problem.problem_id, tree);
            self.cache.put(problem);
        }

        tracing::info!("Initialization complete. {} problems cached.", self.cache.len());
        Ok(())
    }

    /// Create a new problem
    ///
    /// The identifier is derived from the title and must not collide with an
    /// existing problem. Missing limits get the platform defaults.
    pub async fn create_problem(&self, payload: CreateProblemRequest) -> AppResult<Problem> {
        let problem_id = slugify(&payload.title);
        if problem_id.is_empty() {
            return Err(AppError::Validation(
                "Title must contain at least one alphanumeric character".to_string(),
            ));
        }

        if self.problems.exists_by_id(&problem_id).await? {
            return Err(AppError::Conflict(format!(
                "Problem with ID {} already exists",
                problem_id
            )));
        }

        let problem = Problem {
            problem_id: problem_id.clone(),
            title: payload.title,
            description: payload.description,
            difficulty: payload.difficulty,
            time_limit_ms: payload.time_limit_ms.unwrap_or(DEFAULT_TIME_LIMIT_MS),
            memory_limit_mb: payload.memory_limit_mb.unwrap_or(DEFAULT_MEMORY_LIMIT_MB),
            created_at: Utc::now(),
        };

        let saved = self.problems.save(&problem).await?;

        // Persist first, then mirror: the store stays authoritative
        self.cache.put(saved.clone());
        self.registry.put(&problem_id, TestCaseTree::new());

        tracing::info!("Created problem: {} (ID: {})", saved.title, problem_id);

        Ok(saved)
    }

    /// Get a problem with its sample test cases and total test case count
    pub async fn get_problem(&self, problem_id: &str) -> AppResult<ProblemDetailResponse> {
        let problem = match self.cache.get(problem_id) {
            Some(problem) => problem,
            None => {
                let problem = self
                    .problems
                    .find_by_id(problem_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Problem not found: {problem_id}")))?;

                self.cache.put(problem.clone());
                problem
            }
        };

        // Samples come straight from the store; the tree is unfiltered by
        // sample visibility and only supplies the total count
        let sample_test_cases = self
            .test_cases
            .find_by_problem_id_and_is_sample(problem_id, true)
            .await?;

        let total_test_cases = self
            .registry
            .get(problem_id)
            .map(|tree| tree.read().count())
            .unwrap_or(0);

        Ok(ProblemDetailResponse {
            problem_id: problem.problem_id,
            title: problem.title,
            description: problem.description,
            difficulty: problem.difficulty,
            time_limit_ms: problem.time_limit_ms,
            memory_limit_mb: problem.memory_limit_mb,
            created_at: problem.created_at,
            sample_test_cases,
            total_test_cases,
        })
    }

    /// Get all problems (without test cases)
    pub async fn list_problems(&self) -> AppResult<Vec<Problem>> {
        if !self.cache.is_empty() {
            return Ok(self.cache.values());
        }

        self.problems.find_all().await
    }

    /// Add a test case to a problem
    pub async fn add_test_case(
        &self,
        problem_id: &str,
        payload: CreateTestCaseRequest,
    ) -> AppResult<TestCase> {
        if !self.cache.contains_key(problem_id) && !self.problems.exists_by_id(problem_id).await? {
            return Err(AppError::NotFound(format!("Problem not found: {problem_id}")));
        }

        let test_case = TestCase {
            test_case_id: Uuid::new_v4().to_string(),
            problem_id: problem_id.to_string(),
            input: payload.input,
            expected_output: payload.expected_output,
            difficulty_level: payload.difficulty_level,
            is_sample: payload.is_sample.unwrap_or(false),
            created_at: Utc::now(),
        };

        let saved = self.test_cases.save(&test_case).await?;

        // Problems created before any tree existed get one on demand
        let tree = self.registry.get_or_create(problem_id);
        tree.write().insert(saved.clone());

        tracing::info!(
            "Added test case to problem {} (difficulty: {}, sample: {}, input: {})",
            problem_id,
            saved.difficulty_level,
            saved.is_sample,
            saved.input_preview(40)
        );

        Ok(saved)
    }

    /// Get all test cases for a problem in ascending difficulty order
    ///
    /// A problem without a registered (or non-empty) tree yields an empty
    /// list, not an error.
    pub fn test_cases_in_order(&self, problem_id: &str) -> Vec<TestCase> {
        match self.registry.get(problem_id) {
            Some(tree) => {
                let tree = tree.read();
                if tree.is_empty() {
                    tracing::warn!("No test cases found for problem: {}", problem_id);
                    return Vec::new();
                }
                tree.in_order_traversal()
            }
            None => {
                tracing::warn!("No test cases found for problem: {}", problem_id);
                Vec::new()
            }
        }
    }

    /// Check whether a problem exists in the cache or the store
    pub async fn problem_exists(&self, problem_id: &str) -> AppResult<bool> {
        if self.cache.contains_key(problem_id) {
            return Ok(true);
        }
        self.problems.exists_by_id(problem_id).await
    }
}
