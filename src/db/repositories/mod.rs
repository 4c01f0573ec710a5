//! Database repositories
//!
//! Each entity type gets a store trait describing the operations the service
//! layer consumes, plus a Postgres implementation. The traits are the seam
//! that lets service logic run against in-memory stores in tests.

pub mod problem_repo;
pub mod submission_repo;
pub mod test_case_repo;

pub use problem_repo::{PgProblemRepository, ProblemStore};
pub use submission_repo::{PgSubmissionRepository, SubmissionStore};
pub use test_case_repo::{PgTestCaseRepository, TestCaseStore};
