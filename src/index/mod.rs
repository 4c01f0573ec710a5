//! In-memory index layer
//!
//! This module contains the process-wide in-memory structures that mirror
//! persisted state: the full-mirror problem cache, the per-problem test case
//! tree, and the registry that owns one tree per problem.
//!
//! The tree itself performs no locking; the registry hands out each tree
//! behind its own `RwLock` so that insertion and traversal for a single
//! problem are serialized by the owning layer.

pub mod cache;
pub mod registry;
pub mod tree;

pub use cache::ProblemCache;
pub use registry::TreeRegistry;
pub use tree::TestCaseTree;
