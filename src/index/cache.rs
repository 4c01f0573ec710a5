//! In-process problem cache
//!
//! A full-table mirror of the problems table, keyed by problem identifier.
//! Entries live for the process lifetime; there is no eviction. This is
//! acceptable only while the problem corpus stays small.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::models::Problem;

/// Process-wide problem cache keyed by problem identifier
pub struct ProblemCache {
    entries: RwLock<HashMap<String, Problem>>,
}

impl ProblemCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get the cached problem, if present
    ///
    /// Never consults the store; the caller decides whether to fall back.
    pub fn get(&self, problem_id: &str) -> Option<Problem> {
        self.entries.read().get(problem_id).cloned()
    }

    /// Insert or overwrite the entry for a problem
    pub fn put(&self, problem: Problem) {
        self.entries
            .write()
            .insert(problem.problem_id.clone(), problem);
    }

    /// Snapshot of all cached problems
    pub fn values(&self) -> Vec<Problem> {
        self.entries.read().values().cloned().collect()
    }

    /// Check whether a problem is cached
    pub fn contains_key(&self, problem_id: &str) -> bool {
        self.entries.read().contains_key(problem_id)
    }

    /// Number of cached problems
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for ProblemCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn problem(id: &str) -> Problem {
        Problem {
            problem_id: id.to_string(),
            title: id.to_string(),
            description: "desc".to_string(),
            difficulty: None,
            time_limit_ms: 2000,
            memory_limit_mb: 256,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_put_then_get() {
        let cache = ProblemCache::new();
        assert!(cache.get("two-sum").is_none());
        assert!(cache.is_empty());

        cache.put(problem("two-sum"));

        assert!(cache.contains_key("two-sum"));
        assert_eq!(cache.len(), 1);
        let cached = cache.get("two-sum").expect("cached problem");
        assert_eq!(cached.problem_id, "two-sum");
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let cache = ProblemCache::new();
        cache.put(problem("two-sum"));

        let mut updated = problem("two-sum");
        updated.title = "Two Sum (revised)".to_string();
        cache.put(updated);

        assert_eq!(cache.len(), 1);
        let cached = cache.get("two-sum").expect("cached problem");
        assert_eq!(cached.title, "Two Sum (revised)");
    }

    #[test]
    fn test_values_snapshot() {
        let cache = ProblemCache::new();
        cache.put(problem("two-sum"));
        cache.put(problem("a-b"));

        let mut ids: Vec<String> = cache
            .values()
            .into_iter()
            .map(|p| p.problem_id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a-b", "two-sum"]);
    }
}
