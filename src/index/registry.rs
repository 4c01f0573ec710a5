//! Test case tree registry
//!
//! Process-wide mapping from problem identifier to its difficulty-ordered
//! tree. The registry owns each tree's lifetime: an entry is only destroyed
//! by replacing it wholesale via `put`.
//!
//! Trees are handed out as `Arc<RwLock<TestCaseTree>>`. The outer map lock is
//! held only long enough to look up or insert an entry; the per-entry lock
//! serializes insertion against traversal for a single problem.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::tree::TestCaseTree;

/// Shared handle to one problem's tree
pub type SharedTree = Arc<RwLock<TestCaseTree>>;

/// Registry of per-problem test case trees
pub struct TreeRegistry {
    trees: RwLock<HashMap<String, SharedTree>>,
}

impl TreeRegistry {
    pub fn new() -> Self {
        Self {
            trees: RwLock::new(HashMap::new()),
        }
    }

    /// Get the tree for a problem, creating and registering an empty one if
    /// none exists
    pub fn get_or_create(&self, problem_id: &str) -> SharedTree {
        let mut trees = self.trees.write();
        trees
            .entry(problem_id.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(TestCaseTree::new())))
            .clone()
    }

    /// Get the tree for a problem, if one is registered
    pub fn get(&self, problem_id: &str) -> Option<SharedTree> {
        self.trees.read().get(problem_id).cloned()
    }

    /// Replace the entry for a problem wholesale
    pub fn put(&self, problem_id: &str, tree: TestCaseTree) {
        self.trees
            .write()
            .insert(problem_id.to_string(), Arc::new(RwLock::new(tree)));
    }
}

impl Default for TreeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::models::TestCase;

    use super::*;

    fn tc(id: &str, difficulty: i32) -> TestCase {
        TestCase {
            test_case_id: id.to_string(),
            problem_id: "two-sum".to_string(),
            input: String::new(),
            expected_output: String::new(),
            difficulty_level: difficulty,
            is_sample: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_get_or_create_registers_empty_tree() {
        let registry = TreeRegistry::new();
        assert!(registry.get("two-sum").is_none());

        let tree = registry.get_or_create("two-sum");
        assert!(tree.read().is_empty());

        // Second call returns the same tree, not a fresh one
        tree.write().insert(tc("a", 1));
        let again = registry.get_or_create("two-sum");
        assert_eq!(again.read().count(), 1);
    }

    #[test]
    fn test_put_replaces_entry_wholesale() {
        let registry = TreeRegistry::new();
        let tree = registry.get_or_create("two-sum");
        tree.write().insert(tc("a", 1));

        registry.put("two-sum", TestCaseTree::new());

        let replaced = registry.get("two-sum").expect("registered tree");
        assert!(replaced.read().is_empty());
    }

    #[test]
    fn test_entries_are_independent() {
        let registry = TreeRegistry::new();
        registry.get_or_create("two-sum").write().insert(tc("a", 1));
        registry.put("a-b", TestCaseTree::new());

        assert_eq!(
            registry.get("two-sum").expect("tree").read().count(),
            1
        );
        assert!(registry.get("a-b").expect("tree").read().is_empty());
    }
}
