//! Difficulty-ordered test case tree
//!
//! An unbalanced binary search tree keyed by `difficulty_level`. Equal keys
//! descend right, so an in-order walk returns equal-difficulty test cases in
//! insertion order. Shape is purely a function of insertion order; expected
//! per-problem test case counts are small enough that no rebalancing is done.
//!
//! Insertion, traversal, and teardown are all iterative. A degenerate
//! (monotonic-insert) tree is effectively a linked list, and recursing over
//! one would grow the call stack without bound.

use crate::models::TestCase;

struct Node {
    test_case: TestCase,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(test_case: TestCase) -> Self {
        Self {
            test_case,
            left: None,
            right: None,
        }
    }
}

/// Per-problem binary search tree over test cases
pub struct TestCaseTree {
    root: Option<Box<Node>>,
    count: usize,
}

impl TestCaseTree {
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// Insert a test case keyed by its difficulty level
    ///
    /// Strictly smaller keys descend left, equal-or-larger keys descend
    /// right. Always succeeds; duplicate keys are kept.
    pub fn insert(&mut self, test_case: TestCase) {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = if test_case.difficulty_level < node.test_case.difficulty_level {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cur = Some(Box::new(Node::new(test_case)));
        self.count += 1;
    }

    /// Get all test cases in ascending difficulty order
    ///
    /// Equal-difficulty test cases come back in the order they were
    /// inserted. Does not mutate the tree and may be called repeatedly.
    pub fn in_order_traversal(&self) -> Vec<TestCase> {
        let mut result = Vec::with_capacity(self.count);
        let mut stack: Vec<&Node> = Vec::new();
        let mut cur = self.root.as_deref();

        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    result.push(node.test_case.clone());
                    cur = node.right.as_deref();
                }
                None => break,
            }
        }

        result
    }

    /// Total number of test cases in the tree
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Discard all test cases and reset the count
    pub fn clear(&mut self) {
        // Unlink iteratively so dropping a degenerate tree cannot recurse
        let mut stack = Vec::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
        self.count = 0;
    }
}

impl Default for TestCaseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestCaseTree {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn tc(id: &str, difficulty: i32) -> TestCase {
        TestCase {
            test_case_id: id.to_string(),
            problem_id: "two-sum".to_string(),
            input: format!("input-{id}"),
            expected_output: format!("output-{id}"),
            difficulty_level: difficulty,
            is_sample: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_traversal_is_sorted_by_difficulty() {
        let mut tree = TestCaseTree::new();
        for (id, difficulty) in [("a", 3), ("b", 1), ("c", 5), ("d", 2), ("e", 4)] {
            tree.insert(tc(id, difficulty));
        }

        let ordered = tree.in_order_traversal();
        let difficulties: Vec<i32> = ordered.iter().map(|t| t.difficulty_level).collect();
        assert_eq!(difficulties, vec![1, 2, 3, 4, 5]);

        let ids: Vec<&str> = ordered.iter().map(|t| t.test_case_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "e", "c"]);
    }

    #[test]
    fn test_equal_difficulties_keep_insertion_order() {
        let mut tree = TestCaseTree::new();
        tree.insert(tc("first", 3));
        tree.insert(tc("second", 3));
        tree.insert(tc("third", 3));

        let ordered = tree.in_order_traversal();
        let ids: Vec<&str> = ordered.iter().map(|t| t.test_case_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_count_matches_inserts() {
        let mut tree = TestCaseTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.count(), 0);

        for i in 0..17 {
            tree.insert(tc(&format!("tc{i}"), i % 4));
        }

        assert_eq!(tree.count(), 17);
        assert_eq!(tree.in_order_traversal().len(), 17);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut tree = TestCaseTree::new();
        tree.insert(tc("a", 1));
        tree.insert(tc("b", 2));

        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.count(), 0);
        assert!(tree.in_order_traversal().is_empty());
    }

    #[test]
    fn test_degenerate_tree_does_not_overflow() {
        // Monotonic insertion produces a right-leaning chain; traversal and
        // drop must both survive it
        let mut tree = TestCaseTree::new();
        let n = 100_000;
        for i in 0..n {
            tree.insert(tc(&format!("tc{i}"), i));
        }

        let ordered = tree.in_order_traversal();
        assert_eq!(ordered.len(), n as usize);
        assert_eq!(ordered[0].difficulty_level, 0);
        assert_eq!(ordered[n as usize - 1].difficulty_level, n - 1);

        drop(tree);
    }
}
