//! Owned binary search tree used by the BST replay
//!
//! Every node is owned by exactly one parent (or by the root slot); there are
//! no parent pointers. Nodes are addressed by their string id, which stays
//! stable for the whole run. Ordering follows the insertion rule
//! `value < node.value` → left, otherwise right, so equal values land in the
//! right subtree.
//!
//! Deletion is by identity: the node with the given id is found by searching
//! both subtrees, never by comparing values, since values may repeat.

use crate::step::{NodeId, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: NodeId,
    pub value: Value,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(id: NodeId, value: Value) -> Self {
        TreeNode {
            id,
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary search tree snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree {
    root: Option<Box<TreeNode>>,
}

impl BinaryTree {
    pub fn new() -> Self {
        BinaryTree { root: None }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        fn count(node: Option<&TreeNode>) -> usize {
            node.map_or(0, |n| 1 + count(n.left.as_deref()) + count(n.right.as_deref()))
        }
        count(self.root())
    }

    /// Number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        fn height(node: Option<&TreeNode>) -> usize {
            node.map_or(0, |n| {
                1 + height(n.left.as_deref()).max(height(n.right.as_deref()))
            })
        }
        height(self.root())
    }

    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        fn find<'a>(node: Option<&'a TreeNode>, id: &str) -> Option<&'a TreeNode> {
            let node = node?;
            if node.id == id {
                return Some(node);
            }
            find(node.left.as_deref(), id).or_else(|| find(node.right.as_deref(), id))
        }
        find(self.root(), id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Insert a new leaf by BST comparison.
    ///
    /// Returns `false` and leaves the tree untouched if `id` is already present.
    pub fn insert(&mut self, id: NodeId, value: Value) -> bool {
        if self.contains(&id) {
            return false;
        }

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(TreeNode::leaf(id, value)));
        true
    }

    /// Remove the node with the given id.
    ///
    /// A node with two children takes over the id and value of its in-order
    /// successor (the minimum of its right subtree), which is then removed
    /// from that subtree. Returns `false` if no node has this id.
    pub fn remove(&mut self, id: &str) -> bool {
        remove_from(&mut self.root, id)
    }

    /// Nodes in ascending (in-order) sequence
    pub fn in_order(&self) -> Vec<&TreeNode> {
        fn walk<'a>(node: Option<&'a TreeNode>, out: &mut Vec<&'a TreeNode>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                out.push(n);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        walk(self.root(), &mut out);
        out
    }

    /// Nodes paired with their depth (root = 0), in pre-order
    pub fn nodes_with_depth(&self) -> Vec<(&TreeNode, usize)> {
        fn walk<'a>(
            node: Option<&'a TreeNode>,
            depth: usize,
            out: &mut Vec<(&'a TreeNode, usize)>,
        ) {
            if let Some(n) = node {
                out.push((n, depth));
                walk(n.left.as_deref(), depth + 1, out);
                walk(n.right.as_deref(), depth + 1, out);
            }
        }
        let mut out = Vec::new();
        walk(self.root(), 0, &mut out);
        out
    }

    /// Check the ordering invariant: every left descendant is strictly
    /// smaller, every right descendant is greater or equal.
    pub fn is_search_tree(&self) -> bool {
        fn check(node: Option<&TreeNode>, lower: Option<Value>, upper: Option<Value>) -> bool {
            let Some(n) = node else {
                return true;
            };
            if lower.is_some_and(|lo| n.value < lo) || upper.is_some_and(|hi| n.value >= hi) {
                return false;
            }
            check(n.left.as_deref(), lower, Some(n.value))
                && check(n.right.as_deref(), Some(n.value), upper)
        }
        check(self.root(), None, None)
    }
}

fn remove_from(slot: &mut Option<Box<TreeNode>>, id: &str) -> bool {
    let Some(node) = slot.as_mut() else {
        return false;
    };

    if node.id != id {
        return remove_from(&mut node.left, id) || remove_from(&mut node.right, id);
    }

    match (node.left.take(), node.right.take()) {
        (None, None) => *slot = None,
        (Some(child), None) | (None, Some(child)) => *slot = Some(child),
        (Some(left), Some(right)) => {
            node.left = Some(left);
            node.right = Some(right);
            let (successor_id, successor_value) = match leftmost(&node.right) {
                Some(s) => (s.id.clone(), s.value),
                None => return false,
            };
            remove_from(&mut node.right, &successor_id);
            node.id = successor_id;
            node.value = successor_value;
        }
    }
    true
}

fn leftmost(slot: &Option<Box<TreeNode>>) -> Option<&TreeNode> {
    let mut node = slot.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_tree() -> BinaryTree {
        let mut tree = BinaryTree::new();
        for (i, v) in [50, 30, 70, 20, 40, 60, 80].into_iter().enumerate() {
            assert!(tree.insert(format!("node-{}", i), v));
        }
        tree
    }

    fn values(tree: &BinaryTree) -> Vec<Value> {
        tree.in_order().iter().map(|n| n.value).collect()
    }

    #[test]
    fn test_insert_places_by_comparison() {
        let tree = demo_tree();
        let root = tree.root().unwrap();
        assert_eq!(root.value, 50);
        assert_eq!(root.left.as_ref().unwrap().value, 30);
        assert_eq!(root.right.as_ref().unwrap().left.as_ref().unwrap().value, 60);
        assert_eq!(tree.height(), 3);
        assert!(tree.is_search_tree());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut tree = demo_tree();
        assert!(!tree.insert("node-3".to_string(), 5));
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_remove_leaf_and_single_child() {
        let mut tree = demo_tree();
        assert!(tree.remove("node-3")); // 20, leaf
        assert!(tree.remove("node-1")); // 30, now only right child 40
        assert_eq!(values(&tree), vec![40, 50, 60, 70, 80]);
        assert_eq!(tree.root().unwrap().left.as_ref().unwrap().id, "node-4");
    }

    #[test]
    fn test_remove_two_children_promotes_successor() {
        let mut tree = demo_tree();
        assert!(tree.remove("node-0"));
        let root = tree.root().unwrap();
        assert_eq!(root.value, 60);
        assert_eq!(root.id, "node-5");
        assert!(!tree.contains("node-0"));
        assert_eq!(values(&tree), vec![20, 30, 40, 60, 70, 80]);
        assert!(tree.is_search_tree());
    }

    #[test]
    fn test_remove_by_identity_with_repeated_values() {
        let mut tree = BinaryTree::new();
        tree.insert("a".to_string(), 10);
        tree.insert("b".to_string(), 10);
        tree.insert("c".to_string(), 10);
        assert!(tree.remove("c"));
        assert!(tree.contains("a"));
        assert!(tree.contains("b"));
        assert!(!tree.contains("c"));
        assert!(!tree.remove("missing"));
    }
}
