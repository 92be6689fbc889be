//! Binary search tree demonstration trace

use crate::replay::BinaryTree;
use crate::step::{Step, StepAction, Value};

/// Canonical insertion order for the BST demonstration
pub const BST_DEMO_VALUES: [Value; 7] = [50, 30, 70, 20, 40, 60, 80];

/// Insert the canonical values, then walk the finished tree in order.
pub fn bst_steps() -> Vec<Step> {
    bst_steps_for(&BST_DEMO_VALUES)
}

/// Insert `values` as `node-0`, `node-1`, ... and emit an in-order walk.
///
/// The generator builds its own tree alongside the steps, so the traversal
/// it records is the one the replayed tree will actually have.
pub fn bst_steps_for(values: &[Value]) -> Vec<Step> {
    let mut tree = BinaryTree::new();
    let mut steps = Vec::with_capacity(values.len() * 2);

    for (index, &value) in values.iter().enumerate() {
        let node_id = format!("node-{}", index);
        // Ids are unique by construction, so the insert always succeeds
        tree.insert(node_id.clone(), value);
        steps.push(Step::new(
            StepAction::InsertNode { node_id, value },
            format!("Insert {} into BST", value),
        ));
    }

    let root_id = tree.root().map(|n| n.id.as_str());
    for (visit, node) in tree.in_order().into_iter().enumerate() {
        let description = if visit == 0 {
            format!("Start inorder traversal at node {}", node.value)
        } else if root_id == Some(node.id.as_str()) {
            format!("Visit root node {}", node.value)
        } else {
            format!("Visit node {}", node.value)
        };
        steps.push(Step::new(
            StepAction::TraverseNode {
                node_id: node.id.clone(),
            },
            description,
        ));
    }

    steps
}
