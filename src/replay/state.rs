//! Derived visual state and the single-step transition
//!
//! [`ReplayState`] at position P is a pure function of the initial input and
//! `steps[0..=P]`. [`ReplayState::apply_step_forward`] is the only way the
//! state changes; it validates a step completely before touching any field,
//! so a rejected step leaves the state exactly as it was.

use super::tree::BinaryTree;
use crate::errors::{Result, VisualizerError};
use crate::step::{NodeId, Step, StepAction, Value};
use rustc_hash::FxHashSet;

/// Everything the presentation layer draws for one position in the sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayState {
    /// Index of the last applied step; `None` is the pristine initial state
    pub position: Option<usize>,
    pub array: Vec<Value>,
    pub sorted_indices: FxHashSet<usize>,
    pub compare_indices: FxHashSet<usize>,
    pub highlight_indices: FxHashSet<usize>,
    pub pivot_index: Option<usize>,
    pub tree: BinaryTree,
    pub visited_nodes: FxHashSet<NodeId>,
    /// FIFO frontier history, in enqueue order
    pub queue: Vec<NodeId>,
    /// LIFO frontier history, in push order
    pub stack: Vec<NodeId>,
}

impl ReplayState {
    /// Pristine state for the given input array
    pub fn initial(array: Vec<Value>) -> Self {
        ReplayState {
            array,
            ..ReplayState::default()
        }
    }

    /// Position of the next step to apply
    pub fn next_position(&self) -> usize {
        self.position.map_or(0, |p| p + 1)
    }

    pub fn is_pristine(&self) -> bool {
        self.position.is_none()
    }

    /// Apply one step and advance the position by one.
    ///
    /// Compare and highlight sets are transient: every step clears them and
    /// `compare`/`highlight` then replace them. Sorted indices and visited
    /// nodes only ever grow. `traverseNode` and `exploreEdge` carry no
    /// derived state; the shell reads them from the current step.
    pub fn apply_step_forward(&mut self, step: &Step) -> Result<()> {
        let position = self.next_position();
        self.validate(position, step)?;

        self.compare_indices.clear();
        self.highlight_indices.clear();

        match &step.action {
            StepAction::Compare { indices } => {
                self.compare_indices.extend(indices.iter().copied());
            }
            StepAction::Highlight { indices } => {
                self.highlight_indices.extend(indices.iter().copied());
            }
            StepAction::Swap { indices: [a, b] } => {
                self.array.swap(*a, *b);
            }
            StepAction::MarkSorted { indices } => {
                self.sorted_indices.extend(indices.iter().copied());
            }
            StepAction::Pivot { index } => {
                self.pivot_index = Some(*index);
            }
            StepAction::Merge { values, .. } => {
                self.array.clone_from(values);
            }
            StepAction::InsertNode { node_id, value } => {
                self.tree.insert(node_id.clone(), *value);
            }
            StepAction::DeleteNode { node_id } => {
                self.tree.remove(node_id);
            }
            StepAction::VisitNode { node_id } => {
                self.visited_nodes.insert(node_id.clone());
            }
            StepAction::QueueNode { node_id } => {
                self.queue.push(node_id.clone());
            }
            StepAction::StackNode { node_id } => {
                self.stack.push(node_id.clone());
            }
            StepAction::TraverseNode { .. } | StepAction::ExploreEdge { .. } => {}
        }

        self.position = Some(position);
        Ok(())
    }

    fn validate(&self, position: usize, step: &Step) -> Result<()> {
        let len = self.array.len();
        let check_index = |index: usize| {
            if index < len {
                Ok(())
            } else {
                Err(VisualizerError::IndexOutOfBounds {
                    position,
                    index,
                    len,
                })
            }
        };

        match &step.action {
            StepAction::Merge { indices, values } => {
                if indices.is_empty() {
                    return Err(VisualizerError::MalformedStep {
                        position,
                        message: "merge step touches no indices".to_string(),
                    });
                }
                if values.len() != len {
                    return Err(VisualizerError::SnapshotLengthMismatch {
                        position,
                        expected: len,
                        got: values.len(),
                    });
                }
                indices.iter().try_for_each(|&i| check_index(i))
            }
            StepAction::InsertNode { node_id, .. } => {
                if self.tree.contains(node_id) {
                    Err(VisualizerError::DuplicateNode {
                        position,
                        node_id: node_id.clone(),
                    })
                } else {
                    Ok(())
                }
            }
            StepAction::DeleteNode { node_id } => {
                if self.tree.contains(node_id) {
                    Ok(())
                } else {
                    Err(VisualizerError::UnknownNode {
                        position,
                        node_id: node_id.clone(),
                    })
                }
            }
            _ => step.indices().iter().try_for_each(|&i| check_index(i)),
        }
    }
}
