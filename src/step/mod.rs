//! Step model: one immutable, replayable unit of algorithmic history
//!
//! A generator runs an algorithm to completion and records every observable
//! micro-operation as a [`Step`]. Steps are never mutated after creation; the
//! replay machine derives visual state purely from the initial input and a
//! prefix of the step sequence.
//!
//! [`StepAction`] carries exactly the payload each kind needs, so a step can
//! never hold fields that are irrelevant to its kind. [`StepKind`] is the
//! fieldless discriminant used for display and filtering.

pub mod algorithm;

pub use algorithm::{Algorithm, Category};

use std::fmt;

/// Numeric payload of an array slot or tree node
pub type Value = i64;

/// Identifier of a tree node or graph vertex
pub type NodeId = String;

/// The observable effect of a single step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Two array positions are being compared
    Compare { indices: [usize; 2] },
    /// Two array positions exchange their values
    Swap { indices: [usize; 2] },
    /// Positions whose final value is now fixed
    MarkSorted { indices: Vec<usize> },
    /// Positions drawn with emphasis; no generator emits this today
    Highlight { indices: Vec<usize> },
    /// Position of the pivot for the current partition
    Pivot { index: usize },
    /// Full post-merge array; `indices` is the touched range
    Merge {
        indices: Vec<usize>,
        values: Vec<Value>,
    },
    InsertNode { node_id: NodeId, value: Value },
    DeleteNode { node_id: NodeId },
    /// Transient highlight of a tree node during a traversal
    TraverseNode { node_id: NodeId },
    VisitNode { node_id: NodeId },
    QueueNode { node_id: NodeId },
    StackNode { node_id: NodeId },
    /// Transient highlight of a graph edge
    ExploreEdge { from: NodeId, to: NodeId },
}

/// Fieldless discriminant of [`StepAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Compare,
    Swap,
    MarkSorted,
    Highlight,
    Pivot,
    Merge,
    InsertNode,
    DeleteNode,
    TraverseNode,
    VisitNode,
    QueueNode,
    StackNode,
    ExploreEdge,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::MarkSorted => "markSorted",
            StepKind::Highlight => "highlight",
            StepKind::Pivot => "pivot",
            StepKind::Merge => "merge",
            StepKind::InsertNode => "insertNode",
            StepKind::DeleteNode => "deleteNode",
            StepKind::TraverseNode => "traverseNode",
            StepKind::VisitNode => "visitNode",
            StepKind::QueueNode => "queueNode",
            StepKind::StackNode => "stackNode",
            StepKind::ExploreEdge => "exploreEdge",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded algorithmic event with its human-readable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub action: StepAction,
    pub description: String,
}

impl Step {
    pub fn new(action: StepAction, description: impl Into<String>) -> Self {
        Step {
            action,
            description: description.into(),
        }
    }

    pub fn kind(&self) -> StepKind {
        match &self.action {
            StepAction::Compare { .. } => StepKind::Compare,
            StepAction::Swap { .. } => StepKind::Swap,
            StepAction::MarkSorted { .. } => StepKind::MarkSorted,
            StepAction::Highlight { .. } => StepKind::Highlight,
            StepAction::Pivot { .. } => StepKind::Pivot,
            StepAction::Merge { .. } => StepKind::Merge,
            StepAction::InsertNode { .. } => StepKind::InsertNode,
            StepAction::DeleteNode { .. } => StepKind::DeleteNode,
            StepAction::TraverseNode { .. } => StepKind::TraverseNode,
            StepAction::VisitNode { .. } => StepKind::VisitNode,
            StepAction::QueueNode { .. } => StepKind::QueueNode,
            StepAction::StackNode { .. } => StepKind::StackNode,
            StepAction::ExploreEdge { .. } => StepKind::ExploreEdge,
        }
    }

    /// Array positions touched by this step (empty for tree and graph steps)
    pub fn indices(&self) -> &[usize] {
        match &self.action {
            StepAction::Compare { indices } | StepAction::Swap { indices } => &indices[..],
            StepAction::MarkSorted { indices }
            | StepAction::Highlight { indices }
            | StepAction::Merge { indices, .. } => indices.as_slice(),
            StepAction::Pivot { index } => std::slice::from_ref(index),
            _ => &[],
        }
    }

    /// Node this step refers to, if any
    pub fn node_id(&self) -> Option<&str> {
        match &self.action {
            StepAction::InsertNode { node_id, .. }
            | StepAction::DeleteNode { node_id }
            | StepAction::TraverseNode { node_id }
            | StepAction::VisitNode { node_id }
            | StepAction::QueueNode { node_id }
            | StepAction::StackNode { node_id } => Some(node_id.as_str()),
            _ => None,
        }
    }

    /// Endpoints of the explored edge, for `exploreEdge` steps
    pub fn edge(&self) -> Option<(&str, &str)> {
        match &self.action {
            StepAction::ExploreEdge { from, to } => Some((from.as_str(), to.as_str())),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind(), self.description)
    }
}
