//! Error types for step generation, replay and playback
//!
//! This module defines [`VisualizerError`], the single error type surfaced by the
//! core. Every variant is a contract violation: the operation that produced it
//! is abandoned and the derived state is left exactly as it was.
//!
//! Expected boundary interactions (advancing past the last step, retreating
//! before the first, shuffling while playing) are *not* errors. They are
//! reported as ignored outcomes by the operations themselves.

use thiserror::Error;

/// Errors raised by the generators, the replay machine and the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualizerError {
    /// A sorting algorithm was asked to run on an empty array
    #[error("input array must not be empty")]
    EmptyInput,

    /// A step referenced an array position that does not exist
    #[error("step {position}: index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds {
        position: usize,
        index: usize,
        len: usize,
    },

    /// A merge step carried a snapshot whose length differs from the array
    #[error("step {position}: merge snapshot has {got} values, array has {expected}")]
    SnapshotLengthMismatch {
        position: usize,
        expected: usize,
        got: usize,
    },

    /// An insert step reused a node id already present in the tree
    #[error("step {position}: node '{node_id}' is already in the tree")]
    DuplicateNode { position: usize, node_id: String },

    /// A delete step targeted a node id that is not in the tree
    #[error("step {position}: node '{node_id}' is not in the tree")]
    UnknownNode { position: usize, node_id: String },

    /// A step was structurally impossible for reasons not covered above
    #[error("step {position}: {message}")]
    MalformedStep { position: usize, message: String },

    /// Playback speed must be a positive number of milliseconds
    #[error("playback interval must be positive, got {ms} ms")]
    InvalidSpeed { ms: i64 },

    /// An algorithm tag could not be parsed
    #[error("unknown algorithm '{0}' (expected one of bubble, merge, quick, heap, bst, bfs, dfs)")]
    UnknownAlgorithm(String),

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl VisualizerError {
    /// Position of the offending step, for errors raised while replaying
    pub fn step_position(&self) -> Option<usize> {
        match self {
            VisualizerError::IndexOutOfBounds { position, .. }
            | VisualizerError::SnapshotLengthMismatch { position, .. }
            | VisualizerError::DuplicateNode { position, .. }
            | VisualizerError::UnknownNode { position, .. }
            | VisualizerError::MalformedStep { position, .. } => Some(*position),
            VisualizerError::EmptyInput
            | VisualizerError::InvalidSpeed { .. }
            | VisualizerError::UnknownAlgorithm(_)
            | VisualizerError::InvalidConfig(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VisualizerError>;
