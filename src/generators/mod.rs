//! Algorithm step generators
//!
//! Each generator runs its algorithm to completion ahead of time and returns
//! the full, immutable [`Step`] sequence:
//!
//! - [`sorting`]: bubble, merge, quick (Lomuto) and heap sort over the
//!   caller's array, on a private working copy
//! - [`tree`]: the canonical binary search tree insertion and in-order walk
//! - [`graph`]: breadth-first and depth-first traversal of the fixed
//!   demonstration graph
//!
//! Generation is synchronous and side-effect free; the caller's input is
//! never mutated.

pub mod graph;
pub mod sorting;
pub mod tree;

use crate::errors::{Result, VisualizerError};
use crate::step::{Algorithm, Step, Value};
use tracing::debug;

pub use graph::Graph;

/// Produce the full step sequence for `algorithm`.
///
/// Sorting algorithms require a non-empty `input`. Tree and graph
/// algorithms replay a fixed canonical sequence and ignore `input`.
pub fn generate_steps(algorithm: Algorithm, input: &[Value]) -> Result<Vec<Step>> {
    if algorithm.uses_input() && input.is_empty() {
        return Err(VisualizerError::EmptyInput);
    }

    let steps = match algorithm {
        Algorithm::Bubble => sorting::bubble_sort(input)?,
        Algorithm::Merge => sorting::merge_sort(input)?,
        Algorithm::Quick => sorting::quick_sort(input)?,
        Algorithm::Heap => sorting::heap_sort(input)?,
        Algorithm::Bst => tree::bst_steps(),
        Algorithm::Bfs => graph::bfs_steps(&Graph::demo(), graph::DEMO_START),
        Algorithm::Dfs => graph::dfs_steps(&Graph::demo(), graph::DEMO_START),
    };

    debug!(
        algorithm = algorithm.tag(),
        input_len = input.len(),
        steps = steps.len(),
        "generated steps"
    );
    Ok(steps)
}
