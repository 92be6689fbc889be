//! Deterministic replay of a generated step sequence
//!
//! - [`state`]: [`ReplayState`], the derived visual snapshot, and the
//!   single-step transition [`ReplayState::apply_step_forward`]
//! - [`tree`]: the owned binary search tree rebuilt by BST steps
//! - [`machine`]: [`ReplayMachine`], which tracks the current position and
//!   navigates forward by applying a step and backward by replaying a prefix
//!
//! # Determinism
//!
//! Replaying the same prefix from the same initial input always yields an
//! equal [`ReplayState`]. Checkpoints kept by the machine are states reached
//! through exactly that replay, so restoring one never changes the result.

pub mod machine;
pub mod state;
pub mod tree;

pub use machine::{ReplayMachine, ReplayPhase};
pub use state::ReplayState;
pub use tree::{BinaryTree, TreeNode};
