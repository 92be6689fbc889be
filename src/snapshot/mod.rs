// Checkpoint management for backward navigation

use crate::replay::ReplayState;
use tracing::warn;

/// Estimate the memory usage of a derived state in bytes
pub fn estimated_size(state: &ReplayState) -> usize {
    // This is a rough estimate
    // Array and index sets: one word per entry
    let word = std::mem::size_of::<usize>();
    let array_size = state.array.len() * word;
    let set_size = (state.sorted_indices.len()
        + state.compare_indices.len()
        + state.highlight_indices.len())
        * word;

    // Tree nodes and node ids: assume 64 bytes each on average
    let node_count =
        state.tree.len() + state.visited_nodes.len() + state.queue.len() + state.stack.len();

    std::mem::size_of::<ReplayState>() + array_size + set_size + node_count * 64
}

/// Derived states captured every `interval` steps while a sequence is loaded.
///
/// Retreating restores the nearest checkpoint at or before the target and
/// replays forward from there. Checkpoints are an optimization only: replay
/// from a checkpoint yields the same state as replay from the initial
/// snapshot, so running out of budget simply stops capturing.
#[derive(Debug)]
pub struct CheckpointStore {
    interval: usize,
    checkpoints: Vec<ReplayState>,
    max_memory: usize,
    current_memory: usize,
}

impl CheckpointStore {
    pub fn new(interval: usize, max_memory: usize) -> Self {
        CheckpointStore {
            interval,
            checkpoints: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// A store that never captures; every retreat replays from the start
    pub fn disabled() -> Self {
        CheckpointStore::new(0, 0)
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    /// Whether the state reached after applying step `position` is captured
    pub fn should_capture(&self, position: usize) -> bool {
        self.interval > 0 && (position + 1) % self.interval == 0
    }

    /// Add a checkpoint. States must be pushed in ascending position order.
    ///
    /// Returns `false` (and keeps nothing) once the memory budget is spent.
    pub fn push(&mut self, state: ReplayState) -> bool {
        let size = estimated_size(&state);

        if self.current_memory.saturating_add(size) > self.max_memory {
            warn!(
                current = self.current_memory,
                size,
                limit = self.max_memory,
                "checkpoint memory budget exhausted; falling back to longer replays"
            );
            return false;
        }

        self.current_memory += size;
        self.checkpoints.push(state);
        true
    }

    /// The latest checkpoint whose position is at or before `target`
    pub fn nearest(&self, target: usize) -> Option<&ReplayState> {
        let idx = self
            .checkpoints
            .partition_point(|s| s.position.is_some_and(|p| p <= target));
        idx.checked_sub(1).and_then(|i| self.checkpoints.get(i))
    }

    pub fn clear(&mut self) {
        self.checkpoints.clear();
        self.current_memory = 0;
    }

    /// Get the number of checkpoints
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
