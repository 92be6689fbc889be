// Replay state machine: position bookkeeping over an immutable step sequence

use super::state::ReplayState;
use crate::errors::Result;
use crate::snapshot::CheckpointStore;
use crate::step::{Step, Value};
use tracing::{debug, trace};

/// Lifecycle of a loaded sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayPhase {
    /// No steps generated
    Empty,
    /// Steps loaded, nothing applied yet
    Ready,
    /// At least one step applied, more remain
    InProgress,
    /// The last step has been applied
    Complete,
}

/// Holds the initial snapshot, the step sequence and the derived state for
/// the current position.
///
/// Forward navigation applies one step. Backward navigation never inverts a
/// step (`merge` and `markSorted` are not invertible); it rebuilds the state
/// by replaying from the nearest checkpoint, or from the initial snapshot.
#[derive(Debug)]
pub struct ReplayMachine {
    initial: ReplayState,
    steps: Vec<Step>,
    current: ReplayState,
    checkpoints: CheckpointStore,
}

impl ReplayMachine {
    pub fn new(initial_array: Vec<Value>, checkpoints: CheckpointStore) -> Self {
        let initial = ReplayState::initial(initial_array);
        ReplayMachine {
            current: initial.clone(),
            initial,
            steps: Vec::new(),
            checkpoints,
        }
    }

    /// Discard the loaded sequence and start over from a new input (`Empty`)
    pub fn clear(&mut self, initial_array: Vec<Value>) {
        self.initial = ReplayState::initial(initial_array);
        self.current = self.initial.clone();
        self.steps.clear();
        self.checkpoints.clear();
    }

    /// Load a freshly generated sequence and move to `Ready`.
    ///
    /// The whole sequence is replayed once against the initial snapshot
    /// before it is accepted; if any step is a contract violation the error
    /// is returned and the machine keeps its previous sequence and position.
    pub fn load(&mut self, steps: Vec<Step>) -> Result<()> {
        let mut checkpoints =
            CheckpointStore::new(self.checkpoints.interval(), self.checkpoints.memory_limit());
        let mut scratch = self.initial.clone();
        let mut capturing = true;

        for (position, step) in steps.iter().enumerate() {
            scratch.apply_step_forward(step)?;
            if capturing && checkpoints.should_capture(position) {
                capturing = checkpoints.push(scratch.clone());
            }
        }

        debug!(
            steps = steps.len(),
            checkpoints = checkpoints.len(),
            "loaded step sequence"
        );

        self.steps = steps;
        self.checkpoints = checkpoints;
        self.current = self.initial.clone();
        Ok(())
    }

    pub fn phase(&self) -> ReplayPhase {
        match self.current.position {
            _ if self.steps.is_empty() => ReplayPhase::Empty,
            None => ReplayPhase::Ready,
            Some(p) if p + 1 >= self.steps.len() => ReplayPhase::Complete,
            Some(_) => ReplayPhase::InProgress,
        }
    }

    /// Apply the next step. Returns `false` without changing anything when
    /// there is no next step.
    pub fn advance(&mut self) -> Result<bool> {
        let next = self.current.next_position();
        let Some(step) = self.steps.get(next) else {
            return Ok(false);
        };

        self.current.apply_step_forward(step)?;
        trace!(position = next, kind = %step.kind(), "advanced");
        Ok(true)
    }

    /// Step back by one. Returns `false` at the pristine state.
    pub fn retreat(&mut self) -> Result<bool> {
        match self.current.position {
            None => Ok(false),
            Some(0) => {
                self.current = self.initial.clone();
                trace!("retreated to initial state");
                Ok(true)
            }
            Some(p) => {
                self.current = self.replay_to(p - 1)?;
                trace!(position = p - 1, "retreated");
                Ok(true)
            }
        }
    }

    /// Return to the pristine initial state, keeping the sequence
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }

    /// Jump to `target` (`None` is the pristine state). Targets past the
    /// last step clamp to it.
    pub fn seek(&mut self, target: Option<usize>) -> Result<()> {
        let Some(target) = target else {
            self.reset();
            return Ok(());
        };
        let Some(last) = self.steps.len().checked_sub(1) else {
            return Ok(());
        };
        let target = target.min(last);
        if self.current.position != Some(target) {
            self.current = self.replay_to(target)?;
            trace!(position = target, "seeked");
        }
        Ok(())
    }

    /// Jump to the last step (no-op when nothing is loaded)
    pub fn seek_to_end(&mut self) -> Result<()> {
        self.seek(Some(usize::MAX))
    }

    /// Rebuild the state at `target` from the nearest checkpoint.
    ///
    /// `target` must be a valid step index.
    fn replay_to(&self, target: usize) -> Result<ReplayState> {
        let mut state = self
            .checkpoints
            .nearest(target)
            .cloned()
            .unwrap_or_else(|| self.initial.clone());

        let start = state.next_position();
        for step in &self.steps[start..=target] {
            state.apply_step_forward(step)?;
        }
        Ok(state)
    }

    pub fn state(&self) -> &ReplayState {
        &self.current
    }

    pub fn initial_state(&self) -> &ReplayState {
        &self.initial
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn position(&self) -> Option<usize> {
        self.current.position
    }

    /// The most recently applied step
    pub fn current_step(&self) -> Option<&Step> {
        self.current.position.and_then(|p| self.steps.get(p))
    }

    pub fn checkpoints(&self) -> &CheckpointStore {
        &self.checkpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VisualizerError;
    use crate::step::StepAction;

    fn swap(a: usize, b: usize) -> Step {
        Step::new(StepAction::Swap { indices: [a, b] }, format!("swap {a} {b}"))
    }

    fn machine_with(steps: Vec<Step>) -> ReplayMachine {
        let mut machine = ReplayMachine::new(vec![1, 2, 3], CheckpointStore::disabled());
        machine.load(steps).unwrap();
        machine
    }

    #[test]
    fn test_phase_transitions() {
        let mut machine = ReplayMachine::new(vec![1, 2, 3], CheckpointStore::disabled());
        assert_eq!(machine.phase(), ReplayPhase::Empty);
        assert!(!machine.advance().unwrap());

        machine.load(vec![swap(0, 1), swap(1, 2)]).unwrap();
        assert_eq!(machine.phase(), ReplayPhase::Ready);

        assert!(machine.advance().unwrap());
        assert_eq!(machine.phase(), ReplayPhase::InProgress);
        assert!(machine.advance().unwrap());
        assert_eq!(machine.phase(), ReplayPhase::Complete);
        assert!(!machine.advance().unwrap());
        assert_eq!(machine.state().array, vec![2, 3, 1]);

        machine.reset();
        assert_eq!(machine.phase(), ReplayPhase::Ready);
        assert_eq!(machine.state().array, vec![1, 2, 3]);
    }

    #[test]
    fn test_retreat_is_noop_at_start() {
        let mut machine = machine_with(vec![swap(0, 1)]);
        assert!(!machine.retreat().unwrap());
        assert!(machine.advance().unwrap());
        assert!(machine.retreat().unwrap());
        assert_eq!(machine.state(), machine.initial_state());
    }

    #[test]
    fn test_invalid_sequence_rejected_on_load() {
        let mut machine = machine_with(vec![swap(0, 1)]);
        machine.advance().unwrap();

        let err = machine.load(vec![swap(0, 1), swap(2, 7)]).unwrap_err();
        assert_eq!(
            err,
            VisualizerError::IndexOutOfBounds {
                position: 1,
                index: 7,
                len: 3
            }
        );
        // Previous sequence and position survive
        assert_eq!(machine.len(), 1);
        assert_eq!(machine.position(), Some(0));
    }

    #[test]
    fn test_checkpointed_retreat_matches_full_replay() {
        let steps: Vec<Step> = (0..20).map(|i| swap(i % 3, (i + 1) % 3)).collect();

        let mut plain = ReplayMachine::new(vec![1, 2, 3], CheckpointStore::disabled());
        plain.load(steps.clone()).unwrap();
        let mut cached = ReplayMachine::new(vec![1, 2, 3], CheckpointStore::new(4, usize::MAX));
        cached.load(steps).unwrap();
        assert_eq!(cached.checkpoints().len(), 5);

        plain.seek_to_end().unwrap();
        cached.seek_to_end().unwrap();
        for _ in 0..20 {
            plain.retreat().unwrap();
            cached.retreat().unwrap();
            assert_eq!(plain.state(), cached.state());
        }
        assert_eq!(cached.phase(), ReplayPhase::Ready);
    }
}
