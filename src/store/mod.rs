//! The explicit store object handed to the presentation shell
//!
//! [`Store`] owns the selected algorithm, the user's input, the
//! [`ReplayMachine`] and the [`PlaybackDriver`]. [`Store::dispatch`] is the
//! only way to change any of them; the shell reads everything else through
//! the accessors.
//!
//! Steps are generated lazily: selecting an algorithm or changing the input
//! discards the current sequence, and the next `Play`, `Advance` or
//! `JumpToEnd` generates a fresh one.

use crate::config::VisualizerConfig;
use crate::errors::{Result, VisualizerError};
use crate::generators::generate_steps;
use crate::playback::{PlaybackDriver, TickOutcome};
use crate::replay::{ReplayMachine, ReplayPhase, ReplayState};
use crate::step::{Algorithm, Step, Value};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Advance,
    Retreat,
    /// Back to the pristine state, keeping the generated steps
    Reset,
    /// Playback interval in milliseconds; must be positive
    SetSpeed(i64),
    SetInput(Vec<Value>),
    SelectAlgorithm(Algorithm),
    Play,
    Pause,
    TogglePlay,
    Shuffle,
    JumpToStart,
    JumpToEnd,
}

/// Whether a dispatched action changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    Applied,
    /// A boundary interaction such as advancing past the end
    Ignored,
}

impl Dispatched {
    fn from_bool(applied: bool) -> Self {
        if applied {
            Dispatched::Applied
        } else {
            Dispatched::Ignored
        }
    }

    pub fn is_applied(self) -> bool {
        self == Dispatched::Applied
    }
}

#[derive(Debug)]
pub struct Store {
    algorithm: Algorithm,
    input: Vec<Value>,
    machine: ReplayMachine,
    driver: PlaybackDriver,
    rng: StdRng,
}

impl Store {
    pub fn new(config: VisualizerConfig, algorithm: Algorithm) -> Result<Self> {
        config.validate()?;

        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let input = config.default_input.clone();
        let machine = ReplayMachine::new(
            initial_array(algorithm, &input),
            config.checkpoint_store(),
        );

        Ok(Store {
            algorithm,
            input,
            machine,
            driver: PlaybackDriver::new(Duration::from_millis(config.speed_ms)),
            rng,
        })
    }

    /// Apply `action` at the current wall-clock time
    pub fn dispatch(&mut self, action: Action) -> Result<Dispatched> {
        self.dispatch_at(action, Instant::now())
    }

    /// Apply `action` as if it happened at `now`.
    ///
    /// Manual navigation pauses playback. Errors leave the store as it was
    /// before the action, apart from playback having been paused.
    pub fn dispatch_at(&mut self, action: Action, now: Instant) -> Result<Dispatched> {
        debug!(?action, phase = ?self.machine.phase(), "dispatch");

        let outcome = match action {
            Action::Advance => {
                self.driver.cancel();
                self.ensure_generated()?;
                Dispatched::from_bool(self.machine.advance()?)
            }
            Action::Retreat => {
                self.driver.cancel();
                Dispatched::from_bool(self.machine.retreat()?)
            }
            Action::Reset => {
                let was_playing = self.driver.cancel();
                let was_empty = self.machine.phase() == ReplayPhase::Empty;
                let moved = !self.machine.state().is_pristine();
                self.ensure_generated()?;
                self.machine.reset();
                Dispatched::from_bool(was_playing || was_empty || moved)
            }
            Action::JumpToStart => {
                self.driver.cancel();
                if self.machine.state().is_pristine() {
                    Dispatched::Ignored
                } else {
                    self.machine.reset();
                    Dispatched::Applied
                }
            }
            Action::JumpToEnd => {
                self.driver.cancel();
                self.ensure_generated()?;
                match self.machine.phase() {
                    ReplayPhase::Empty | ReplayPhase::Complete => Dispatched::Ignored,
                    _ => {
                        self.machine.seek_to_end()?;
                        Dispatched::Applied
                    }
                }
            }
            Action::SetSpeed(ms) => {
                self.driver.set_interval(ms, now)?;
                info!(speed_ms = ms, "playback speed changed");
                Dispatched::Applied
            }
            Action::SetInput(values) => {
                if values.is_empty() {
                    return Err(VisualizerError::EmptyInput);
                }
                self.driver.cancel();
                self.input = values;
                self.discard_steps();
                Dispatched::Applied
            }
            Action::SelectAlgorithm(algorithm) => {
                if algorithm == self.algorithm {
                    Dispatched::Ignored
                } else {
                    self.driver.cancel();
                    self.algorithm = algorithm;
                    self.discard_steps();
                    info!(algorithm = algorithm.tag(), "algorithm selected");
                    Dispatched::Applied
                }
            }
            Action::Play => self.play(now)?,
            Action::Pause => Dispatched::from_bool(self.driver.cancel()),
            Action::TogglePlay => {
                if self.driver.is_playing() {
                    Dispatched::from_bool(self.driver.cancel())
                } else {
                    self.play(now)?
                }
            }
            Action::Shuffle => {
                if self.driver.is_playing() || !self.algorithm.uses_input() {
                    Dispatched::Ignored
                } else {
                    self.input.shuffle(&mut self.rng);
                    self.discard_steps();
                    debug!(input = ?self.input, "input shuffled");
                    Dispatched::Applied
                }
            }
        };

        Ok(outcome)
    }

    /// Let the playback timer fire if it is due
    pub fn tick(&mut self, now: Instant) -> Result<TickOutcome> {
        self.driver.tick(now, &mut self.machine)
    }

    fn play(&mut self, now: Instant) -> Result<Dispatched> {
        self.ensure_generated()?;
        match self.machine.phase() {
            ReplayPhase::Empty | ReplayPhase::Complete => Ok(Dispatched::Ignored),
            _ => {
                self.driver.start(now);
                Ok(Dispatched::Applied)
            }
        }
    }

    fn ensure_generated(&mut self) -> Result<()> {
        if self.machine.phase() != ReplayPhase::Empty {
            return Ok(());
        }
        let steps = generate_steps(self.algorithm, &self.input)?;
        let count = steps.len();
        self.machine.load(steps)?;
        info!(algorithm = self.algorithm.tag(), steps = count, "steps generated");
        Ok(())
    }

    fn discard_steps(&mut self) {
        self.machine
            .clear(initial_array(self.algorithm, &self.input));
    }

    pub fn state(&self) -> &ReplayState {
        self.machine.state()
    }

    pub fn machine(&self) -> &ReplayMachine {
        &self.machine
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn input(&self) -> &[Value] {
        &self.input
    }

    pub fn speed_ms(&self) -> u64 {
        u64::try_from(self.driver.interval().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn is_playing(&self) -> bool {
        self.driver.is_playing()
    }

    pub fn phase(&self) -> ReplayPhase {
        self.machine.phase()
    }

    pub fn position(&self) -> Option<usize> {
        self.machine.position()
    }

    pub fn step_count(&self) -> usize {
        self.machine.len()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.machine.current_step()
    }

    /// Description of the most recently applied step
    pub fn description(&self) -> Option<&str> {
        self.current_step().map(|s| s.description.as_str())
    }

    /// Time until the playback timer is next due, if playing
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.driver.time_until_due(now)
    }
}

/// Array the machine starts from; tree and graph demonstrations have none
fn initial_array(algorithm: Algorithm, input: &[Value]) -> Vec<Value> {
    if algorithm.uses_input() {
        input.to_vec()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(algorithm: Algorithm) -> Store {
        let config = VisualizerConfig {
            shuffle_seed: Some(7),
            ..VisualizerConfig::default()
        };
        Store::new(config, algorithm).unwrap()
    }

    #[test]
    fn test_advance_generates_lazily() {
        let mut store = store(Algorithm::Bubble);
        assert_eq!(store.phase(), ReplayPhase::Empty);
        assert_eq!(store.dispatch(Action::Advance), Ok(Dispatched::Applied));
        assert_eq!(store.position(), Some(0));
        assert_eq!(store.description(), Some("Compare 64 and 34"));
    }

    #[test]
    fn test_select_algorithm_discards_steps() {
        let mut store = store(Algorithm::Bubble);
        store.dispatch(Action::Advance).unwrap();
        assert_eq!(
            store.dispatch(Action::SelectAlgorithm(Algorithm::Bubble)),
            Ok(Dispatched::Ignored)
        );
        assert_eq!(
            store.dispatch(Action::SelectAlgorithm(Algorithm::Bfs)),
            Ok(Dispatched::Applied)
        );
        assert_eq!(store.phase(), ReplayPhase::Empty);
        assert!(store.state().array.is_empty());
    }

    #[test]
    fn test_empty_input_rejected() {
        let mut store = store(Algorithm::Quick);
        assert_eq!(
            store.dispatch(Action::SetInput(Vec::new())),
            Err(VisualizerError::EmptyInput)
        );
        assert_eq!(store.input(), &[64, 34, 25, 12, 22, 11, 90]);
    }

    #[test]
    fn test_reset_from_empty_loads_steps() {
        let mut store = store(Algorithm::Heap);
        assert_eq!(store.phase(), ReplayPhase::Empty);
        assert_eq!(store.dispatch(Action::Reset), Ok(Dispatched::Applied));
        assert_eq!(store.phase(), ReplayPhase::Ready);
        assert!(store.step_count() > 0);
        assert_eq!(store.position(), None);
        assert_eq!(store.dispatch(Action::Reset), Ok(Dispatched::Ignored));
    }

    #[test]
    fn test_shuffle_ignored_for_fixed_demonstrations() {
        let mut store = store(Algorithm::Dfs);
        assert_eq!(store.dispatch(Action::Shuffle), Ok(Dispatched::Ignored));
    }
}
