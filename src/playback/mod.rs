//! Cooperative playback timer
//!
//! [`PlaybackDriver`] models a single repeating timer. The owner calls
//! [`PlaybackDriver::tick`] from its event loop with the current time; when
//! the timer is due the driver issues exactly one `advance` on the replay
//! machine and reschedules itself. Time is always passed in, so the driver
//! itself never reads a clock.
//!
//! At most one timer exists at a time. Starting playback while a timer is
//! active cancels it first, and cancelling discards any pending tick.

use crate::errors::{Result, VisualizerError};
use crate::replay::{ReplayMachine, ReplayPhase};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// What a call to [`PlaybackDriver::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing, or the timer is not due yet
    Idle,
    /// One step was applied and the timer was rescheduled
    Advanced,
    /// The sequence reached its last step and playback paused itself
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    id: u64,
    due: Instant,
}

#[derive(Debug)]
pub struct PlaybackDriver {
    interval: Duration,
    timer: Option<Timer>,
    timers_started: u64,
}

/// Convert a caller-supplied interval, rejecting anything not positive
pub fn interval_from_ms(ms: i64) -> Result<Duration> {
    match u64::try_from(ms) {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(VisualizerError::InvalidSpeed { ms }),
    }
}

impl PlaybackDriver {
    pub fn new(interval: Duration) -> Self {
        PlaybackDriver {
            interval,
            timer: None,
            timers_started: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the tick interval. A running timer is restarted so the new
    /// interval applies from `now`.
    pub fn set_interval(&mut self, ms: i64, now: Instant) -> Result<()> {
        self.interval = interval_from_ms(ms)?;
        if self.is_playing() {
            self.start(now);
        }
        Ok(())
    }

    /// Start the timer, replacing any active one. Returns the new timer id.
    pub fn start(&mut self, now: Instant) -> u64 {
        self.cancel();
        self.timers_started += 1;
        let id = self.timers_started;
        self.timer = Some(Timer {
            id,
            due: now + self.interval,
        });
        debug!(timer = id, interval_ms = self.interval.as_millis() as u64, "playback timer started");
        id
    }

    /// Tear down the active timer. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                debug!(timer = timer.id, "playback timer cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Id of the active timer, if any
    pub fn timer_id(&self) -> Option<u64> {
        self.timer.map(|t| t.id)
    }

    /// How long until the next tick is due (zero if overdue)
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.timer.map(|t| t.due.saturating_duration_since(now))
    }

    /// Fire the timer if it is due.
    ///
    /// A due tick advances `machine` by one step. Reaching the last step, or
    /// finding nothing to advance, cancels the timer. A replay error also
    /// cancels the timer before it is returned.
    pub fn tick(&mut self, now: Instant, machine: &mut ReplayMachine) -> Result<TickOutcome> {
        let Some(timer) = self.timer else {
            return Ok(TickOutcome::Idle);
        };
        if now < timer.due {
            return Ok(TickOutcome::Idle);
        }

        let advanced = match machine.advance() {
            Ok(advanced) => advanced,
            Err(e) => {
                self.cancel();
                return Err(e);
            }
        };

        if !advanced || machine.phase() == ReplayPhase::Complete {
            self.cancel();
            info!(position = ?machine.position(), "playback complete");
            return Ok(TickOutcome::Completed);
        }

        self.timer = Some(Timer {
            id: timer.id,
            due: now + self.interval,
        });
        Ok(TickOutcome::Advanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_must_be_positive() {
        assert_eq!(interval_from_ms(250), Ok(Duration::from_millis(250)));
        assert_eq!(
            interval_from_ms(0),
            Err(VisualizerError::InvalidSpeed { ms: 0 })
        );
        assert_eq!(
            interval_from_ms(-40),
            Err(VisualizerError::InvalidSpeed { ms: -40 })
        );
    }

    #[test]
    fn test_start_replaces_active_timer() {
        let now = Instant::now();
        let mut driver = PlaybackDriver::new(Duration::from_millis(100));
        let first = driver.start(now);
        let second = driver.start(now);
        assert_ne!(first, second);
        assert_eq!(driver.timer_id(), Some(second));
        assert!(driver.cancel());
        assert!(!driver.cancel());
    }

    #[test]
    fn test_rejected_interval_keeps_previous() {
        let now = Instant::now();
        let mut driver = PlaybackDriver::new(Duration::from_millis(100));
        assert!(driver.set_interval(0, now).is_err());
        assert_eq!(driver.interval(), Duration::from_millis(100));
    }
}
