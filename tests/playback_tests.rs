// Integration tests for the playback timer, driven with synthetic instants

use algoscope::errors::VisualizerError;
use algoscope::generators::generate_steps;
use algoscope::playback::{PlaybackDriver, TickOutcome};
use algoscope::replay::{ReplayMachine, ReplayPhase};
use algoscope::snapshot::CheckpointStore;
use algoscope::step::Algorithm;
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_millis(100);

fn bubble_machine(input: &[i64]) -> ReplayMachine {
    let mut machine = ReplayMachine::new(input.to_vec(), CheckpointStore::disabled());
    machine
        .load(generate_steps(Algorithm::Bubble, input).unwrap())
        .unwrap();
    machine
}

#[test]
fn test_tick_waits_for_interval() {
    let t0 = Instant::now();
    let mut machine = bubble_machine(&[3, 1, 2]);
    let mut driver = PlaybackDriver::new(INTERVAL);

    assert_eq!(driver.tick(t0, &mut machine), Ok(TickOutcome::Idle));

    driver.start(t0);
    assert_eq!(driver.tick(t0, &mut machine), Ok(TickOutcome::Idle));
    assert_eq!(
        driver.tick(t0 + INTERVAL / 2, &mut machine),
        Ok(TickOutcome::Idle)
    );
    assert_eq!(machine.position(), None);

    assert_eq!(
        driver.tick(t0 + INTERVAL, &mut machine),
        Ok(TickOutcome::Advanced)
    );
    assert_eq!(machine.position(), Some(0));
    assert_eq!(driver.time_until_due(t0 + INTERVAL), Some(INTERVAL));
}

#[test]
fn test_late_tick_advances_only_once() {
    let t0 = Instant::now();
    let mut machine = bubble_machine(&[3, 1, 2]);
    let mut driver = PlaybackDriver::new(INTERVAL);
    driver.start(t0);

    assert_eq!(
        driver.tick(t0 + INTERVAL * 10, &mut machine),
        Ok(TickOutcome::Advanced)
    );
    assert_eq!(machine.position(), Some(0));
}

#[test]
fn test_auto_pause_at_last_step() {
    let t0 = Instant::now();
    let mut machine = bubble_machine(&[2, 1]);
    let total = machine.len();
    let mut driver = PlaybackDriver::new(INTERVAL);
    driver.start(t0);

    let mut now = t0;
    let mut outcomes = Vec::new();
    for _ in 0..total {
        now += INTERVAL;
        outcomes.push(driver.tick(now, &mut machine).unwrap());
    }

    assert_eq!(outcomes.last(), Some(&TickOutcome::Completed));
    assert!(outcomes[..total - 1]
        .iter()
        .all(|o| *o == TickOutcome::Advanced));
    assert_eq!(machine.phase(), ReplayPhase::Complete);
    assert!(!driver.is_playing());

    // Nothing fires once paused
    assert_eq!(
        driver.tick(now + INTERVAL, &mut machine),
        Ok(TickOutcome::Idle)
    );
}

#[test]
fn test_restart_keeps_a_single_timer() {
    let t0 = Instant::now();
    let mut machine = bubble_machine(&[3, 1, 2]);
    let mut driver = PlaybackDriver::new(INTERVAL);

    let first = driver.start(t0);
    let second = driver.start(t0 + INTERVAL / 2);
    assert_ne!(first, second);
    assert_eq!(driver.timer_id(), Some(second));

    // The first timer's due time passes without a tick
    assert_eq!(
        driver.tick(t0 + INTERVAL, &mut machine),
        Ok(TickOutcome::Idle)
    );
    assert_eq!(
        driver.tick(t0 + INTERVAL + INTERVAL / 2, &mut machine),
        Ok(TickOutcome::Advanced)
    );
    assert_eq!(machine.position(), Some(0));
}

#[test]
fn test_cancel_discards_pending_tick() {
    let t0 = Instant::now();
    let mut machine = bubble_machine(&[3, 1, 2]);
    let mut driver = PlaybackDriver::new(INTERVAL);
    driver.start(t0);

    assert!(driver.cancel());
    assert_eq!(
        driver.tick(t0 + INTERVAL, &mut machine),
        Ok(TickOutcome::Idle)
    );
    assert_eq!(machine.position(), None);
}

#[test]
fn test_non_positive_speed_rejected() {
    let t0 = Instant::now();
    let mut driver = PlaybackDriver::new(INTERVAL);
    for ms in [0, -1, -1000] {
        assert_eq!(
            driver.set_interval(ms, t0),
            Err(VisualizerError::InvalidSpeed { ms })
        );
    }
    assert_eq!(driver.interval(), INTERVAL);
}

#[test]
fn test_speed_change_restarts_running_timer() {
    let t0 = Instant::now();
    let mut machine = bubble_machine(&[3, 1, 2]);
    let mut driver = PlaybackDriver::new(INTERVAL);
    driver.start(t0);

    let later = t0 + INTERVAL / 2;
    driver.set_interval(300, later).unwrap();
    assert_eq!(driver.time_until_due(later), Some(Duration::from_millis(300)));

    assert_eq!(
        driver.tick(t0 + INTERVAL, &mut machine),
        Ok(TickOutcome::Idle)
    );
    assert_eq!(
        driver.tick(later + Duration::from_millis(300), &mut machine),
        Ok(TickOutcome::Advanced)
    );
}

#[test]
fn test_tick_on_empty_machine_completes() {
    let t0 = Instant::now();
    let mut machine = ReplayMachine::new(vec![1], CheckpointStore::disabled());
    let mut driver = PlaybackDriver::new(INTERVAL);
    driver.start(t0);

    assert_eq!(
        driver.tick(t0 + INTERVAL, &mut machine),
        Ok(TickOutcome::Completed)
    );
    assert!(!driver.is_playing());
}
