//! Runtime configuration for the store and the playback driver

use crate::errors::{Result, VisualizerError};
use crate::snapshot::CheckpointStore;
use crate::step::Value;

/// Array shown before the user supplies one
pub const DEFAULT_INPUT: [Value; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Default delay between playback ticks
pub const DEFAULT_SPEED_MS: u64 = 1000;

/// Bounds and increment used by the shell's speed controls
pub const MIN_SPEED_MS: u64 = 100;
pub const MAX_SPEED_MS: u64 = 2000;
pub const SPEED_STEP_MS: u64 = 100;

/// Capture a checkpoint every this many steps (0 disables checkpoints)
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 32;

/// Memory budget for checkpoints (64 MB)
pub const DEFAULT_CHECKPOINT_MEMORY: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Playback interval in milliseconds
    pub speed_ms: u64,
    pub checkpoint_interval: usize,
    pub checkpoint_memory_limit: usize,
    /// Seed for the shuffle RNG; `None` seeds from the OS
    pub shuffle_seed: Option<u64>,
    pub default_input: Vec<Value>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            speed_ms: DEFAULT_SPEED_MS,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            checkpoint_memory_limit: DEFAULT_CHECKPOINT_MEMORY,
            shuffle_seed: None,
            default_input: DEFAULT_INPUT.to_vec(),
        }
    }
}

impl VisualizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.speed_ms == 0 {
            return Err(VisualizerError::InvalidSpeed { ms: 0 });
        }
        if self.default_input.is_empty() {
            return Err(VisualizerError::InvalidConfig(
                "default input must contain at least one value".to_string(),
            ));
        }
        if self.checkpoint_interval > 0 && self.checkpoint_memory_limit == 0 {
            return Err(VisualizerError::InvalidConfig(
                "checkpoints enabled with a zero memory budget".to_string(),
            ));
        }
        Ok(())
    }

    pub fn checkpoint_store(&self) -> CheckpointStore {
        if self.checkpoint_interval == 0 {
            CheckpointStore::disabled()
        } else {
            CheckpointStore::new(self.checkpoint_interval, self.checkpoint_memory_limit)
        }
    }
}

/// Next faster speed step, bounded by [`MIN_SPEED_MS`]
pub fn faster(speed_ms: u64) -> u64 {
    speed_ms.saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS)
}

/// Next slower speed step, bounded by [`MAX_SPEED_MS`]
pub fn slower(speed_ms: u64) -> u64 {
    speed_ms.saturating_add(SPEED_STEP_MS).min(MAX_SPEED_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(VisualizerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_speed_rejected() {
        let config = VisualizerConfig {
            speed_ms: 0,
            ..VisualizerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(VisualizerError::InvalidSpeed { ms: 0 })
        );
    }

    #[test]
    fn test_speed_steps_are_bounded() {
        assert_eq!(faster(150), 100);
        assert_eq!(faster(1000), 900);
        assert_eq!(slower(1950), 2000);
        assert_eq!(slower(2000), 2000);
    }
}
