//! Tick-driven pulse for the bolt preview.

use crate::config::TargetingConfig;

/// Upper bound for both `num_frames` and `ticks_per_frame`.
pub const MAX_ANIMATION_STEPS: u32 = 1024;

/// Phase counter cycling over `num_frames * ticks_per_frame` ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoltAnimation {
    phase: u32,
    num_frames: u32,
    ticks_per_frame: u32,
}

impl BoltAnimation {
    /// Both counts are clamped to `1..=MAX_ANIMATION_STEPS`.
    pub fn new(num_frames: u32, ticks_per_frame: u32) -> Self {
        Self {
            phase: 0,
            num_frames: num_frames.clamp(1, MAX_ANIMATION_STEPS),
            ticks_per_frame: ticks_per_frame.clamp(1, MAX_ANIMATION_STEPS),
        }
    }

    pub fn from_config(config: &TargetingConfig) -> Self {
        Self::new(config.num_frames, config.ticks_per_frame)
    }

    /// Advances one tick. Returns true when the visible frame changed.
    pub fn tick(&mut self) -> bool {
        self.phase = (self.phase + 1) % self.period();
        self.phase % self.ticks_per_frame == 0
    }

    /// Frame index in `0..num_frames`.
    pub fn frame(&self) -> u32 {
        self.phase / self.ticks_per_frame
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn num_frames(&self) -> u32 {
        self.num_frames
    }

    fn period(&self) -> u32 {
        self.num_frames * self.ticks_per_frame
    }
}

impl Default for BoltAnimation {
    fn default() -> Self {
        Self::from_config(&TargetingConfig::default())
    }
}
