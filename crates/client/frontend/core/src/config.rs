//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

use crate::services::targeting::MAX_ANIMATION_STEPS;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub targeting: TargetingConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TARGET_NUM_FRAMES` - Bolt animation frame count (default: 5)
    /// - `TARGET_TICKS_PER_FRAME` - Ticks each bolt frame is held (default: 5)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(frames) = parse(&lookup, "TARGET_NUM_FRAMES") {
            config.targeting.num_frames = frames;
        }
        if let Some(ticks) = parse(&lookup, "TARGET_TICKS_PER_FRAME") {
            config.targeting.ticks_per_frame = ticks;
        }
        if let Some(capacity) = parse::<usize>(&lookup, "CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity;
        }

        config.normalized()
    }

    fn normalized(mut self) -> Self {
        self.targeting.num_frames = self.targeting.num_frames.clamp(1, MAX_ANIMATION_STEPS);
        self.targeting.ticks_per_frame = self
            .targeting
            .ticks_per_frame
            .clamp(1, MAX_ANIMATION_STEPS);
        self.messages.capacity = self.messages.capacity.max(1);
        self
    }
}

/// Timing of the bolt preview animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetingConfig {
    pub num_frames: u32,
    pub ticks_per_frame: u32,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            num_frames: 5,
            ticks_per_frame: 5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
