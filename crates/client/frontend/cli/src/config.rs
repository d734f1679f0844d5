//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

use game_core::Range;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Reach of the fire-bolt command.
    pub bolt_range: Range,
    /// Reach of the throw command.
    pub throw_range: Range,
    /// Optional ASCII stage file; the built-in stage is used when unset.
    pub stage_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            bolt_range: Range::new(8),
            throw_range: Range::new(5),
            stage_path: None,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8, min: 3)
    /// - `CLI_TICK_INTERVAL_MS` - Animation tick interval in milliseconds (default: 40)
    /// - `DUNGEON_BOLT_RANGE` - Fire-bolt range in tiles (default: 8)
    /// - `DUNGEON_THROW_RANGE` - Throw range in tiles (default: 5)
    /// - `DUNGEON_STAGE` - Path to an ASCII stage file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).and_then(|value| value.trim().parse::<u32>().ok());
        let mut config = Self::default();

        if let Some(height) = lookup("CLI_MESSAGE_PANEL_HEIGHT").and_then(|v| v.parse::<u16>().ok())
        {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(interval) = lookup("CLI_TICK_INTERVAL_MS").and_then(|v| v.parse::<u64>().ok())
        {
            config.ui.tick_interval_ms = interval.max(1);
        }
        if let Some(range) = read("DUNGEON_BOLT_RANGE") {
            config.bolt_range = Range::new(range);
        }
        if let Some(range) = read("DUNGEON_THROW_RANGE") {
            config.throw_range = Range::new(range);
        }
        if let Some(path) = lookup("DUNGEON_STAGE").filter(|path| !path.is_empty()) {
            config.stage_path = Some(PathBuf::from(path));
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Period of the animation tick driving targeting dialogs.
    pub tick_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            tick_interval_ms: 40,
        }
    }
}
