//! Application state for mode management.

use crate::command::RangedKind;

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Map view; ranged commands open a targeting dialog.
    Normal,
    /// A targeting dialog is pushed over the map.
    Targeting(RangedKind),
}

/// Mode stack: `Normal` at the bottom, at most one dialog on top.
#[derive(Clone, Debug)]
pub struct AppState {
    stack: Vec<AppMode>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode currently receiving input.
    pub fn mode(&self) -> AppMode {
        self.stack.last().copied().unwrap_or(AppMode::Normal)
    }

    /// Pushes a targeting screen. Returns false if one is already open.
    pub fn push_targeting(&mut self, kind: RangedKind) -> bool {
        if self.is_modal() {
            return false;
        }
        self.stack.push(AppMode::Targeting(kind));
        true
    }

    /// Pops the top screen, never removing `Normal`.
    pub fn pop(&mut self) -> AppMode {
        if self.stack.len() > 1 {
            self.stack.pop().unwrap_or(AppMode::Normal)
        } else {
            AppMode::Normal
        }
    }

    /// Returns true if currently in a modal mode requiring manual input.
    pub fn is_modal(&self) -> bool {
        !matches!(self.mode(), AppMode::Normal)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            stack: vec![AppMode::Normal],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_normal() {
        let state = AppState::new();
        assert_eq!(state.mode(), AppMode::Normal);
        assert!(!state.is_modal());
    }

    #[test]
    fn push_and_pop_targeting() {
        let mut state = AppState::new();
        assert!(state.push_targeting(RangedKind::Bolt));
        assert_eq!(state.mode(), AppMode::Targeting(RangedKind::Bolt));
        assert!(state.is_modal());

        // Only one dialog at a time.
        assert!(!state.push_targeting(RangedKind::Throw));

        assert_eq!(state.pop(), AppMode::Targeting(RangedKind::Bolt));
        assert_eq!(state.mode(), AppMode::Normal);
    }

    #[test]
    fn pop_keeps_normal_at_bottom() {
        let mut state = AppState::new();
        assert_eq!(state.pop(), AppMode::Normal);
        assert_eq!(state.mode(), AppMode::Normal);
    }
}
