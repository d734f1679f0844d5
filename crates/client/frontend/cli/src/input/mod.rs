//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::targeting::TargetInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Direction;

use crate::command::RangedKind;
use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Open a targeting dialog for a ranged command.
    OpenTargeting(RangedKind),
    /// Forward an input to the active targeting dialog.
    Target(TargetInput),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the current mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode) -> KeyAction {
        // Raw mode swallows SIGINT.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            AppMode::Normal => self.handle_normal(key),
            AppMode::Targeting(_) => self
                .decode_targeting(key)
                .map_or(KeyAction::None, KeyAction::Target),
        }
    }

    fn handle_normal(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'f' => KeyAction::OpenTargeting(RangedKind::Bolt),
                't' => KeyAction::OpenTargeting(RangedKind::Throw),
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    /// Maps a key to the device-independent targeting alphabet.
    fn decode_targeting(&self, key: KeyEvent) -> Option<TargetInput> {
        let input = match key.code {
            KeyCode::Enter => TargetInput::Confirm,
            KeyCode::Esc => TargetInput::Cancel,
            KeyCode::Left => TargetInput::Direction(Direction::West),
            KeyCode::Right => TargetInput::Direction(Direction::East),
            KeyCode::Up => TargetInput::Direction(Direction::North),
            KeyCode::Down => TargetInput::Direction(Direction::South),
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'f' | 't' => TargetInput::Confirm,
                'q' => TargetInput::Cancel,
                'h' => TargetInput::Direction(Direction::West),
                'j' => TargetInput::Direction(Direction::South),
                'k' => TargetInput::Direction(Direction::North),
                'l' => TargetInput::Direction(Direction::East),
                'y' => TargetInput::Direction(Direction::NorthWest),
                'u' => TargetInput::Direction(Direction::NorthEast),
                'b' => TargetInput::Direction(Direction::SouthWest),
                'n' => TargetInput::Direction(Direction::SouthEast),
                _ => return None,
            },
            _ => return None,
        };
        Some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    const TARGETING: AppMode = AppMode::Targeting(RangedKind::Bolt);

    #[test]
    fn normal_mode_opens_dialogs_and_quits() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('f')), &AppMode::Normal),
            KeyAction::OpenTargeting(RangedKind::Bolt)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('T')), &AppMode::Normal),
            KeyAction::OpenTargeting(RangedKind::Throw)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), &AppMode::Normal),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('h')), &AppMode::Normal),
            KeyAction::None
        );
    }

    #[test]
    fn maps_orthogonal_keys() {
        let handler = InputHandler::new();
        let cases = [
            (KeyCode::Left, Direction::West),
            (KeyCode::Char('h'), Direction::West),
            (KeyCode::Right, Direction::East),
            (KeyCode::Char('l'), Direction::East),
            (KeyCode::Up, Direction::North),
            (KeyCode::Char('k'), Direction::North),
            (KeyCode::Down, Direction::South),
            (KeyCode::Char('j'), Direction::South),
        ];
        for (code, direction) in cases {
            assert_eq!(
                handler.handle_key(key(code), &TARGETING),
                KeyAction::Target(TargetInput::Direction(direction)),
                "{code:?}"
            );
        }
    }

    #[test]
    fn maps_diagonal_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('y', Direction::NorthWest),
            ('u', Direction::NorthEast),
            ('b', Direction::SouthWest),
            ('n', Direction::SouthEast),
        ];
        for (ch, direction) in cases {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(ch)), &TARGETING),
                KeyAction::Target(TargetInput::Direction(direction))
            );
        }
    }

    #[test]
    fn maps_confirm_and_cancel() {
        let handler = InputHandler::new();
        for code in [KeyCode::Enter, KeyCode::Char('f'), KeyCode::Char('t')] {
            assert_eq!(
                handler.handle_key(key(code), &TARGETING),
                KeyAction::Target(TargetInput::Confirm)
            );
        }
        for code in [KeyCode::Esc, KeyCode::Char('q')] {
            assert_eq!(
                handler.handle_key(key(code), &TARGETING),
                KeyAction::Target(TargetInput::Cancel)
            );
        }
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let handler = InputHandler::new();
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c, &AppMode::Normal), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl_c, &TARGETING), KeyAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), &TARGETING),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Tab), &TARGETING),
            KeyAction::None
        );
    }
}
