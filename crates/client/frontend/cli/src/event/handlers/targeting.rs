//! Targeting dialog lifecycle and command resolution.

use client_frontend_core::targeting::{DialogStatus, SelectCallback, TargetDialog, TargetInput};
use game_core::StageOracle;

use super::super::r#loop::EventLoop;
use crate::command::{self, PlayerCommand, RangedKind};

impl EventLoop {
    /// Push a targeting screen for `kind` and open its dialog.
    pub(in crate::event) fn open_targeting(&mut self, kind: RangedKind) {
        let Some(hero) = self.stage.hero().map(|hero| hero.position) else {
            tracing::warn!("stage has no hero, ignoring ranged command");
            self.messages.push_warning("There is no one to act.");
            return;
        };
        if !self.app_state.push_targeting(kind) {
            return;
        }

        let tx_command = self.tx_command.clone();
        let on_select: SelectCallback = Box::new(move |target| {
            if let Err(error) = tx_command.try_send(kind.command(target)) {
                tracing::warn!(%error, "dropped player command");
            }
        });

        let dialog = TargetDialog::open(
            hero,
            kind.range(&self.cli_config),
            &self.stage,
            &self.frontend_config.targeting,
            on_select,
        );

        if dialog.target().is_some() {
            self.messages.push_text("Choose a target.");
        } else {
            self.messages.push_text("No monsters in range.");
        }
        self.dialog = Some(dialog);
    }

    /// Forward an input to the open dialog and pop the screen once it closes.
    ///
    /// A confirmed selection is resolved here, so the next key already sees
    /// the updated stage.
    pub(in crate::event) fn handle_target_input(&mut self, input: TargetInput) {
        let Some(dialog) = self.dialog.as_mut() else {
            self.app_state.pop();
            return;
        };

        if let DialogStatus::Closed(selection) = dialog.handle_input(input) {
            self.dialog = None;
            self.app_state.pop();
            if selection.is_none() {
                self.messages.push_text("Never mind.");
            }
            self.resolve_pending_commands();
        }
    }

    /// Applies every command queued by selection callbacks.
    fn resolve_pending_commands(&mut self) {
        while let Ok(command) = self.rx_command.try_recv() {
            self.handle_command(command);
        }
    }

    /// Returns true when the dialog's animation wants a redraw.
    pub(in crate::event) fn handle_animation_tick(&mut self) -> bool {
        self.dialog.as_mut().is_some_and(|dialog| dialog.tick())
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        tracing::debug!(?command, "resolving player command");
        command::resolve(command, &mut self.stage, &mut self.messages);
    }
}

#[cfg(test)]
mod tests {
    use client_frontend_core::{FrontendConfig, message::MessageLog};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use game_core::{Position, Stage};

    use crate::event::r#loop::Flow;
    use super::*;
    use crate::{config::CliConfig, state::AppMode};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn event_loop(layout: &str) -> EventLoop {
        EventLoop::new(
            Stage::from_ascii(layout).expect("valid layout"),
            MessageLog::new(16),
            FrontendConfig::default(),
            CliConfig::default(),
        )
    }

    fn next_command(event_loop: &mut EventLoop) -> Option<PlayerCommand> {
        event_loop.rx_command.try_recv().ok()
    }

    fn last_message(event_loop: &EventLoop) -> Option<&str> {
        event_loop
            .messages
            .recent(1)
            .next()
            .map(|entry| entry.text.as_str())
    }

    #[test]
    fn fire_bolt_kills_selected_monster() {
        let mut event_loop = event_loop("@..g..o");

        assert_eq!(event_loop.handle_key_press(key(KeyCode::Char('f'))), Flow::Redraw);
        assert_eq!(
            event_loop.app_state.mode(),
            AppMode::Targeting(RangedKind::Bolt)
        );
        assert!(event_loop.dialog.is_some());

        event_loop.handle_key_press(key(KeyCode::Char('l')));
        event_loop.handle_key_press(key(KeyCode::Enter));
        assert_eq!(event_loop.app_state.mode(), AppMode::Normal);
        assert!(event_loop.dialog.is_none());

        // Resolved during the confirming key press, nothing left queued.
        assert!(next_command(&mut event_loop).is_none());
        assert!(event_loop.stage.actor_at(Position::new(6, 0)).is_none());
        assert!(event_loop.stage.actor_at(Position::new(3, 0)).is_some());
        assert_eq!(
            last_message(&event_loop),
            Some("The bolt strikes the orc. It dies!")
        );
    }

    #[test]
    fn keys_after_confirm_see_the_resolved_stage() {
        let mut event_loop = event_loop("@..g");

        for code in [KeyCode::Char('f'), KeyCode::Enter, KeyCode::Char('f')] {
            event_loop.handle_key_press(key(code));
        }

        assert!(event_loop.stage.actor_at(Position::new(3, 0)).is_none());
        let dialog = event_loop.dialog.as_ref().expect("second dialog open");
        assert!(dialog.target().is_none());
        assert_eq!(last_message(&event_loop), Some("No monsters in range."));
    }

    #[test]
    fn throw_resolves_before_next_dialog_opens() {
        let mut event_loop = event_loop("@.g...");

        for code in [KeyCode::Char('t'), KeyCode::Enter, KeyCode::Char('t')] {
            event_loop.handle_key_press(key(code));
        }

        let dialog = event_loop.dialog.as_ref().expect("second dialog open");
        assert_eq!(
            dialog.target().map(|candidate| candidate.position),
            Some(Position::new(3, 0))
        );
    }

    #[test]
    fn cancel_pops_screen_without_command() {
        let mut event_loop = event_loop("@..g");

        event_loop.handle_key_press(key(KeyCode::Char('t')));
        event_loop.handle_key_press(key(KeyCode::Esc));

        assert_eq!(event_loop.app_state.mode(), AppMode::Normal);
        assert!(event_loop.dialog.is_none());
        assert!(next_command(&mut event_loop).is_none());
        assert_eq!(last_message(&event_loop), Some("Never mind."));
    }

    #[test]
    fn empty_dialog_stays_open_on_confirm() {
        let mut event_loop = event_loop("@....");

        event_loop.handle_key_press(key(KeyCode::Char('f')));
        event_loop.handle_key_press(key(KeyCode::Enter));

        assert!(event_loop.dialog.is_some());
        assert!(event_loop.app_state.is_modal());
        assert!(next_command(&mut event_loop).is_none());
    }

    #[test]
    fn animation_ticks_only_while_targeting() {
        let mut event_loop = event_loop("@..g");
        assert!(!event_loop.handle_animation_tick());

        event_loop.handle_key_press(key(KeyCode::Char('f')));
        let redraws = (0..25)
            .filter(|_| event_loop.handle_animation_tick())
            .count();
        // Default timing: 5 frames of 5 ticks each.
        assert_eq!(redraws, 5);
    }

    #[test]
    fn quit_only_from_normal_mode() {
        let mut event_loop = event_loop("@..g");
        event_loop.handle_key_press(key(KeyCode::Char('f')));
        // `q` cancels the dialog instead of quitting.
        assert_eq!(event_loop.handle_key_press(key(KeyCode::Char('q'))), Flow::Redraw);
        assert_eq!(event_loop.handle_key_press(key(KeyCode::Char('q'))), Flow::Quit);
    }
}
