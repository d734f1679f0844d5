//! Input handling (keyboard polling and key dispatch).

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::r#loop::{EventLoop, Flow};
use crate::input::KeyAction;

impl EventLoop {
    /// Drain every pending terminal event without blocking.
    pub(in crate::event) fn handle_input_tick(&mut self) -> Result<Flow> {
        let mut flow = Flow::Idle;

        while term_event::poll(Duration::from_millis(0))? {
            let step = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_press(key)
                }
                TermEvent::Resize(_, _) => Flow::Redraw,
                _ => Flow::Idle,
            };

            match step {
                Flow::Quit => return Ok(Flow::Quit),
                Flow::Redraw => flow = Flow::Redraw,
                Flow::Idle => {}
            }
        }

        Ok(flow)
    }

    /// Handle key press and dispatch to appropriate handler.
    pub(in crate::event) fn handle_key_press(&mut self, key: KeyEvent) -> Flow {
        match self.input.handle_key(key, &self.app_state.mode()) {
            KeyAction::Quit => {
                self.messages.push_text("You leave the dungeon.");
                Flow::Quit
            }
            KeyAction::OpenTargeting(kind) => {
                self.open_targeting(kind);
                Flow::Redraw
            }
            KeyAction::Target(input) => {
                self.handle_target_input(input);
                Flow::Redraw
            }
            KeyAction::None => Flow::Idle,
        }
    }
}
