//! Event loop orchestrating user input, dialog animation, and rendering.

use anyhow::Result;
use client_frontend_core::{FrontendConfig, message::MessageLog, targeting::TargetDialog};
use game_core::Stage;
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use crate::{
    command::PlayerCommand, config::CliConfig, input::InputHandler, presentation::terminal::Tui,
    state::AppState,
};

const COMMAND_BUFFER: usize = 8;

/// What the loop should do after handling one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Nothing visible changed.
    Idle,
    /// Draw a new frame.
    Redraw,
    /// Leave the loop.
    Quit,
}

/// Event loop owning the stage and all UI state for one session.
pub struct EventLoop {
    pub(crate) stage: Stage,
    pub(crate) messages: MessageLog,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    /// Active targeting session, present exactly while the mode is `Targeting`.
    pub(crate) dialog: Option<TargetDialog>,
    /// Cloned into every dialog's selection callback.
    pub(crate) tx_command: mpsc::Sender<PlayerCommand>,
    /// Drained as soon as a dialog closes, before the next key is handled.
    pub(crate) rx_command: mpsc::Receiver<PlayerCommand>,
    pub(crate) frontend_config: FrontendConfig,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(
        stage: Stage,
        messages: MessageLog,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        let (tx_command, rx_command) = mpsc::channel(COMMAND_BUFFER);

        Self {
            stage,
            messages,
            input: InputHandler::new(),
            app_state: AppState::new(),
            dialog: None,
            tx_command,
            rx_command,
            frontend_config,
            cli_config,
        }
    }

    /// Runs until the player quits and returns the final stage.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<Stage> {
        self.render(terminal)?;

        let mut frame_interval =
            time::interval(Duration::from_millis(self.cli_config.ui.tick_interval_ms));
        frame_interval.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            frame_interval.tick().await;

            match self.handle_frame_tick()? {
                Flow::Quit => break,
                Flow::Redraw => self.render(terminal)?,
                Flow::Idle => {}
            }
        }

        // Final frame with the farewell message.
        self.render(terminal)?;
        Ok(self.stage)
    }

    /// One frame: drain pending keys, then advance the dialog animation.
    fn handle_frame_tick(&mut self) -> Result<Flow> {
        let input_flow = self.handle_input_tick()?;
        if input_flow == Flow::Quit {
            return Ok(Flow::Quit);
        }

        let animated = self.handle_animation_tick();
        Ok(if input_flow == Flow::Redraw || animated {
            Flow::Redraw
        } else {
            Flow::Idle
        })
    }
}
