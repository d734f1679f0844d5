//! Glue code tying the stage, targeting services, and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{Frontend, FrontendConfig, message::MessageLog};
use game_core::{Stage, StageOracle};

use crate::{config::CliConfig, event::EventLoop, presentation::terminal};

/// Terminal frontend implementing [`Frontend`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }

    async fn execute(&self, stage: Stage) -> Result<Stage> {
        tracing::info!("CLI frontend starting...");

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Welcome to the dungeon. Press f to fire a bolt, t to throw.");

        let event_loop = EventLoop::new(
            stage,
            messages,
            self.frontend_config.clone(),
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let stage = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        Ok(stage)
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, stage: Stage) -> Result<()> {
        let stage = self.execute(stage).await?;
        let survivors = stage
            .actors()
            .iter()
            .filter(|actor| actor.is_monster())
            .count();
        tracing::info!(survivors, "session finished");
        Ok(())
    }
}
