//! Rendering handlers.

use anyhow::Result;

use super::super::r#loop::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render the stage, and the dialog's view when one is open.
    pub(in crate::event) fn render(&self, terminal: &mut Tui) -> Result<()> {
        let targeting = self.dialog.as_ref().map(|dialog| dialog.view(&self.stage));

        let ctx = ui::RenderContext {
            stage: &self.stage,
            mode: self.app_state.mode(),
            targeting: targeting.as_ref(),
            messages: &self.messages,
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render(terminal, &ctx)
    }
}
