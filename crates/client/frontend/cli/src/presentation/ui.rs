//! Main render entry point composing every widget into the terminal UI.
use anyhow::Result;
use client_frontend_core::{message::MessageLog, targeting::TargetingView};
use game_core::StageOracle;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppMode,
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub stage: &'a dyn StageOracle,
    pub mode: AppMode,
    /// Present while a targeting dialog is open.
    pub targeting: Option<&'a TargetingView>,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
}

/// Draw one frame to the terminal.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, ctx))?;
    Ok(())
}

/// Lay out header, map, messages, and footer inside `frame`.
pub fn render_frame(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Map
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(2),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.mode, ctx.stage, ctx.targeting);
    widgets::map::render(frame, chunks[1], ctx.stage, ctx.targeting, &theme);

    let visible_lines = ctx.message_panel_height.saturating_sub(2) as usize;
    let recent_messages: Vec<_> = ctx.messages.recent(visible_lines).cloned().collect();
    widgets::messages::render(frame, chunks[2], &recent_messages, &theme);

    widgets::footer::render(frame, chunks[3], ctx.mode);
}
