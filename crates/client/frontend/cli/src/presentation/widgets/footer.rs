//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppMode;

/// Render the footer panel with key bindings help.
pub fn render(frame: &mut Frame, area: Rect, mode: AppMode) {
    let text = match mode {
        AppMode::Normal => Line::from(vec![
            Span::raw("[f] Fire bolt | "),
            Span::raw("[t] Throw dagger | "),
            Span::raw("[q] Quit"),
        ]),
        AppMode::Targeting(_) => Line::from(vec![
            Span::raw("[hjkl/Arrows] Retarget | "),
            Span::raw("[yubn] Diagonals | "),
            Span::raw("[Enter/f/t] Confirm | "),
            Span::raw("[Esc/q] Cancel"),
        ]),
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::TOP));

    frame.render_widget(paragraph, area);
}
