//! Header widget displaying the current mode and target.

use client_frontend_core::targeting::TargetingView;
use game_core::StageOracle;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppMode;

/// Render the header panel with the mode and, while targeting, the target.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    mode: AppMode,
    stage: &dyn StageOracle,
    targeting: Option<&TargetingView>,
) {
    let mut spans = vec![
        Span::raw("Monsters: "),
        Span::styled(
            stage
                .actors()
                .iter()
                .filter(|actor| actor.is_monster())
                .count()
                .to_string(),
            Style::default().fg(Color::LightRed),
        ),
    ];

    if let AppMode::Targeting(kind) = mode {
        spans.push(Span::styled(
            format!(" [{}]", kind.label()),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(view) = targeting {
        spans.push(Span::raw(format!(" | Range: {}", view.range)));
        let target_text = match view.target {
            Some(candidate) => {
                let name = stage
                    .actors()
                    .iter()
                    .find(|actor| actor.id == candidate.id)
                    .map_or("remembered foe", |actor| actor.name.as_str());
                format!("{name} at {}", candidate.position)
            }
            None => "no target in sight".to_string(),
        };
        spans.push(Span::raw(" | Target: "));
        spans.push(Span::styled(
            target_text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Dungeon"));

    frame.render_widget(paragraph, area);
}
