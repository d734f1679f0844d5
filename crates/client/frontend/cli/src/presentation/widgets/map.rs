//! Map widget rendering the stage grid with the targeting overlay.
//!
//! Layers, lowest first: tiles, range field, actors, bolt dots, reticle.

use std::collections::HashMap;

use client_frontend_core::targeting::TargetingView;
use game_core::{Position, StageOracle};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::{BOLT_GLYPH, RatatuiTheme};

/// Render the map panel. `targeting` is present while a dialog is open.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    stage: &dyn StageOracle,
    targeting: Option<&TargetingView>,
    theme: &RatatuiTheme,
) {
    let overlay = targeting
        .map(|view| build_overlay(view, theme))
        .unwrap_or_default();
    let target = targeting
        .and_then(|view| view.target)
        .map(|candidate| candidate.position);

    let dimensions = stage.dimensions();
    let mut rows = Vec::with_capacity(dimensions.height as usize);

    for y in 0..dimensions.height as i32 {
        let spans: Vec<Span> = (0..dimensions.width as i32)
            .map(|x| {
                let position = Position::new(x, y);

                if let Some((glyph, style)) = overlay.get(&position) {
                    return Span::styled(*glyph, *style);
                }

                if let Some(actor) = stage
                    .actor_at(position)
                    .filter(|_| stage.is_visible(position))
                {
                    let (glyph, style) = theme.render_actor(actor, Some(position) == target);
                    return Span::styled(glyph, style);
                }

                let (glyph, mut style) = theme.render_tile(stage, position);
                if let Some(class) = targeting.and_then(|view| view.field.class_at(position)) {
                    style = theme.style_field(class);
                }
                Span::styled(glyph, style)
            })
            .collect();

        rows.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(rows).block(Block::default().borders(Borders::ALL).title("Map"));

    frame.render_widget(paragraph, area);
}

/// Glyphs drawn over the map for the bolt and reticle; reticle wins overlaps.
fn build_overlay(
    view: &TargetingView,
    theme: &RatatuiTheme,
) -> HashMap<Position, (&'static str, Style)> {
    let mut overlay = HashMap::new();

    for cell in &view.bolt.cells {
        overlay.insert(cell.position, (BOLT_GLYPH, theme.style_bolt(cell.intensity)));
    }

    if let Some(reticle) = &view.reticle {
        let style = theme.style_reticle(reticle.intensity);
        // Points are ordered west, east, north, south.
        for (index, point) in reticle.points.iter().enumerate() {
            let glyph = if index < 2 { "-" } else { "|" };
            overlay.insert(*point, (glyph, style));
        }
    }

    overlay
}
