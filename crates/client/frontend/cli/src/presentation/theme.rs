//! Ratatui styling for the stage and the targeting overlay.

use client_frontend_core::{
    message::MessageLevel,
    targeting::{Intensity, RangeClass},
};
use game_core::{ActorKind, ActorState, Position, StageOracle, TileFlags};
use ratatui::style::{Color, Modifier, Style};

pub const BOLT_GLYPH: &str = "•";

/// Consistent color scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn render_actor(&self, actor: &ActorState, is_target: bool) -> (String, Style) {
        let (glyph, color) = match actor.kind {
            ActorKind::Hero => ("@".to_string(), Color::Yellow),
            ActorKind::Monster => (monster_glyph(&actor.name), Color::LightRed),
        };

        let mut style = Style::default().fg(color);
        if is_target {
            style = self.emphasize_target(style);
        }
        (glyph, style)
    }

    /// Glyph and style for a tile without actors. Unseen tiles are blank.
    pub fn render_tile(&self, stage: &dyn StageOracle, position: Position) -> (String, Style) {
        let Some(flags) = stage.tile(position) else {
            return (" ".to_string(), Style::default());
        };
        if !flags.contains(TileFlags::VISIBLE) {
            return (" ".to_string(), Style::default());
        }
        if stage.has_item_at(position) {
            return ("*".to_string(), Style::default().fg(Color::LightCyan));
        }

        let (glyph, color) = if flags.contains(TileFlags::PASSABLE) {
            ('.', Color::DarkGray)
        } else if flags.contains(TileFlags::TRANSPARENT) {
            ('\'', Color::Cyan)
        } else {
            ('#', Color::Gray)
        };
        (glyph.to_string(), Style::default().fg(color))
    }

    pub fn style_field(&self, class: RangeClass) -> Style {
        match class {
            RangeClass::Near => Style::default().fg(Color::Gray),
            RangeClass::Far => Style::default().fg(Color::DarkGray),
            RangeClass::OutOfRange => Style::default().fg(Color::Black),
        }
    }

    pub fn style_bolt(&self, intensity: Intensity) -> Style {
        match intensity {
            Intensity::Bright => Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            Intensity::Dim => Style::default().fg(Color::Yellow),
        }
    }

    pub fn style_reticle(&self, intensity: Intensity) -> Style {
        match intensity {
            Intensity::Bright => Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            Intensity::Dim => Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM),
        }
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
        }
    }

    pub fn emphasize_target(&self, base_style: Style) -> Style {
        base_style.bg(Color::Yellow).fg(Color::Black).add_modifier(Modifier::BOLD)
    }
}

fn monster_glyph(name: &str) -> String {
    name.chars()
        .next()
        .map(|ch| ch.to_string())
        .unwrap_or_else(|| "m".to_string())
}
