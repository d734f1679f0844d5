//! Range field overlay shown behind the targeting preview.

use game_core::{Position, Range, StageOracle};

/// How a visible cell relates to the command's range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeClass {
    /// Within two-thirds of the range.
    Near,
    /// Within range but beyond two-thirds of it.
    Far,
    /// Beyond the range.
    OutOfRange,
}

impl RangeClass {
    pub fn classify(hero: Position, position: Position, range: Range) -> Self {
        let offset = position - hero;
        if !range.contains(offset) {
            RangeClass::OutOfRange
        } else if range.is_near(offset) {
            RangeClass::Near
        } else {
            RangeClass::Far
        }
    }
}

/// Range classification of every visible, unoccupied, passable cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeField {
    cells: Vec<(Position, RangeClass)>,
}

impl RangeField {
    /// Classifies the stage in row-major order.
    ///
    /// Cells that are not visible, hold an actor or item, or are impassable are
    /// left out: the map layer draws those as-is.
    pub fn scan(hero: Position, range: Range, stage: &dyn StageOracle) -> Self {
        let cells = stage
            .dimensions()
            .positions()
            .filter(|&position| {
                stage.is_visible(position)
                    && stage.is_passable(position)
                    && stage.actor_at(position).is_none()
                    && !stage.has_item_at(position)
            })
            .map(|position| (position, RangeClass::classify(hero, position, range)))
            .collect();

        Self { cells }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, RangeClass)> + '_ {
        self.cells.iter().copied()
    }

    pub fn class_at(&self, position: Position) -> Option<RangeClass> {
        self.cells
            .iter()
            .find(|(cell, _)| *cell == position)
            .map(|(_, class)| *class)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
