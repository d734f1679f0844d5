//! In-memory grid stage.

use std::collections::BTreeSet;

use super::error::StageError;
use super::map::{MapDimensions, StageOracle, TileFlags};
use crate::state::{ActorState, EntityId, Position};

/// Concrete stage: a rectangular tile grid plus its actor roster and loose items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    dimensions: MapDimensions,
    tiles: Vec<TileFlags>,
    actors: Vec<ActorState>,
    items: BTreeSet<Position>,
}

impl Stage {
    /// Parses a text layout, one character per tile.
    ///
    /// | glyph | meaning |
    /// |-------|---------|
    /// | `#` | wall |
    /// | `.` | floor |
    /// | `:` | floor the hero cannot currently see |
    /// | `'` | glass: see-through but impassable |
    /// | `*` | floor with an item on it |
    /// | `@` | hero standing on floor |
    /// | `a`..=`z` | monster standing on floor |
    /// | ` ` | void |
    ///
    /// Monsters get ids in reading order starting at 1.
    pub fn from_ascii(layout: &str) -> Result<Self, StageError> {
        let rows: Vec<&str> = layout.trim_matches('\n').lines().collect();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(StageError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut hero = None;
        let mut monsters = Vec::new();
        let mut items = BTreeSet::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(StageError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            for (column, glyph) in line.chars().enumerate() {
                let position = Position::new(column as i32, row as i32);
                let tile = match glyph {
                    '#' => TileFlags::WALL | TileFlags::VISIBLE,
                    '.' => TileFlags::FLOOR | TileFlags::VISIBLE,
                    ':' => TileFlags::FLOOR,
                    '\'' => TileFlags::TRANSPARENT | TileFlags::VISIBLE,
                    ' ' => TileFlags::empty(),
                    '*' => {
                        items.insert(position);
                        TileFlags::FLOOR | TileFlags::VISIBLE
                    }
                    '@' => {
                        if hero.replace(position).is_some() {
                            return Err(StageError::DuplicateHero);
                        }
                        TileFlags::FLOOR | TileFlags::VISIBLE
                    }
                    'a'..='z' => {
                        monsters.push((glyph, position));
                        TileFlags::FLOOR | TileFlags::VISIBLE
                    }
                    _ => return Err(StageError::UnknownGlyph { glyph, column, row }),
                };
                tiles.push(tile);
            }
        }

        let hero = hero.ok_or(StageError::MissingHero)?;
        let mut actors = Vec::with_capacity(monsters.len() + 1);
        actors.push(ActorState::hero(hero));
        actors.extend(monsters.into_iter().zip(1u32..).map(|((glyph, position), id)| {
            ActorState::monster(EntityId(id), position, monster_name(glyph))
        }));

        Ok(Self {
            dimensions: MapDimensions::new(width as u32, rows.len() as u32),
            tiles,
            actors,
            items,
        })
    }

    pub fn set_visible(&mut self, position: Position, visible: bool) {
        if let Some(index) = self.index(position) {
            self.tiles[index].set(TileFlags::VISIBLE, visible);
        }
    }

    /// Removes an actor from the roster, returning it if it was present.
    pub fn remove_actor(&mut self, id: EntityId) -> Option<ActorState> {
        let index = self.actors.iter().position(|actor| actor.id == id)?;
        Some(self.actors.remove(index))
    }

    /// Moves an actor onto a passable, unoccupied tile. Returns false otherwise.
    pub fn move_actor(&mut self, id: EntityId, to: Position) -> bool {
        if !self.is_passable(to) || self.actor_at(to).is_some() {
            return false;
        }
        match self.actors.iter_mut().find(|actor| actor.id == id) {
            Some(actor) => {
                actor.position = to;
                true
            }
            None => false,
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.dimensions
            .contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

impl StageOracle for Stage {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<TileFlags> {
        self.index(position).map(|index| self.tiles[index])
    }

    fn actors(&self) -> &[ActorState] {
        &self.actors
    }

    fn has_item_at(&self, position: Position) -> bool {
        self.items.contains(&position)
    }
}

fn monster_name(glyph: char) -> &'static str {
    match glyph {
        'b' => "bat",
        'g' => "goblin",
        'k' => "kobold",
        'o' => "orc",
        'r' => "rat",
        's' => "skeleton",
        'z' => "zombie",
        _ => "monster",
    }
}
