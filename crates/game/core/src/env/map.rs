use bitflags::bitflags;

use crate::state::{ActorKind, ActorState, Position};

bitflags! {
    /// Per-tile facts the targeting layer needs from the stage.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        /// The hero can currently see this tile.
        const VISIBLE     = 1 << 0;
        /// Sight and bolts pass through this tile.
        const TRANSPARENT = 1 << 1;
        /// Actors can stand on this tile.
        const PASSABLE    = 1 << 2;
    }
}

impl TileFlags {
    pub const FLOOR: Self = Self::TRANSPARENT.union(Self::PASSABLE);
    pub const WALL: Self = Self::empty();
}

/// Read-only view of the stage consumed by targeting sessions.
///
/// Positions outside [`MapDimensions`] have no tile, so they are neither
/// visible, transparent, nor passable.
pub trait StageOracle {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: Position) -> Option<TileFlags>;

    /// Every actor on the stage, in roster order.
    fn actors(&self) -> &[ActorState];

    fn has_item_at(&self, position: Position) -> bool;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    fn is_visible(&self, position: Position) -> bool {
        self.tile(position)
            .is_some_and(|tile| tile.contains(TileFlags::VISIBLE))
    }

    fn is_transparent(&self, position: Position) -> bool {
        self.tile(position)
            .is_some_and(|tile| tile.contains(TileFlags::TRANSPARENT))
    }

    fn is_passable(&self, position: Position) -> bool {
        self.tile(position)
            .is_some_and(|tile| tile.contains(TileFlags::PASSABLE))
    }

    fn actor_at(&self, position: Position) -> Option<&ActorState> {
        self.actors().iter().find(|actor| actor.position == position)
    }

    fn hero(&self) -> Option<&ActorState> {
        self.actors()
            .iter()
            .find(|actor| actor.kind == ActorKind::Hero)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Row-major iterator over every position inside the bounds.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}
