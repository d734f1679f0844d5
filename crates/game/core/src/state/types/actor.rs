//! Actor roster entries as seen by the stage.

use super::common::{EntityId, Position};

/// Broad category of an actor.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActorKind {
    /// The controllable hero.
    Hero,
    /// Anything hostile the hero can target.
    Monster,
}

/// Snapshot of a single actor on the stage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub kind: ActorKind,
    pub position: Position,
    pub name: String,
}

impl ActorState {
    pub fn new(id: EntityId, kind: ActorKind, position: Position, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            position,
            name: name.into(),
        }
    }

    pub fn hero(position: Position) -> Self {
        Self::new(EntityId::HERO, ActorKind::Hero, position, "hero")
    }

    pub fn monster(id: EntityId, position: Position, name: impl Into<String>) -> Self {
        Self::new(id, ActorKind::Monster, position, name)
    }

    #[inline]
    pub fn is_monster(&self) -> bool {
        self.kind == ActorKind::Monster
    }
}
