//! Value types describing what lives on the stage.
//!
//! Positions, offsets and actor snapshots are plain values: they are copied
//! into targeting sessions and never mutated behind the stage's back.
pub mod types;

pub use types::{ActorKind, ActorState, EntityId, Offset, Position};
