//! Deterministic grid primitives shared by every client.
//!
//! `game-core` defines positions, compass directions, ranges, the line tracer,
//! and the stage oracle that targeting sessions read from. It performs no I/O
//! and knows nothing about rendering or input devices.
pub mod env;
pub mod geometry;
pub mod state;

pub use env::{MapDimensions, Stage, StageError, StageOracle, TileFlags};
pub use geometry::{Direction, LineOfSight, Range};
pub use state::{ActorKind, ActorState, EntityId, Offset, Position};
