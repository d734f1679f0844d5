pub mod actor;
pub mod common;

pub use actor::{ActorKind, ActorState};
pub use common::{EntityId, Offset, Position};
