//! Stage access for targeting.
//!
//! [`StageOracle`] is the read-only surface targeting sessions consume; [`Stage`]
//! is the in-memory grid the client loads scenarios into.
mod error;
mod map;
mod stage;

pub use error::StageError;
pub use map::{MapDimensions, StageOracle, TileFlags};
pub use stage::Stage;
