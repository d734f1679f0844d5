//! Grid geometry: compass directions, ranges, and straight-line tracing.
mod direction;
mod line;
mod range;

pub use direction::Direction;
pub use line::LineOfSight;
pub use range::Range;
