//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the stage or the targeting view
//! and renders to a terminal frame without mutating anything.

pub mod footer;
pub mod header;
pub mod map;
pub mod messages;
