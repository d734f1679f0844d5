//! Target selection for ranged commands.
//!
//! A session starts from the hero's position and the command's [`Range`],
//! snapshots the visible monsters in range, and lets the player cycle the
//! target with compass directions. Each frame the session reports the range
//! field, the bolt preview along the line of sight, and, when the line is
//! clear, a reticle around the target.
//!
//! [`Range`]: game_core::Range

pub mod animation;
pub mod bolt;
pub mod candidates;
pub mod dialog;
pub mod extremum;
pub mod field;
pub mod retarget;

pub use animation::{BoltAnimation, MAX_ANIMATION_STEPS};
pub use bolt::{BoltCell, BoltTrace, Intensity, Reticle, trace_bolt};
pub use candidates::{Candidate, CandidateSet};
pub use dialog::{DialogStatus, SelectCallback, TargetDialog, TargetInput, TargetingView};
pub use extremum::{find_highest, find_lowest};
pub use field::{RangeClass, RangeField};
pub use retarget::{HalfPlanes, retarget};
