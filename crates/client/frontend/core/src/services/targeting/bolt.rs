//! Line-of-sight feedback: the animated bolt preview and the target reticle.

use arrayvec::ArrayVec;
use game_core::{Direction, LineOfSight, Position, Range, StageOracle};

use super::animation::BoltAnimation;

/// Brightness class for a drawn targeting cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intensity {
    Bright,
    Dim,
}

/// One dot of the bolt preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoltCell {
    pub position: Position,
    pub intensity: Intensity,
}

/// Result of walking the line from hero to target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoltTrace {
    /// Cells to draw, in walk order from the hero outward. Never includes the target.
    pub cells: Vec<BoltCell>,
    /// The walk arrived at the target without hitting an actor or opaque tile.
    pub reached_target: bool,
}

/// Walks the straight line from `hero` to `target` and collects the bolt dots.
///
/// The walk stops at the target, at the first cell holding an actor, or at the
/// first non-transparent tile, whichever comes first. The frame index starts
/// at the animation's current frame and steps back by one (mod `num_frames`)
/// per drawn cell, so the bright dot appears to travel from hero to target
/// as frames advance.
pub fn trace_bolt(
    hero: Position,
    target: Position,
    stage: &dyn StageOracle,
    animation: &BoltAnimation,
) -> BoltTrace {
    let frames = animation.num_frames();
    let mut frame = animation.frame();
    let mut trace = BoltTrace::default();

    for position in LineOfSight::new(hero, target) {
        if position == target {
            trace.reached_target = true;
            break;
        }
        if stage.actor_at(position).is_some() || !stage.is_transparent(position) {
            break;
        }

        let intensity = if frame == 0 {
            Intensity::Bright
        } else {
            Intensity::Dim
        };
        trace.cells.push(BoltCell {
            position,
            intensity,
        });
        frame = if frame == 0 { frames - 1 } else { frame - 1 };
    }

    trace
}

/// Four-point marker around a reachable target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reticle {
    pub target: Position,
    /// West, east, north, south of the target, in that order.
    pub points: ArrayVec<Position, 4>,
    pub intensity: Intensity,
}

impl Reticle {
    /// Full intensity within two-thirds of `range`, dim beyond.
    pub fn around(hero: Position, target: Position, range: Range) -> Self {
        let points = [
            Direction::West,
            Direction::East,
            Direction::North,
            Direction::South,
        ]
        .into_iter()
        .map(|direction| target + direction.offset())
        .collect();

        let intensity = if range.is_near(target - hero) {
            Intensity::Bright
        } else {
            Intensity::Dim
        };

        Self {
            target,
            points,
            intensity,
        }
    }
}
