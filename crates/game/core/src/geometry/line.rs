use crate::state::Position;

/// Cells on the straight line between two positions (Bresenham).
///
/// Yields every cell strictly after `from`, ending with `to`. The iterator is
/// lazy and `Clone`, so callers can bail out on the first blocking cell and
/// restart the walk from scratch by cloning or rebuilding it.
#[derive(Clone, Debug)]
pub struct LineOfSight {
    current: Position,
    to: Position,
    dx: i32,
    dy: i32,
    step_x: i32,
    step_y: i32,
    error: i32,
}

impl LineOfSight {
    pub fn new(from: Position, to: Position) -> Self {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        Self {
            current: from,
            to,
            dx,
            dy,
            step_x: if from.x < to.x { 1 } else { -1 },
            step_y: if from.y < to.y { 1 } else { -1 },
            error: dx - dy,
        }
    }
}

impl Iterator for LineOfSight {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.current == self.to {
            return None;
        }

        let doubled = 2 * self.error;
        if doubled > -self.dy {
            self.error -= self.dy;
            self.current.x += self.step_x;
        }
        if doubled < self.dx {
            self.error += self.dx;
            self.current.y += self.step_y;
        }

        Some(self.current)
    }
}
