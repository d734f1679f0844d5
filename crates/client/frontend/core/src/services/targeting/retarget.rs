//! Directional retargeting.
//!
//! Pressing a direction draws a line through the current target perpendicular
//! to that direction. Candidates strictly on the pressed side are "ahead";
//! everything else, including candidates on the line and the current target
//! itself, is "behind". The nearest candidate ahead wins. When nothing is ahead
//! the selection wraps to the farthest candidate behind.

use game_core::{Direction, Position};

use super::candidates::{Candidate, CandidateSet};
use super::extremum::{find_highest, find_lowest};

/// Candidates split by the line through `current` perpendicular to a direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HalfPlanes {
    pub ahead: Vec<Candidate>,
    pub behind: Vec<Candidate>,
}

impl HalfPlanes {
    pub fn split(candidates: &CandidateSet, current: Position, direction: Direction) -> Self {
        let perpendicular = direction.rotate_left_90().offset();
        let (ahead, behind) = candidates
            .iter()
            .copied()
            .partition(|candidate| perpendicular.cross(candidate.position - current) > 0);
        Self { ahead, behind }
    }
}

/// Picks the next target from `current` in `direction`.
///
/// Returns `None` only when the candidate set is empty.
pub fn retarget(
    candidates: &CandidateSet,
    current: Position,
    direction: Direction,
) -> Option<Candidate> {
    let HalfPlanes { ahead, behind } = HalfPlanes::split(candidates, current, direction);
    let distance = |candidate: &Candidate| (candidate.position - current).length_squared();

    let next = if ahead.is_empty() {
        find_highest(behind, distance)
    } else {
        find_lowest(ahead, distance)
    };

    tracing::debug!(
        from = %current,
        direction = %direction,
        to = ?next.map(|candidate| candidate.position),
        "retargeted"
    );

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EntityId, Offset};

    fn set(positions: &[(i32, i32)]) -> CandidateSet {
        positions
            .iter()
            .zip(1u32..)
            .map(|(&(x, y), id)| Candidate {
                id: EntityId(id),
                position: Position::new(x, y),
            })
            .collect()
    }

    fn ring(center: Position) -> CandidateSet {
        Direction::ALL
            .iter()
            .zip(1u32..)
            .map(|(direction, id)| Candidate {
                id: EntityId(id),
                position: center + direction.offset(),
            })
            .collect()
    }

    #[test]
    fn partition_matches_cross_product_over_ring() {
        let center = Position::new(10, 10);
        let candidates = ring(center);

        for direction in Direction::ALL {
            let perpendicular = direction.rotate_left_90().offset();
            let planes = HalfPlanes::split(&candidates, center, direction);
            assert_eq!(planes.ahead.len() + planes.behind.len(), 8);

            for candidate in &planes.ahead {
                assert!(perpendicular.cross(candidate.position - center) > 0);
            }
            for candidate in &planes.behind {
                assert!(perpendicular.cross(candidate.position - center) <= 0);
            }

            // The three ring cells leaning toward the pressed direction are ahead.
            let leaning: Vec<Offset> = planes
                .ahead
                .iter()
                .map(|candidate| candidate.position - center)
                .collect();
            assert_eq!(leaning.len(), 3, "{direction}");
            assert!(leaning.contains(&direction.offset()), "{direction}");
        }
    }

    #[test]
    fn current_target_lands_behind() {
        let candidates = set(&[(5, 5), (5, 2)]);
        let planes = HalfPlanes::split(&candidates, Position::new(5, 5), Direction::North);
        assert_eq!(planes.ahead.len(), 1);
        assert_eq!(planes.behind[0].position, Position::new(5, 5));
    }

    #[test]
    fn picks_nearest_ahead() {
        let candidates = set(&[(3, 0), (3, -3), (3, -1), (6, 0)]);
        let next = retarget(&candidates, Position::new(3, 0), Direction::North);
        assert_eq!(next.map(|c| c.position), Some(Position::new(3, -1)));
    }

    #[test]
    fn monster_due_north_is_ahead_when_pressing_north() {
        // perp(N) = W = (-1, 0); relative (0, -3); cross = (-1)(-3) - 0*0 = 3 > 0.
        let candidates = set(&[(3, 0), (3, -3)]);
        let next = retarget(&candidates, Position::new(3, 0), Direction::North);
        assert_eq!(next.map(|c| c.position), Some(Position::new(3, -3)));
    }

    #[test]
    fn wraps_to_farthest_behind() {
        // Nothing is north of the target: wrap to the farthest candidate overall.
        let candidates = set(&[(3, 0), (3, 2), (3, 6), (0, 0)]);
        let next = retarget(&candidates, Position::new(3, 0), Direction::North);
        assert_eq!(next.map(|c| c.position), Some(Position::new(3, 6)));
    }

    #[test]
    fn wrap_ties_keep_first_seen() {
        let candidates = set(&[(0, 4), (4, 0), (-4, 0)]);
        let next = retarget(&candidates, Position::ORIGIN, Direction::North);
        assert_eq!(next.map(|c| c.id), Some(EntityId(1)));
    }

    #[test]
    fn ahead_ties_keep_first_seen() {
        let candidates = set(&[(-1, -2), (1, -2)]);
        let next = retarget(&candidates, Position::ORIGIN, Direction::North);
        assert_eq!(next.map(|c| c.id), Some(EntityId(1)));
    }

    #[test]
    fn lone_target_stays_selected() {
        let candidates = set(&[(2, 2)]);
        for direction in Direction::ALL {
            let next = retarget(&candidates, Position::new(2, 2), direction);
            assert_eq!(next.map(|c| c.position), Some(Position::new(2, 2)));
        }
    }

    #[test]
    fn empty_set_yields_none() {
        let candidates = CandidateSet::default();
        assert!(retarget(&candidates, Position::ORIGIN, Direction::East).is_none());
    }

    #[test]
    fn opposite_presses_need_not_round_trip() {
        // A(0,0) -> East picks B(4,0); West from B sees A and C ahead, C is nearer.
        let candidates = set(&[(0, 0), (4, 0), (3, 3)]);
        let east = retarget(&candidates, Position::new(0, 0), Direction::East)
            .expect("candidate east");
        assert_eq!(east.position, Position::new(4, 0));
        let back = retarget(&candidates, east.position, Direction::West).expect("candidate west");
        assert_eq!(back.position, Position::new(3, 3));
    }
}
