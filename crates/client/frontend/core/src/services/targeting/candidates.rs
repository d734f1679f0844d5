//! Candidate gathering for a targeting session.

use game_core::{EntityId, Position, Range, StageOracle};

use super::extremum::find_lowest;

/// A monster eligible for targeting, captured when the session opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: EntityId,
    pub position: Position,
}

/// Monsters that were visible and within range when the session opened.
///
/// This is a snapshot: monsters that later move, die, or leave sight keep
/// their recorded position until the session ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Scans the stage roster for monsters on visible tiles within `range` of `hero`.
    ///
    /// Roster order is preserved.
    pub fn gather(hero: Position, range: Range, stage: &dyn StageOracle) -> Self {
        let candidates: Vec<Candidate> = stage
            .actors()
            .iter()
            .filter(|actor| {
                actor.is_monster()
                    && stage.is_visible(actor.position)
                    && range.contains(actor.position - hero)
            })
            .map(|actor| Candidate {
                id: actor.id,
                position: actor.position,
            })
            .collect();

        tracing::debug!(
            hero = %hero,
            range = %range,
            count = candidates.len(),
            "gathered targeting candidates"
        );

        Self { candidates }
    }

    /// Closest candidate to `origin` by Euclidean distance; the earliest wins ties.
    pub fn nearest_to(&self, origin: Position) -> Option<Candidate> {
        find_lowest(self.candidates.iter().copied(), |candidate| {
            (candidate.position - origin).length_squared()
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.candidates
            .iter()
            .any(|candidate| candidate.position == position)
    }
}

impl FromIterator<Candidate> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}
