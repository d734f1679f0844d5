//! Modal targeting session.
//!
//! A [`TargetDialog`] is opened by a ranged command, gathers its candidates
//! once, and then owns the current target until the player confirms or
//! cancels. The frontend feeds it abstract inputs and animation ticks and asks
//! it for a [`TargetingView`] every frame.

use game_core::{Direction, Position, Range, StageOracle};

use crate::config::TargetingConfig;

use super::animation::BoltAnimation;
use super::bolt::{BoltTrace, Reticle, trace_bolt};
use super::candidates::{Candidate, CandidateSet};
use super::field::RangeField;
use super::retarget::retarget;

/// Device-independent input accepted by a targeting session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetInput {
    Confirm,
    Cancel,
    Direction(Direction),
}

/// Whether the session still wants input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogStatus {
    Open,
    /// The session ended; carries the confirmed position, or `None` on cancel.
    Closed(Option<Position>),
}

impl DialogStatus {
    pub fn is_open(self) -> bool {
        matches!(self, DialogStatus::Open)
    }
}

/// Callback type used by frontends that need to store dialogs without naming closures.
pub type SelectCallback = Box<dyn FnOnce(Position) + Send>;

/// Targeting session state.
pub struct TargetDialog<F = SelectCallback>
where
    F: FnOnce(Position),
{
    hero: Position,
    range: Range,
    candidates: CandidateSet,
    target: Option<Candidate>,
    animation: BoltAnimation,
    on_select: Option<F>,
    status: DialogStatus,
}

impl<F> TargetDialog<F>
where
    F: FnOnce(Position),
{
    /// Opens a session and seeds the target with the nearest candidate, if any.
    pub fn open(
        hero: Position,
        range: Range,
        stage: &dyn StageOracle,
        config: &TargetingConfig,
        on_select: F,
    ) -> Self {
        let candidates = CandidateSet::gather(hero, range, stage);
        let target = candidates.nearest_to(hero);

        tracing::info!(
            hero = %hero,
            range = %range,
            candidates = candidates.len(),
            target = ?target.map(|candidate| candidate.id),
            "targeting session opened"
        );

        Self {
            hero,
            range,
            candidates,
            target,
            animation: BoltAnimation::from_config(config),
            on_select: Some(on_select),
            status: DialogStatus::Open,
        }
    }

    /// Applies one input. Inputs after the session closed are ignored.
    pub fn handle_input(&mut self, input: TargetInput) -> DialogStatus {
        if !self.status.is_open() {
            return self.status;
        }

        match input {
            TargetInput::Confirm => self.confirm(),
            TargetInput::Cancel => {
                tracing::info!("targeting session cancelled");
                self.status = DialogStatus::Closed(None);
            }
            TargetInput::Direction(direction) => {
                if let Some(current) = self.target {
                    self.target = retarget(&self.candidates, current.position, direction)
                        .or(self.target);
                }
            }
        }

        self.status
    }

    /// Advances the bolt animation. Returns true when a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.status.is_open() && self.animation.tick()
    }

    /// Everything a frontend needs to draw this frame.
    pub fn view(&self, stage: &dyn StageOracle) -> TargetingView {
        let field = RangeField::scan(self.hero, self.range, stage);
        let bolt = self
            .target
            .map(|target| trace_bolt(self.hero, target.position, stage, &self.animation))
            .unwrap_or_default();
        let reticle = self
            .target
            .filter(|_| bolt.reached_target)
            .map(|target| Reticle::around(self.hero, target.position, self.range));

        TargetingView {
            hero: self.hero,
            range: self.range,
            target: self.target,
            field,
            bolt,
            reticle,
        }
    }

    pub fn target(&self) -> Option<Candidate> {
        self.target
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    fn confirm(&mut self) {
        let Some(target) = self.target else {
            return;
        };

        tracing::info!(
            target = %target.id,
            position = %target.position,
            "target confirmed"
        );
        if let Some(on_select) = self.on_select.take() {
            on_select(target.position);
        }
        self.status = DialogStatus::Closed(Some(target.position));
    }
}

/// Per-frame render query result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetingView {
    pub hero: Position,
    pub range: Range,
    pub target: Option<Candidate>,
    pub field: RangeField,
    pub bolt: BoltTrace,
    /// Present only when the bolt reached the target.
    pub reticle: Option<Reticle>,
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::services::targeting::RangeClass;
    use game_core::Stage;

    fn stage(layout: &str) -> Stage {
        Stage::from_ascii(layout).expect("valid layout")
    }

    #[test]
    fn confirm_without_target_is_noop() {
        let stage = stage("@....");
        let calls = RefCell::new(0);
        let mut dialog = TargetDialog::open(
            Position::ORIGIN,
            Range::new(5),
            &stage,
            &TargetingConfig::default(),
            |_: Position| *calls.borrow_mut() += 1,
        );

        assert!(dialog.target().is_none());
        assert_eq!(dialog.handle_input(TargetInput::Confirm), DialogStatus::Open);
        assert_eq!(
            dialog.handle_input(TargetInput::Direction(Direction::East)),
            DialogStatus::Open
        );
        assert_eq!(
            dialog.handle_input(TargetInput::Cancel),
            DialogStatus::Closed(None)
        );
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn cancel_does_not_select() {
        let stage = stage("@..g");
        let selected = RefCell::new(None);
        let mut dialog = TargetDialog::open(
            Position::ORIGIN,
            Range::new(5),
            &stage,
            &TargetingConfig::default(),
            |position: Position| *selected.borrow_mut() = Some(position),
        );

        assert!(dialog.target().is_some());
        assert_eq!(
            dialog.handle_input(TargetInput::Cancel),
            DialogStatus::Closed(None)
        );
        assert_eq!(
            dialog.handle_input(TargetInput::Confirm),
            DialogStatus::Closed(None)
        );
        assert!(selected.borrow().is_none());
    }

    #[test]
    fn tick_stops_after_close() {
        let stage = stage("@..g");
        let mut dialog = TargetDialog::open(
            Position::ORIGIN,
            Range::new(5),
            &stage,
            &TargetingConfig {
                num_frames: 2,
                ticks_per_frame: 1,
            },
            |_: Position| {},
        );
        assert!(dialog.tick());
        dialog.handle_input(TargetInput::Cancel);
        assert!(!dialog.tick());
    }

    #[test]
    fn view_without_target_is_empty() {
        let stage = stage("@....");
        let dialog = TargetDialog::open(
            Position::ORIGIN,
            Range::new(3),
            &stage,
            &TargetingConfig::default(),
            |_: Position| {},
        );
        let view = dialog.view(&stage);
        assert!(view.target.is_none());
        assert!(view.bolt.cells.is_empty());
        assert!(!view.bolt.reached_target);
        assert!(view.reticle.is_none());
        // The field covers every free visible cell, in range or not.
        assert_eq!(view.field.len(), 4);
        assert_eq!(
            view.field.class_at(Position::new(4, 0)),
            Some(RangeClass::OutOfRange)
        );
    }

    #[test]
    fn boxed_callback_is_accepted() {
        let stage = stage("@.g");
        let on_select: SelectCallback = Box::new(|_| {});
        let mut dialog = TargetDialog::open(
            Position::ORIGIN,
            Range::new(5),
            &stage,
            &TargetingConfig::default(),
            on_select,
        );
        assert_eq!(
            dialog.handle_input(TargetInput::Confirm),
            DialogStatus::Closed(Some(Position::new(2, 0)))
        );
    }
}
