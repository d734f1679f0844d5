//! Ranged player commands produced by confirmed targeting dialogs.
use game_core::{Offset, Position, Range, Stage, StageOracle};

use client_frontend_core::message::MessageLog;

use crate::config::CliConfig;

/// Which ranged command a targeting dialog was opened for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangedKind {
    Bolt,
    Throw,
}

impl RangedKind {
    pub fn range(self, config: &CliConfig) -> Range {
        match self {
            RangedKind::Bolt => config.bolt_range,
            RangedKind::Throw => config.throw_range,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RangedKind::Bolt => "FIRE BOLT",
            RangedKind::Throw => "THROW",
        }
    }

    /// Wraps a confirmed target position into the matching command.
    pub fn command(self, target: Position) -> PlayerCommand {
        match self {
            RangedKind::Bolt => PlayerCommand::FireBolt { target },
            RangedKind::Throw => PlayerCommand::Throw { target },
        }
    }
}

/// Command sent from a dialog's selection callback to the event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Kills the monster standing on `target`.
    FireBolt { target: Position },
    /// Knocks the monster on `target` one tile away from the hero.
    Throw { target: Position },
}

/// Applies a command to the stage and reports the outcome in the message log.
pub fn resolve(command: PlayerCommand, stage: &mut Stage, messages: &mut MessageLog) {
    match command {
        PlayerCommand::FireBolt { target } => fire_bolt(target, stage, messages),
        PlayerCommand::Throw { target } => throw(target, stage, messages),
    }
}

fn fire_bolt(target: Position, stage: &mut Stage, messages: &mut MessageLog) {
    let Some(victim) = stage.actor_at(target).map(|actor| actor.id) else {
        tracing::debug!(target = %target, "bolt hit an empty tile");
        messages.push_text("The bolt fizzles against the floor.");
        return;
    };

    match stage.remove_actor(victim) {
        Some(actor) => {
            tracing::info!(id = %actor.id, name = %actor.name, "monster slain by bolt");
            messages.push_text(format!("The bolt strikes the {}. It dies!", actor.name));
        }
        None => messages.push_warning("The bolt finds nothing to strike."),
    }
}

fn throw(target: Position, stage: &mut Stage, messages: &mut MessageLog) {
    let Some((victim, name)) = stage
        .actor_at(target)
        .map(|actor| (actor.id, actor.name.clone()))
    else {
        messages.push_text("Your dagger clatters to the ground.");
        return;
    };
    let Some(hero) = stage.hero().map(|hero| hero.position) else {
        messages.push_warning("There is no one to throw the dagger.");
        return;
    };

    let away = target - hero;
    let step = Offset::new(away.x.signum(), away.y.signum());
    let landing = target + step;

    if stage.move_actor(victim, landing) {
        tracing::info!(id = %victim, from = %target, to = %landing, "monster knocked back");
        messages.push_text(format!("The dagger hits the {name}, knocking it back."));
    } else {
        messages.push_text(format!("The dagger hits the {name}, which stands its ground."));
    }
}
