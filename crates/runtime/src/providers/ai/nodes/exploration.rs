//! Non-combat behaviors, highest priority first.

use behavior_tree::{Behavior, Status};

use crate::providers::ai::{ActionView, AiContext};

/// Heals whenever a heal is possible, i.e. whenever the actor is hurt.
pub struct Recover;

impl Behavior<AiContext> for Recover {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.choose_first(ActionView::heals)
    }
}

/// Tops up any weapon that can take more rounds.
pub struct TopUp;

impl Behavior<AiContext> for TopUp {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.choose_first(ActionView::reloads)
    }
}

pub struct PickUpLoot;

impl Behavior<AiContext> for PickUpLoot {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.choose_first(ActionView::pickups)
    }
}

/// Walks toward loot that was seen but could not be picked up yet.
pub struct ApproachLoot;

impl Behavior<AiContext> for ApproachLoot {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.step_to(ctx.loot_step)
    }
}

/// Placeholder for idle movement; currently never acts.
pub struct Wander;

impl Behavior<AiContext> for Wander {
    fn tick(&self, _ctx: &mut AiContext) -> Status {
        Status::Failure
    }
}
