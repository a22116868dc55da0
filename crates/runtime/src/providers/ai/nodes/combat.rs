//! Combat behaviors, highest priority first.

use behavior_tree::{Behavior, Status};

use crate::providers::ai::{ActionView, AiContext};

/// Steps directly away from the remembered enemy.
///
/// Fails when that cell is blocked or lies diagonally, since only
/// orthogonal moves are offered.
pub struct Flee;

impl Behavior<AiContext> for Flee {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.step_to(ctx.flee_step)
    }
}

pub struct MeleeAttack;

impl Behavior<AiContext> for MeleeAttack {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.choose_first(ActionView::melee)
    }
}

pub struct RangedAttack;

impl Behavior<AiContext> for RangedAttack {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.choose_first(ActionView::ranged)
    }
}

pub struct PatchUp;

impl Behavior<AiContext> for PatchUp {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.choose_first(ActionView::heals)
    }
}

pub struct ReloadWhenDry;

impl Behavior<AiContext> for ReloadWhenDry {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.choose_first(ActionView::reloads)
    }
}

/// Closes in on the remembered enemy.
pub struct Chase;

impl Behavior<AiContext> for Chase {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.step_to(ctx.chase_step)
    }
}
