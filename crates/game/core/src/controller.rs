//! Per-actor decision makers.
//!
//! A controller receives one turn's [`PotentialActions`] and picks at most one
//! possible action. Returning `None` means "no action this turn" and is a
//! normal outcome.

use crate::action::{ActionMode, PossibleAction, PotentialActions};
use crate::state::{EntityId, World};

pub trait Controller: Send {
    fn decide(
        &mut self,
        actor: EntityId,
        world: &World,
        actions: &PotentialActions,
    ) -> Option<PossibleAction>;
}

/// Never acts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopController;

impl Controller for NoopController {
    fn decide(&mut self, _: EntityId, _: &World, _: &PotentialActions) -> Option<PossibleAction> {
        None
    }
}

/// Takes the first possible action in mode order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPossibleController;

impl Controller for FirstPossibleController {
    fn decide(
        &mut self,
        _: EntityId,
        _: &World,
        actions: &PotentialActions,
    ) -> Option<PossibleAction> {
        actions.possible().next().cloned()
    }
}

/// Fires the first possible attack whose target stands next to the actor.
///
/// Traps use it: their attack has unlimited reach, so the trigger radius
/// lives here.
#[derive(Clone, Copy, Debug, Default)]
pub struct TriggerController;

impl Controller for TriggerController {
    fn decide(
        &mut self,
        actor: EntityId,
        world: &World,
        actions: &PotentialActions,
    ) -> Option<PossibleAction> {
        let origin = world.position_of(actor)?;
        actions
            .possible_for_mode(ActionMode::Attack)
            .find(|action| {
                world
                    .position_of(action.context().target())
                    .is_some_and(|target| origin.manhattan_distance(target) <= 1)
            })
            .cloned()
    }
}

/// Rotates through `order`, taking the first possible action of the next mode
/// that has one.
#[derive(Clone, Debug)]
pub struct RoundRobinController {
    order: Vec<ActionMode>,
    cursor: usize,
}

impl RoundRobinController {
    pub fn new(order: Vec<ActionMode>) -> Self {
        Self { order, cursor: 0 }
    }
}

impl Default for RoundRobinController {
    fn default() -> Self {
        Self::new(ActionMode::ALL.to_vec())
    }
}

impl Controller for RoundRobinController {
    fn decide(
        &mut self,
        _: EntityId,
        _: &World,
        actions: &PotentialActions,
    ) -> Option<PossibleAction> {
        let len = self.order.len();
        for offset in 0..len {
            let slot = (self.cursor + offset) % len;
            if let Some(action) = actions.possible_for_mode(self.order[slot]).next() {
                self.cursor = (slot + 1) % len;
                return Some(action.clone());
            }
        }
        None
    }
}
