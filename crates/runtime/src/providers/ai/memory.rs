//! Positions the tactical controller remembers between turns.

use tactics_core::{Position, World, is_reachable};

use super::view::ActionView;

/// Last known enemy and loot positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    pub enemy: Option<Position>,
    pub loot: Option<Position>,
}

impl Memory {
    /// Refreshes both memories from what the actor can see this turn.
    ///
    /// A visible attack target always overwrites the enemy memory. Without
    /// one, the memory survives until the actor stands on or next to the
    /// remembered cell, or the cell can no longer be reached. Loot is only
    /// remembered while some pickup is visible.
    pub fn observe(&mut self, world: &World, me: Option<Position>, view: &ActionView) {
        match view.attack_target.and_then(|target| world.position_of(target)) {
            Some(seen) => self.enemy = Some(seen),
            None => {
                if let (Some(cell), Some(me)) = (self.enemy, me) {
                    let arrived = me.manhattan_distance(cell) <= 1;
                    if arrived || !is_reachable(world.grid(), me, cell) {
                        self.enemy = None;
                    }
                }
            }
        }

        self.loot = view.pickup_target.and_then(|target| world.position_of(target));
    }
}
