//! The tactical controller: a two-state machine over priority selectors.

use behavior_tree::{Behavior, Selector};
use tactics_core::{
    AiConfig, Controller, EntityId, Position, PossibleAction, PotentialActions, World,
};
use tracing::debug;

use super::context::AiContext;
use super::memory::Memory;
use super::presets;
use super::state::{AiState, AiStateKind, CombatCounters};
use super::view::ActionView;

/// Combat/non-combat controller for human actors.
///
/// # State machine
///
/// - Starts in `NonCombat`.
/// - Enters `Combat` as soon as any attack, possible or not, is discovered.
///   Entering resets the entry, attack-acquisition and exit counters.
/// - Every combat update first counts both delays down, then evaluates the
///   combat tree, then settles the exit counter: a visible attack or a
///   remembered enemy rearms it, a quiet update counts it down, and reaching
///   zero returns to `NonCombat`.
///
/// Returning `None` from [`decide`](Controller::decide) is a normal outcome.
pub struct TacticalController {
    config: AiConfig,
    state: AiState,
    memory: Memory,
    combat: Selector<AiContext>,
    exploration: Selector<AiContext>,
}

impl TacticalController {
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            state: AiState::default(),
            memory: Memory::default(),
            combat: presets::combat(),
            exploration: presets::exploration(),
        }
    }

    pub fn state(&self) -> AiStateKind {
        self.state.kind()
    }

    pub fn counters(&self) -> Option<CombatCounters> {
        match self.state {
            AiState::Combat(counters) => Some(counters),
            AiState::NonCombat => None,
        }
    }

    pub fn memory(&self) -> Memory {
        self.memory
    }

    pub fn remember_enemy(&mut self, position: Position) {
        self.memory.enemy = Some(position);
    }

    pub fn forget_enemy(&mut self) {
        self.memory.enemy = None;
    }

    fn enter_combat(&mut self, actor: EntityId) {
        debug!(actor = %actor, from = %self.state.kind(), "entering combat");
        self.state = AiState::Combat(CombatCounters::enter(&self.config));
    }
}

impl Default for TacticalController {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

impl Controller for TacticalController {
    fn decide(
        &mut self,
        actor: EntityId,
        world: &World,
        actions: &PotentialActions,
    ) -> Option<PossibleAction> {
        let view = ActionView::new(actions);
        self.memory.observe(world, world.position_of(actor), &view);

        if view.any_attack_seen() && !self.state.is_combat() {
            self.enter_combat(actor);
        }

        let mut leave_combat = false;
        let chosen = match &mut self.state {
            AiState::Combat(counters) => {
                counters.tick();
                let mut ctx = AiContext::new(actor, world, view, self.memory, self.config)
                    .with_gates(counters.can_act(), counters.can_attack());
                self.combat.tick(&mut ctx);

                let engaged = ctx.view.any_attack_seen() || self.memory.enemy.is_some();
                leave_combat = counters.settle(engaged, self.config.combat_exit_delay);
                debug!(
                    actor = %actor,
                    entry = counters.entry_delay(),
                    attack = counters.attack_delay(),
                    chosen = ctx.has_choice(),
                    "combat update"
                );
                ctx.take_choice()
            }
            AiState::NonCombat => {
                let mut ctx = AiContext::new(actor, world, view, self.memory, self.config);
                self.exploration.tick(&mut ctx);
                ctx.take_choice()
            }
        };

        if leave_combat {
            debug!(actor = %actor, "leaving combat");
            self.state = AiState::NonCombat;
        }
        chosen
    }
}
