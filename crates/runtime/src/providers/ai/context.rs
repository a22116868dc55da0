//! Blackboard for the tactical behavior trees.
//!
//! [`AiContext`] is built once per decision and owns everything the nodes
//! look at: the categorized action view, the actor's vitals, the state
//! machine gates, and the precomputed steps toward remembered positions.
//! Nodes never touch the world directly.

use behavior_tree::Status;
use tactics_core::{AiConfig, EntityId, Position, PossibleAction, World, approach_step};

use super::memory::Memory;
use super::view::ActionView;

pub struct AiContext {
    pub actor: EntityId,
    pub position: Option<Position>,
    pub hp: u32,
    pub config: AiConfig,

    /// Entry delay has elapsed.
    pub can_act: bool,
    /// Entry and attack-acquisition delays have both elapsed.
    pub can_attack: bool,

    pub view: ActionView,
    pub memory: Memory,

    /// One cell away from the remembered enemy, when that cell can be entered.
    pub flee_step: Option<Position>,
    /// Next cell on the way to the remembered enemy.
    pub chase_step: Option<Position>,
    /// Next cell on the way to the remembered loot.
    pub loot_step: Option<Position>,

    chosen: Option<PossibleAction>,
}

impl AiContext {
    pub fn new(
        actor: EntityId,
        world: &World,
        view: ActionView,
        memory: Memory,
        config: AiConfig,
    ) -> Self {
        let position = world.position_of(actor);
        let hp = world.human(actor).map_or(0, |human| human.hp);
        let grid = world.grid();

        let (flee_step, chase_step, loot_step) = match position {
            Some(me) => (
                memory.enemy.and_then(|enemy| {
                    let away = Position::new(
                        (me.x - enemy.x).clamp(-1, 1),
                        (me.y - enemy.y).clamp(-1, 1),
                    );
                    let step = me + away;
                    grid.can_enter(step).then_some(step)
                }),
                memory.enemy.and_then(|enemy| approach_step(grid, me, enemy)),
                memory.loot.and_then(|loot| approach_step(grid, me, loot)),
            ),
            None => (None, None, None),
        };

        Self {
            actor,
            position,
            hp,
            config,
            can_act: true,
            can_attack: true,
            view,
            memory,
            flee_step,
            chase_step,
            loot_step,
            chosen: None,
        }
    }

    /// Sets the combat gates (builder pattern).
    pub fn with_gates(mut self, can_act: bool, can_attack: bool) -> Self {
        self.can_act = can_act;
        self.can_attack = can_attack;
        self
    }

    /// Records the action for this turn.
    ///
    /// The first choice sticks; selectors stop at the first success, so a
    /// second call means two branches succeeded in one evaluation.
    pub fn choose(&mut self, action: &PossibleAction) -> Status {
        debug_assert!(
            self.chosen.is_none(),
            "action already chosen for {}",
            self.actor
        );
        if self.chosen.is_none() {
            self.chosen = Some(action.clone());
        }
        Status::Success
    }

    /// Chooses the first action of `candidates`, or fails when there is none.
    pub fn choose_first(&mut self, candidates: fn(&ActionView) -> &[PossibleAction]) -> Status {
        match candidates(&self.view).first().cloned() {
            Some(action) => self.choose(&action),
            None => Status::Failure,
        }
    }

    /// Chooses the offered movement onto `step`, if any.
    pub fn step_to(&mut self, step: Option<Position>) -> Status {
        let Some(step) = step else {
            return Status::Failure;
        };
        match self.view.movement_to(step).cloned() {
            Some(action) => self.choose(&action),
            None => Status::Failure,
        }
    }

    pub fn has_choice(&self) -> bool {
        self.chosen.is_some()
    }

    pub fn take_choice(self) -> Option<PossibleAction> {
        self.chosen
    }

    pub fn can_act(&self) -> bool {
        self.can_act
    }

    pub fn can_attack(&self) -> bool {
        self.can_attack
    }

    /// HP at or below the flee threshold.
    pub fn badly_hurt(&self) -> bool {
        self.hp <= self.config.flee_hp_threshold
    }

    /// HP at or below the heal threshold.
    pub fn needs_healing(&self) -> bool {
        self.hp <= self.config.heal_hp_threshold
    }

    /// Some attack just failed for lack of ammo.
    pub fn out_of_ammo(&self) -> bool {
        self.view.out_of_ammo
    }

    pub fn loot_out_of_reach(&self) -> bool {
        self.view.pickup_out_of_reach()
    }
}
