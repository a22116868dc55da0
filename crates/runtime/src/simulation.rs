//! Turn loop.
//!
//! One call to [`Simulation::step`] is one round: every living actor,
//! in turn order, discovers its actions, lets its controller decide, and has
//! the decision executed before the next actor moves. Deaths are handled
//! right after each execution.

use tactics_core::{ActionMode, EntityId, ExecutionReport, GameConfig, GameError, World};
use tracing::{debug, error, info, info_span};

use crate::error::{Result, RuntimeError};
use crate::generator::ActionGenerator;
use crate::handlers::DeathHandler;
use crate::registry::ControllerRegistry;

/// What one actor did in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn: u32,
    pub entity: EntityId,
    pub chosen: Option<ActionMode>,
    pub report: Option<ExecutionReport>,
    /// Humans that died as a consequence of this action.
    pub deaths: Vec<EntityId>,
}

pub struct Simulation {
    world: World,
    registry: ControllerRegistry,
    config: GameConfig,
    death: DeathHandler,
    order: Option<Vec<EntityId>>,
    turn: u32,
}

impl Simulation {
    /// Wraps `world` and binds a controller to every actor from its
    /// controller kind.
    pub fn new(world: World, config: GameConfig) -> Self {
        let mut registry = ControllerRegistry::new(config.ai);
        registry.bind_world(&world);
        Self {
            world,
            registry,
            config,
            death: DeathHandler,
            order: None,
            turn: 0,
        }
    }

    /// Replaces the default ascending-id turn order.
    ///
    /// Entities in `order` that are dead or not actors are skipped.
    pub fn with_turn_order(mut self, order: Vec<EntityId>) -> Self {
        self.order = Some(order);
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn registry_mut(&mut self) -> &mut ControllerRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Rounds completed so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    fn turn_order(&self) -> Vec<EntityId> {
        match &self.order {
            Some(order) => order.clone(),
            None => self.world.living_actors(),
        }
    }

    fn can_act(&self, entity: EntityId) -> bool {
        self.world
            .entity(entity)
            .is_some_and(|entity| entity.is_actor() && entity.is_alive())
    }

    /// Runs one round.
    pub fn step(&mut self) -> Result<Vec<TurnRecord>> {
        let mut records = Vec::new();
        for entity in self.turn_order() {
            // Actors killed earlier in the round lose their turn.
            if !self.can_act(entity) {
                continue;
            }
            records.push(self.act(entity)?);
        }
        self.turn += 1;
        Ok(records)
    }

    /// Runs up to `rounds` rounds, capped by `max_turns`, stopping early
    /// once no human is left alive. Traps keep acting but never keep a run
    /// going on their own.
    pub fn run(&mut self, rounds: u32) -> Result<Vec<TurnRecord>> {
        let rounds = rounds.min(self.config.max_turns);
        let mut records = Vec::new();
        for _ in 0..rounds {
            if self.world.living_humans().is_empty() {
                debug!(turn = self.turn, "no living humans left");
                break;
            }
            records.extend(self.step()?);
        }
        Ok(records)
    }

    /// Gives `entity` one action.
    pub fn act(&mut self, entity: EntityId) -> Result<TurnRecord> {
        let span = info_span!("turn", turn = self.turn, entity = %entity);
        let _guard = span.enter();

        if self.world.entity(entity).is_none() {
            return Err(RuntimeError::UnknownEntity(entity));
        }

        let actions = ActionGenerator::discover(&self.world, entity);
        let decision = self
            .registry
            .controller_mut(entity)?
            .decide(entity, &self.world, &actions);

        let mut record = TurnRecord {
            turn: self.turn,
            entity,
            chosen: None,
            report: None,
            deaths: Vec::new(),
        };

        let Some(action) = decision else {
            debug!(available = actions.possible().count(), "no action this turn");
            return Ok(record);
        };

        let report = action.execute(&mut self.world).map_err(|e| {
            error!(code = e.error_code(), error = %e, "invariant violated during execution");
            RuntimeError::from(e)
        })?;
        info!(
            mode = %action.mode(),
            target = %action.context().target(),
            effects = ?report,
            "executed action"
        );

        record.deaths = self.death.handle(&mut self.world)?;
        record.chosen = Some(action.mode());
        record.report = Some(report);
        Ok(record)
    }
}
