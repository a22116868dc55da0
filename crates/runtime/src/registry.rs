//! Controller registry.
//!
//! Maps actors to their controllers. Bindings are resolved from each actor's
//! [`ControllerKind`] by [`bind_world`](ControllerRegistry::bind_world) and can
//! be overridden one entity at a time.
//!
//! ```text
//! ControllerRegistry
//! ├── controllers: BTreeMap<EntityId, Box<dyn Controller>>
//! └── config: AiConfig  (handed to every tactical controller it creates)
//! ```

use std::collections::BTreeMap;

use tactics_core::{
    AiConfig, Controller, ControllerKind, EntityId, FirstPossibleController, NoopController,
    TriggerController, World,
};
use tracing::debug;

use crate::error::{Result, RuntimeError};
use crate::providers::ai::TacticalController;

pub struct ControllerRegistry {
    controllers: BTreeMap<EntityId, Box<dyn Controller>>,
    config: AiConfig,
}

impl ControllerRegistry {
    pub fn new(config: AiConfig) -> Self {
        Self {
            controllers: BTreeMap::new(),
            config,
        }
    }

    /// Binds a controller to one entity, replacing any previous binding.
    pub fn bind(&mut self, entity: EntityId, controller: Box<dyn Controller>) {
        self.controllers.insert(entity, controller);
    }

    pub fn unbind(&mut self, entity: EntityId) -> Option<Box<dyn Controller>> {
        self.controllers.remove(&entity)
    }

    pub fn is_bound(&self, entity: EntityId) -> bool {
        self.controllers.contains_key(&entity)
    }

    /// Creates controllers for every actor that has none yet.
    ///
    /// `External` actors are skipped; whoever drives them binds a controller
    /// explicitly.
    pub fn bind_world(&mut self, world: &World) {
        for entity in world.entities() {
            let Some(actor) = entity.actor() else {
                continue;
            };
            if self.is_bound(entity.id) {
                continue;
            }
            if let Some(controller) = self.resolve(actor.controller) {
                debug!(entity = %entity.id, kind = ?actor.controller, "bound controller");
                self.controllers.insert(entity.id, controller);
            }
        }
    }

    pub fn controller_mut(&mut self, entity: EntityId) -> Result<&mut (dyn Controller + 'static)> {
        self.controllers
            .get_mut(&entity)
            .map(|controller| controller.as_mut())
            .ok_or(RuntimeError::ControllerNotBound(entity))
    }

    fn resolve(&self, kind: ControllerKind) -> Option<Box<dyn Controller>> {
        match kind {
            ControllerKind::Noop => Some(Box::new(NoopController)),
            ControllerKind::FirstPossible => Some(Box::new(FirstPossibleController)),
            ControllerKind::Tactical => Some(Box::new(TacticalController::new(self.config))),
            ControllerKind::Trigger => Some(Box::new(TriggerController)),
            ControllerKind::External => None,
        }
    }
}

impl Default for ControllerRegistry {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{EntityKind, Grid, Human, Position, Trap};

    #[test]
    fn binds_by_controller_kind_and_skips_external() {
        let mut world = World::new(Grid::walled(5, 5));
        let hero = world
            .spawn(Position::new(1, 1), EntityKind::Human(Human::new(10)))
            .unwrap();
        let trap = world
            .spawn(Position::new(2, 2), EntityKind::Trap(Trap { damage: 3 }))
            .unwrap();
        let puppet = world
            .spawn_actor(
                Position::new(3, 3),
                EntityKind::Human(Human::new(10)),
                ControllerKind::External,
            )
            .unwrap();

        let mut registry = ControllerRegistry::default();
        registry.bind_world(&world);

        assert!(registry.is_bound(hero));
        assert!(registry.is_bound(trap));
        assert!(matches!(
            registry.controller_mut(puppet),
            Err(RuntimeError::ControllerNotBound(id)) if id == puppet
        ));

        registry.bind(puppet, Box::new(NoopController));
        assert!(registry.controller_mut(puppet).is_ok());
    }
}
