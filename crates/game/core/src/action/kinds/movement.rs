use crate::action::capability::ModeCapability;
use crate::action::context::ModeContext;
use crate::action::failure::ActionFailure;
use crate::action::interaction::{InteractionDefinition, InteractionTable, accept};
use crate::action::mode::{ActionMode, TargetType};
use crate::action::outcome::Effect;
use crate::state::{Direction, EntityId, ItemId, Position, World, WorldError};

/// Single-cell relocation of the acting entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementContext {
    pub actor: EntityId,
    pub destination: Position,
}

impl MovementContext {
    pub fn new(actor: EntityId, destination: Position) -> Self {
        Self { actor, destination }
    }

    /// Context for one step from `origin` in `direction`.
    pub fn step(actor: EntityId, origin: Position, direction: Direction) -> Self {
        Self::new(actor, origin.step(direction))
    }
}

impl ModeContext for MovementContext {
    const MODE: ActionMode = ActionMode::Movement;

    fn source(&self) -> EntityId {
        self.actor
    }

    fn target(&self) -> EntityId {
        self.actor
    }

    fn definition(table: &InteractionTable) -> Option<InteractionDefinition<Self>> {
        table.movement
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementCapability;

impl ModeCapability for MovementCapability {
    type Context = MovementContext;

    fn source_item(&self) -> Option<ItemId> {
        None
    }

    fn target_type(&self) -> TargetType {
        TargetType::SelfOnly
    }

    fn check_outside(&self, world: &World, context: &MovementContext) -> Result<(), ActionFailure> {
        if world.grid().can_enter(context.destination) {
            Ok(())
        } else {
            Err(ActionFailure::Blocked)
        }
    }
}

pub(crate) const HUMAN: InteractionDefinition<MovementContext> =
    InteractionDefinition::new(accept, move_on_grid);

fn move_on_grid(
    world: &mut World,
    owner: EntityId,
    context: &MovementContext,
) -> Result<Effect, WorldError> {
    let from = world
        .position_of(owner)
        .ok_or(WorldError::EntityNotFound(owner))?;
    world.move_entity(owner, context.destination)?;
    Ok(Effect::Moved {
        from,
        to: context.destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::kinds::fixtures;
    use crate::action::{Action, Capability};

    #[test]
    fn step_onto_wall_is_blocked() {
        let mut world = fixtures::arena();
        let walker = fixtures::bystander(&mut world, Position::new(1, 1));
        let capability = Capability::Movement(MovementCapability);

        let context = MovementContext::step(walker, Position::new(1, 1), Direction::North);
        let action = capability.validate(&world, &context.into()).unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::Blocked));
    }

    #[test]
    fn possible_move_relocates_on_execute() {
        let mut world = fixtures::arena();
        let walker = fixtures::bystander(&mut world, Position::new(1, 1));
        let capability = Capability::Movement(MovementCapability);

        let context = MovementContext::step(walker, Position::new(1, 1), Direction::East);
        let Some(Action::Possible(action)) = capability.validate(&world, &context.into()) else {
            panic!("expected a possible move");
        };
        let report = action.execute(&mut world).unwrap();

        assert_eq!(world.position_of(walker), Some(Position::new(2, 1)));
        assert_eq!(
            report.target,
            Effect::Moved {
                from: Position::new(1, 1),
                to: Position::new(2, 1)
            }
        );
    }
}
