use crate::action::capability::ModeCapability;
use crate::action::context::ModeContext;
use crate::action::failure::ActionFailure;
use crate::action::interaction::{InteractionDefinition, InteractionTable};
use crate::action::mode::{ActionMode, TargetType};
use crate::action::outcome::Effect;
use crate::state::{EntityId, EntityKind, ItemId, World, WorldError};

use super::check_reach;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickUpContext {
    pub actor: EntityId,
    pub target: EntityId,
}

impl PickUpContext {
    pub fn new(actor: EntityId, target: EntityId) -> Self {
        Self { actor, target }
    }
}

impl ModeContext for PickUpContext {
    const MODE: ActionMode = ActionMode::PickUp;

    fn source(&self) -> EntityId {
        self.actor
    }

    fn target(&self) -> EntityId {
        self.target
    }

    fn definition(table: &InteractionTable) -> Option<InteractionDefinition<Self>> {
        table.pickup
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickUpCapability;

impl ModeCapability for PickUpCapability {
    type Context = PickUpContext;

    fn source_item(&self) -> Option<ItemId> {
        None
    }

    fn target_type(&self) -> TargetType {
        TargetType::OthersOnly
    }

    /// Presence is checked before distance: a vanished target is gone no
    /// matter how close the actor stands.
    fn check_outside(&self, world: &World, context: &PickUpContext) -> Result<(), ActionFailure> {
        let recorded = world
            .position_of(context.target)
            .ok_or(ActionFailure::EntityGone)?;
        if world.grid().entity_at(recorded) != Some(context.target) {
            return Err(ActionFailure::EntityGone);
        }
        check_reach(world, context.actor, context.target)
    }
}

pub(crate) const ITEM_DROP: InteractionDefinition<PickUpContext> =
    InteractionDefinition::new(still_present, collect);

fn still_present(
    world: &World,
    owner: EntityId,
    _context: &PickUpContext,
) -> Result<(), ActionFailure> {
    match world.entity(owner).map(|entity| &entity.kind) {
        Some(EntityKind::ItemDrop(drop)) if drop.present => Ok(()),
        _ => Err(ActionFailure::EntityGone),
    }
}

/// Moves the dropped item into the actor's inventory and takes the drop off the grid.
fn collect(
    world: &mut World,
    owner: EntityId,
    context: &PickUpContext,
) -> Result<Effect, WorldError> {
    world.inventory_mut(context.actor)?;
    let item = match &mut world.entity_mut(owner)?.kind {
        EntityKind::ItemDrop(drop) if drop.present => {
            drop.present = false;
            drop.item
        }
        _ => return Ok(Effect::None),
    };
    world.remove_from_grid(owner)?;
    world.inventory_mut(context.actor)?.add(item);
    Ok(Effect::PickedUp { item })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::kinds::fixtures;
    use crate::action::{Action, Capability};
    use crate::state::{ItemDrop, ItemKind, Position};

    fn drop_at(world: &mut World, at: Position) -> (EntityId, ItemId) {
        let med = world.add_item("med-kit", ItemKind::MedKit { heal_amount: 25 });
        let id = world.spawn(at, EntityKind::ItemDrop(ItemDrop::new(med))).unwrap();
        (id, med)
    }

    #[test]
    fn pickup_moves_item_and_clears_cell() {
        let mut world = fixtures::arena();
        let hero = fixtures::bystander(&mut world, Position::new(1, 1));
        let (drop, med) = drop_at(&mut world, Position::new(1, 2));

        let context = PickUpContext::new(hero, drop);
        let Some(Action::Possible(action)) =
            Capability::PickUp(PickUpCapability).validate(&world, &context.into())
        else {
            panic!("expected a possible pickup");
        };
        let report = action.execute(&mut world).unwrap();

        assert_eq!(report.target, Effect::PickedUp { item: med });
        assert!(world.human(hero).unwrap().inventory.contains(med));
        assert_eq!(world.grid().entity_at(Position::new(1, 2)), None);
        assert!(!world.entity(drop).unwrap().is_alive());
    }

    #[test]
    fn vanished_drop_is_gone_regardless_of_distance() {
        let mut world = fixtures::arena();
        let hero = fixtures::bystander(&mut world, Position::new(1, 1));
        let (near, _) = drop_at(&mut world, Position::new(1, 2));
        let (far, _) = drop_at(&mut world, Position::new(3, 3));
        world.remove_from_grid(near).unwrap();
        world.remove_from_grid(far).unwrap();

        for target in [near, far] {
            let action = Capability::PickUp(PickUpCapability)
                .validate(&world, &PickUpContext::new(hero, target).into())
                .unwrap();
            assert_eq!(action.failure(), Some(ActionFailure::EntityGone));
        }
    }

    #[test]
    fn distant_drop_is_too_far() {
        let mut world = fixtures::arena();
        let hero = fixtures::bystander(&mut world, Position::new(1, 1));
        let (drop, _) = drop_at(&mut world, Position::new(3, 3));

        let action = Capability::PickUp(PickUpCapability)
            .validate(&world, &PickUpContext::new(hero, drop).into())
            .unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::TooFar));
    }
}
