use crate::action::capability::ModeCapability;
use crate::action::context::ModeContext;
use crate::action::failure::ActionFailure;
use crate::action::interaction::{InteractionDefinition, InteractionTable};
use crate::action::mode::{ActionMode, TargetType};
use crate::action::outcome::Effect;
use crate::state::{EntityId, ItemId, World, WorldError};

use super::check_reach;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InventoryOperation {
    View,
    /// Source puts an item into the target.
    Add,
    /// Source takes an item out of the target.
    Remove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryContext {
    pub actor: EntityId,
    pub target: EntityId,
    pub item: Option<ItemId>,
    pub operation: InventoryOperation,
}

impl InventoryContext {
    pub fn view(actor: EntityId, target: EntityId) -> Self {
        Self {
            actor,
            target,
            item: None,
            operation: InventoryOperation::View,
        }
    }

    pub fn add(actor: EntityId, target: EntityId, item: ItemId) -> Self {
        Self {
            actor,
            target,
            item: Some(item),
            operation: InventoryOperation::Add,
        }
    }

    pub fn remove(actor: EntityId, target: EntityId, item: ItemId) -> Self {
        Self {
            actor,
            target,
            item: Some(item),
            operation: InventoryOperation::Remove,
        }
    }
}

impl ModeContext for InventoryContext {
    const MODE: ActionMode = ActionMode::Inventory;

    fn source(&self) -> EntityId {
        self.actor
    }

    fn target(&self) -> EntityId {
        self.target
    }

    fn item(&self) -> Option<ItemId> {
        self.item
    }

    fn definition(table: &InteractionTable) -> Option<InteractionDefinition<Self>> {
        table.inventory
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryCapability;

impl ModeCapability for InventoryCapability {
    type Context = InventoryContext;

    fn source_item(&self) -> Option<ItemId> {
        None
    }

    fn target_type(&self) -> TargetType {
        TargetType::Any
    }

    fn check_outside(
        &self,
        world: &World,
        context: &InventoryContext,
    ) -> Result<(), ActionFailure> {
        check_reach(world, context.actor, context.target)
    }
}

/// A human's own inventory: only its owner may look, and only look.
pub(crate) const HUMAN: InteractionDefinition<InventoryContext> =
    InteractionDefinition::new(owner_view_only, snapshot);

/// Chests and corpses: anyone in reach may view, deposit, or withdraw.
pub(crate) const CONTAINER: InteractionDefinition<InventoryContext> =
    InteractionDefinition::new(check_transfer, transfer);

fn owner_view_only(
    _world: &World,
    owner: EntityId,
    context: &InventoryContext,
) -> Result<(), ActionFailure> {
    if context.actor == owner && context.operation == InventoryOperation::View {
        Ok(())
    } else {
        Err(ActionFailure::InternalOnlyInteraction)
    }
}

fn snapshot(
    world: &mut World,
    owner: EntityId,
    _context: &InventoryContext,
) -> Result<Effect, WorldError> {
    let items = world
        .entity(owner)
        .and_then(|entity| entity.inventory())
        .ok_or(WorldError::NoInventory(owner))?
        .snapshot();
    Ok(Effect::InventoryViewed { owner, items })
}

fn check_transfer(
    world: &World,
    owner: EntityId,
    context: &InventoryContext,
) -> Result<(), ActionFailure> {
    let holds = |entity: EntityId, item: ItemId| {
        world
            .entity(entity)
            .and_then(|entity| entity.inventory())
            .is_some_and(|inventory| inventory.contains(item))
    };
    match (context.operation, context.item) {
        (InventoryOperation::View, _) => Ok(()),
        (_, None) => Err(ActionFailure::MissingItem),
        (InventoryOperation::Add, Some(item)) if !holds(context.actor, item) => {
            Err(ActionFailure::ItemNotPresent)
        }
        (InventoryOperation::Remove, Some(item)) if !holds(owner, item) => {
            Err(ActionFailure::ItemNotInContainer)
        }
        _ => Ok(()),
    }
}

fn transfer(
    world: &mut World,
    owner: EntityId,
    context: &InventoryContext,
) -> Result<Effect, WorldError> {
    let (from, to) = match context.operation {
        InventoryOperation::View => return snapshot(world, owner, context),
        InventoryOperation::Add => (context.actor, owner),
        InventoryOperation::Remove => (owner, context.actor),
    };
    let Some(item) = context.item else {
        return Ok(Effect::None);
    };
    // Resolve both inventories before mutating either.
    world.inventory_mut(to)?;
    if !world.inventory_mut(from)?.remove(item) {
        return Ok(Effect::None);
    }
    world.inventory_mut(to)?.add(item);
    Ok(Effect::ItemTransferred { item, from, to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::kinds::fixtures;
    use crate::action::{Action, Capability};
    use crate::state::{Container, EntityKind, Human, Inventory, ItemKind, Position};

    #[test]
    fn chest_out_of_reach_is_too_far() {
        let mut world = fixtures::arena();
        let hero = fixtures::bystander(&mut world, Position::new(1, 1));
        let chest = world
            .spawn(Position::new(3, 3), EntityKind::Chest(Container::default()))
            .unwrap();

        let action = Capability::Inventory(InventoryCapability)
            .validate(&world, &InventoryContext::view(hero, chest).into())
            .unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::TooFar));
    }

    #[test]
    fn other_humans_inventory_is_internal_only() {
        let mut world = fixtures::arena();
        let hero = fixtures::bystander(&mut world, Position::new(1, 1));
        let other = fixtures::bystander(&mut world, Position::new(1, 2));

        let action = Capability::Inventory(InventoryCapability)
            .validate(&world, &InventoryContext::view(hero, other).into())
            .unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::InternalOnlyInteraction));
    }

    #[test]
    fn withdraw_from_chest_moves_item() {
        let mut world = fixtures::arena();
        let gem = world.add_item("gem", ItemKind::Artefact);
        let hero = fixtures::bystander(&mut world, Position::new(1, 1));
        let chest = world
            .spawn(
                Position::new(2, 1),
                EntityKind::Chest(Container::new(Inventory::with_items([(gem, 1)]))),
            )
            .unwrap();

        let context = InventoryContext::remove(hero, chest, gem);
        let Some(Action::Possible(action)) =
            Capability::Inventory(InventoryCapability).validate(&world, &context.into())
        else {
            panic!("expected a possible withdrawal");
        };
        action.execute(&mut world).unwrap();

        assert!(world.human(hero).unwrap().inventory.contains(gem));
        let chest_inventory = world.entity(chest).and_then(|e| e.inventory()).unwrap();
        assert!(chest_inventory.is_empty());

        let again = Capability::Inventory(InventoryCapability)
            .validate(&world, &context.into())
            .unwrap();
        assert_eq!(again.failure(), Some(ActionFailure::ItemNotInContainer));
    }

    fn carrier(world: &mut World, at: Position, item: ItemId) -> EntityId {
        let human = Human::new(100).with_inventory(Inventory::with_items([(item, 1)]));
        world.spawn(at, EntityKind::Human(human)).unwrap()
    }

    #[test]
    fn deposit_into_chest_moves_item() {
        let mut world = fixtures::arena();
        let gem = world.add_item("gem", ItemKind::Artefact);
        let hero = carrier(&mut world, Position::new(1, 1), gem);
        let chest = world
            .spawn(Position::new(1, 2), EntityKind::Chest(Container::default()))
            .unwrap();

        let context = InventoryContext::add(hero, chest, gem);
        let Some(Action::Possible(action)) =
            Capability::Inventory(InventoryCapability).validate(&world, &context.into())
        else {
            panic!("expected a possible deposit");
        };
        let report = action.execute(&mut world).unwrap();

        assert_eq!(
            report.effects().next(),
            Some(&Effect::ItemTransferred {
                item: gem,
                from: hero,
                to: chest,
            })
        );
        assert!(!world.human(hero).unwrap().inventory.contains(gem));
        let chest_inventory = world.entity(chest).and_then(|e| e.inventory()).unwrap();
        assert!(chest_inventory.contains(gem));
    }

    #[test]
    fn deposit_requires_carrying_the_item() {
        let mut world = fixtures::arena();
        let gem = world.add_item("gem", ItemKind::Artefact);
        let hero = fixtures::bystander(&mut world, Position::new(1, 1));
        let chest = world
            .spawn(Position::new(2, 1), EntityKind::Chest(Container::default()))
            .unwrap();

        let action = Capability::Inventory(InventoryCapability)
            .validate(&world, &InventoryContext::add(hero, chest, gem).into())
            .unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::ItemNotPresent));
    }

    #[test]
    fn deposit_into_distant_chest_is_too_far() {
        let mut world = fixtures::arena();
        let gem = world.add_item("gem", ItemKind::Artefact);
        let hero = carrier(&mut world, Position::new(1, 1), gem);
        let chest = world
            .spawn(Position::new(3, 3), EntityKind::Chest(Container::default()))
            .unwrap();

        let action = Capability::Inventory(InventoryCapability)
            .validate(&world, &InventoryContext::add(hero, chest, gem).into())
            .unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::TooFar));
        assert!(world.human(hero).unwrap().inventory.contains(gem));
    }
}
