//! Item use as a gate around another mode's interaction.
//!
//! The wrapped context keeps its own rules: once the item is confirmed to be
//! carried (and worn, when a slot is required) the inner context's
//! source-side and target-side validators and hooks run unchanged.

use crate::action::capability::ModeCapability;
use crate::action::context::{ActionContext, ModeContext};
use crate::action::failure::ActionFailure;
use crate::action::interaction::{InteractionDefinition, InteractionTable};
use crate::action::mode::{ActionMode, TargetType};
use crate::action::outcome::Effect;
use crate::state::{EntityId, EquipmentSlot, ItemId, World, WorldError};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemContext {
    pub actor: EntityId,
    pub item: ItemId,
    pub required_slot: Option<EquipmentSlot>,
    pub inner: Box<ActionContext>,
}

impl UseItemContext {
    pub fn new(actor: EntityId, item: ItemId, inner: impl Into<ActionContext>) -> Self {
        Self {
            actor,
            item,
            required_slot: None,
            inner: Box::new(inner.into()),
        }
    }

    pub fn requiring_slot(mut self, slot: EquipmentSlot) -> Self {
        self.required_slot = Some(slot);
        self
    }
}

impl ModeContext for UseItemContext {
    const MODE: ActionMode = ActionMode::UseItem;

    fn source(&self) -> EntityId {
        self.actor
    }

    fn target(&self) -> EntityId {
        self.actor
    }

    fn item(&self) -> Option<ItemId> {
        Some(self.item)
    }

    fn definition(table: &InteractionTable) -> Option<InteractionDefinition<Self>> {
        table.use_item
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemCapability {
    pub item: ItemId,
}

impl UseItemCapability {
    pub fn new(item: ItemId) -> Self {
        Self { item }
    }
}

impl ModeCapability for UseItemCapability {
    type Context = UseItemContext;

    fn source_item(&self) -> Option<ItemId> {
        Some(self.item)
    }

    fn target_type(&self) -> TargetType {
        TargetType::SelfOnly
    }

    fn check_outside(&self, _world: &World, context: &UseItemContext) -> Result<(), ActionFailure> {
        if context.item == self.item {
            Ok(())
        } else {
            Err(ActionFailure::ItemMismatch)
        }
    }
}

pub(crate) const HUMAN: InteractionDefinition<UseItemContext> =
    InteractionDefinition::new(check_gate, run_inner);

fn check_gate(
    world: &World,
    owner: EntityId,
    context: &UseItemContext,
) -> Result<(), ActionFailure> {
    let human = world.human(owner).ok_or(ActionFailure::ItemNotPresent)?;
    if !human.carries(context.item) {
        return Err(ActionFailure::ItemNotPresent);
    }
    let worn = context
        .required_slot
        .is_none_or(|slot| human.equipment.is_equipped(slot, context.item));
    if !worn {
        return Err(ActionFailure::ItemNotEquipped);
    }
    if context.inner.source() != context.actor || context.inner.item() != Some(context.item) {
        return Err(ActionFailure::ItemMismatch);
    }
    context.inner.check_inside(world)
}

fn run_inner(
    world: &mut World,
    _owner: EntityId,
    context: &UseItemContext,
) -> Result<Effect, WorldError> {
    let report = context.inner.run_hooks(world)?;
    Ok(Effect::Delegated(Box::new(report)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::kinds::fixtures;
    use crate::action::kinds::heal::HealContext;
    use crate::action::outcome::ExecutionReport;
    use crate::action::{Action, Capability};
    use crate::state::{EntityKind, Human, ItemKind, Position};

    #[test]
    fn use_item_delegates_to_heal() {
        let mut world = fixtures::arena();
        let kit = world.add_item("med-kit", ItemKind::MedKit { heal_amount: 15 });
        let mut human = Human::new(100).with_hp(50);
        human.inventory.add(kit);
        let hero = world.spawn(Position::new(2, 2), EntityKind::Human(human)).unwrap();

        let heal = HealContext::with_kit(&world, hero, kit).unwrap();
        let context = UseItemContext::new(hero, kit, heal);
        let Some(Action::Possible(action)) =
            Capability::UseItem(UseItemCapability::new(kit)).validate(&world, &context.into())
        else {
            panic!("expected a possible item use");
        };
        let report = action.execute(&mut world).unwrap();

        assert_eq!(
            report.target,
            Effect::Delegated(Box::new(ExecutionReport {
                source: Effect::Consumed { item: kit },
                target: Effect::Healed {
                    target: hero,
                    amount: 15
                },
            }))
        );
        assert_eq!(world.human(hero).unwrap().hp, 65);
    }

    #[test]
    fn slot_bound_use_requires_item_equipped() {
        let mut world = fixtures::arena();
        let kit = world.add_item("med-kit", ItemKind::MedKit { heal_amount: 15 });
        let mut human = Human::new(100).with_hp(50);
        human.inventory.add(kit);
        let hero = world.spawn(Position::new(2, 2), EntityKind::Human(human)).unwrap();

        let heal = HealContext::with_kit(&world, hero, kit).unwrap();
        let context =
            UseItemContext::new(hero, kit, heal).requiring_slot(EquipmentSlot::Artefact);
        let action = Capability::UseItem(UseItemCapability::new(kit))
            .validate(&world, &context.into())
            .unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::ItemNotEquipped));
    }

    #[test]
    fn missing_item_is_not_present() {
        let mut world = fixtures::arena();
        let kit = world.add_item("med-kit", ItemKind::MedKit { heal_amount: 15 });
        let mut human = Human::new(100).with_hp(50);
        human.inventory.add(kit);
        let hero = world.spawn(Position::new(2, 2), EntityKind::Human(human)).unwrap();
        let heal = HealContext::with_kit(&world, hero, kit).unwrap();
        let context = UseItemContext::new(hero, kit, heal);

        // Dropping the kit also drops the capability it granted.
        let capability = UseItemCapability::new(kit);
        world.human_mut(hero).unwrap().inventory.remove(kit);
        assert_eq!(
            check_gate(&world, hero, &context),
            Err(ActionFailure::ItemNotPresent)
        );
        assert!(
            Capability::UseItem(capability)
                .validate(&world, &context.into())
                .is_none()
        );
    }
}
