use crate::action::capability::ModeCapability;
use crate::action::context::ModeContext;
use crate::action::failure::ActionFailure;
use crate::action::interaction::{InteractionDefinition, InteractionTable};
use crate::action::mode::{ActionMode, TargetType};
use crate::action::outcome::Effect;
use crate::state::{EntityId, EquipmentSlot, ItemId, World, WorldError};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipOperation {
    Equip,
    Unequip,
}

/// Moves an item between the actor's inventory and one of its slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipContext {
    pub actor: EntityId,
    pub item: Option<ItemId>,
    pub slot: EquipmentSlot,
    pub operation: EquipOperation,
}

impl EquipContext {
    pub fn equip(actor: EntityId, item: ItemId, slot: EquipmentSlot) -> Self {
        Self {
            actor,
            item: Some(item),
            slot,
            operation: EquipOperation::Equip,
        }
    }

    pub fn unequip(actor: EntityId, slot: EquipmentSlot) -> Self {
        Self {
            actor,
            item: None,
            slot,
            operation: EquipOperation::Unequip,
        }
    }
}

impl ModeContext for EquipContext {
    const MODE: ActionMode = ActionMode::Equip;

    fn source(&self) -> EntityId {
        self.actor
    }

    fn target(&self) -> EntityId {
        self.actor
    }

    fn item(&self) -> Option<ItemId> {
        self.item
    }

    fn definition(table: &InteractionTable) -> Option<InteractionDefinition<Self>> {
        table.equip
    }
}

/// Bound to the item it equips; the unbound form only unequips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipCapability {
    pub source_item: Option<ItemId>,
}

impl EquipCapability {
    pub fn unequip() -> Self {
        Self { source_item: None }
    }

    pub fn for_item(item: ItemId) -> Self {
        Self {
            source_item: Some(item),
        }
    }
}

impl ModeCapability for EquipCapability {
    type Context = EquipContext;

    fn source_item(&self) -> Option<ItemId> {
        self.source_item
    }

    fn target_type(&self) -> TargetType {
        TargetType::SelfOnly
    }

    fn check_outside(&self, world: &World, context: &EquipContext) -> Result<(), ActionFailure> {
        match context.operation {
            EquipOperation::Equip => {
                let Some(handle) = context.item else {
                    return Err(ActionFailure::MissingItem);
                };
                if self.source_item != Some(handle) {
                    return Err(ActionFailure::ItemMismatch);
                }
                let item = world.item(handle).ok_or(ActionFailure::MissingItem)?;
                if item.slot() != Some(context.slot) {
                    return Err(ActionFailure::InvalidSlot);
                }
                Ok(())
            }
            EquipOperation::Unequip if self.source_item.is_some() => {
                Err(ActionFailure::ItemMismatch)
            }
            EquipOperation::Unequip => Ok(()),
        }
    }
}

pub(crate) const HUMAN: InteractionDefinition<EquipContext> =
    InteractionDefinition::new(check_slot, swap_slot);

fn check_slot(world: &World, owner: EntityId, context: &EquipContext) -> Result<(), ActionFailure> {
    let human = world.human(owner).ok_or(ActionFailure::MissingItem)?;
    let occupant = human.equipment.get(context.slot);
    match context.operation {
        EquipOperation::Equip => {
            let carried = context
                .item
                .is_some_and(|item| human.inventory.contains(item));
            if !carried {
                Err(ActionFailure::MissingItem)
            } else if occupant.is_some() {
                Err(ActionFailure::AlreadyEquipped)
            } else {
                Ok(())
            }
        }
        EquipOperation::Unequip => match (occupant, context.item) {
            (None, _) => Err(ActionFailure::MissingItemInSlot),
            (Some(worn), Some(named)) if worn != named => Err(ActionFailure::MissingItemInSlot),
            _ => Ok(()),
        },
    }
}

fn swap_slot(
    world: &mut World,
    owner: EntityId,
    context: &EquipContext,
) -> Result<Effect, WorldError> {
    let human = world.human_mut(owner)?;
    match context.operation {
        EquipOperation::Equip => {
            let Some(item) = context.item else {
                return Ok(Effect::None);
            };
            human.inventory.remove(item);
            human.equipment.equip(context.slot, item);
            Ok(Effect::Equipped {
                slot: context.slot,
                item,
            })
        }
        EquipOperation::Unequip => match human.equipment.unequip(context.slot) {
            Some(item) => {
                human.inventory.add(item);
                Ok(Effect::Unequipped {
                    slot: context.slot,
                    item,
                })
            }
            None => Ok(Effect::None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, Capability};
    use crate::action::kinds::fixtures;
    use crate::state::{Armor, EntityKind, Human, ItemKind, Position, Weapon};

    fn holder(world: &mut World, item: ItemId) -> EntityId {
        let mut human = Human::new(100);
        human.inventory.add(item);
        world.spawn(Position::new(2, 2), EntityKind::Human(human)).unwrap()
    }

    #[test]
    fn weapon_into_armor_slot_is_invalid() {
        let mut world = fixtures::arena();
        let axe = world.add_item("axe", ItemKind::Weapon(Weapon::melee(5)));
        let hero = holder(&mut world, axe);

        let context = EquipContext::equip(hero, axe, EquipmentSlot::Armor);
        let action = Capability::Equip(EquipCapability::for_item(axe))
            .validate(&world, &context.into())
            .unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::InvalidSlot));
    }

    #[test]
    fn occupied_slot_is_already_equipped() {
        let mut world = fixtures::arena();
        let vest = world.add_item("vest", ItemKind::Armor(Armor { protection: 1 }));
        let coat = world.add_item("coat", ItemKind::Armor(Armor { protection: 2 }));
        let mut human = Human::new(100).with_equipped(EquipmentSlot::Armor, vest);
        human.inventory.add(coat);
        let hero = world.spawn(Position::new(2, 2), EntityKind::Human(human)).unwrap();

        let context = EquipContext::equip(hero, coat, EquipmentSlot::Armor);
        let action = Capability::Equip(EquipCapability::for_item(coat))
            .validate(&world, &context.into())
            .unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::AlreadyEquipped));
    }

    #[test]
    fn equip_then_unequip_moves_item() {
        let mut world = fixtures::arena();
        let axe = world.add_item("axe", ItemKind::Weapon(Weapon::melee(5)));
        let hero = holder(&mut world, axe);

        let equip = EquipContext::equip(hero, axe, EquipmentSlot::Weapon);
        let Some(Action::Possible(action)) =
            Capability::Equip(EquipCapability::for_item(axe)).validate(&world, &equip.into())
        else {
            panic!("expected a possible equip");
        };
        action.execute(&mut world).unwrap();
        assert_eq!(world.human(hero).unwrap().equipment.weapon, Some(axe));
        assert!(!world.human(hero).unwrap().inventory.contains(axe));

        let unequip = EquipContext::unequip(hero, EquipmentSlot::Weapon);
        let Some(Action::Possible(action)) =
            Capability::Equip(EquipCapability::unequip()).validate(&world, &unequip.into())
        else {
            panic!("expected a possible unequip");
        };
        let report = action.execute(&mut world).unwrap();

        assert_eq!(
            report.target,
            Effect::Unequipped {
                slot: EquipmentSlot::Weapon,
                item: axe
            }
        );
        assert!(world.human(hero).unwrap().inventory.contains(axe));
    }

    #[test]
    fn unequip_of_empty_slot_fails() {
        let mut world = fixtures::arena();
        let hero = fixtures::bystander(&mut world, Position::new(2, 2));

        let context = EquipContext::unequip(hero, EquipmentSlot::Artefact);
        let action = Capability::Equip(EquipCapability::unequip())
            .validate(&world, &context.into())
            .unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::MissingItemInSlot));
    }
}
