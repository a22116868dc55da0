//! Capabilities: what an actor is authorized to initiate, and the pipeline
//! that turns a raw context into a validated [`Action`].

use crate::state::{Item, ItemId, ItemKind, World};

use super::context::{ActionContext, ModeContext, check_inside};
use super::failure::ActionFailure;
use super::kinds::{
    AttackCapability, AttackType, EquipCapability, HealCapability, InventoryCapability,
    MovementCapability, PickUpCapability, ReloadCapability, UseItemCapability,
};
use super::mode::{ActionMode, TargetType};
use super::outcome::{Action, PossibleAction};

/// Per-mode half of a capability: its policy and outside validator.
pub trait ModeCapability {
    type Context: ModeContext;

    fn source_item(&self) -> Option<ItemId>;

    fn target_type(&self) -> TargetType;

    /// Spatial and resource preconditions on the initiating side.
    fn check_outside(&self, world: &World, context: &Self::Context) -> Result<(), ActionFailure>;
}

/// Authorization to initiate one mode, optionally through a specific item.
///
/// Equality covers mode, source item, and the mode's own parameters; an actor
/// holds a capability only if an equal value is among its current capabilities.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    Movement(MovementCapability),
    Attack(AttackCapability),
    Equip(EquipCapability),
    Inventory(InventoryCapability),
    PickUp(PickUpCapability),
    Reload(ReloadCapability),
    Heal(HealCapability),
    UseItem(UseItemCapability),
}

impl Capability {
    pub fn mode(&self) -> ActionMode {
        match self {
            Capability::Movement(_) => ActionMode::Movement,
            Capability::Attack(_) => ActionMode::Attack,
            Capability::Equip(_) => ActionMode::Equip,
            Capability::Inventory(_) => ActionMode::Inventory,
            Capability::PickUp(_) => ActionMode::PickUp,
            Capability::Reload(_) => ActionMode::Reload,
            Capability::Heal(_) => ActionMode::Heal,
            Capability::UseItem(_) => ActionMode::UseItem,
        }
    }

    pub fn source_item(&self) -> Option<ItemId> {
        match self {
            Capability::Movement(capability) => capability.source_item(),
            Capability::Attack(capability) => capability.source_item(),
            Capability::Equip(capability) => capability.source_item(),
            Capability::Inventory(capability) => capability.source_item(),
            Capability::PickUp(capability) => capability.source_item(),
            Capability::Reload(capability) => capability.source_item(),
            Capability::Heal(capability) => capability.source_item(),
            Capability::UseItem(capability) => capability.source_item(),
        }
    }

    pub fn target_type(&self) -> TargetType {
        match self {
            Capability::Movement(capability) => capability.target_type(),
            Capability::Attack(capability) => capability.target_type(),
            Capability::Equip(capability) => capability.target_type(),
            Capability::Inventory(capability) => capability.target_type(),
            Capability::PickUp(capability) => capability.target_type(),
            Capability::Reload(capability) => capability.target_type(),
            Capability::Heal(capability) => capability.target_type(),
            Capability::UseItem(capability) => capability.target_type(),
        }
    }

    /// Validates `context` against this capability.
    ///
    /// Returns `None` when the capability does not apply at all: a different
    /// mode, a target the policy excludes, or a source that does not hold this
    /// capability. Otherwise the outside validator, the source-side inside
    /// validator, and the target-side inside validator run in that order and
    /// the first failure yields [`Action::Impossible`].
    ///
    /// Validation never mutates the world.
    pub fn validate(&self, world: &World, context: &ActionContext) -> Option<Action> {
        match (self, context) {
            (Capability::Movement(capability), ActionContext::Movement(context)) => {
                run_pipeline(self, capability, world, context)
            }
            (Capability::Attack(capability), ActionContext::Attack(context)) => {
                run_pipeline(self, capability, world, context)
            }
            (Capability::Equip(capability), ActionContext::Equip(context)) => {
                run_pipeline(self, capability, world, context)
            }
            (Capability::Inventory(capability), ActionContext::Inventory(context)) => {
                run_pipeline(self, capability, world, context)
            }
            (Capability::PickUp(capability), ActionContext::PickUp(context)) => {
                run_pipeline(self, capability, world, context)
            }
            (Capability::Reload(capability), ActionContext::Reload(context)) => {
                run_pipeline(self, capability, world, context)
            }
            (Capability::Heal(capability), ActionContext::Heal(context)) => {
                run_pipeline(self, capability, world, context)
            }
            (Capability::UseItem(capability), ActionContext::UseItem(context)) => {
                run_pipeline(self, capability, world, context)
            }
            _ => None,
        }
    }

    /// Capabilities an item hands to whoever carries it.
    ///
    /// Weapons grant attacks whether carried or worn; anything equippable
    /// grants an equip capability only while it sits in the inventory.
    pub fn granted_by(item: &Item, equipped: bool) -> Vec<Capability> {
        let mut granted = Vec::new();
        match &item.kind {
            ItemKind::Weapon(weapon) => {
                granted.push(Capability::Attack(AttackCapability::new(
                    Some(item.id),
                    AttackType::Melee,
                    weapon.damage,
                )));
                if weapon.can_fire() {
                    granted.push(Capability::Attack(AttackCapability::new(
                        Some(item.id),
                        AttackType::Ranged,
                        weapon.damage,
                    )));
                    granted.push(Capability::Reload(ReloadCapability::new(item.id)));
                }
            }
            ItemKind::MedKit { .. } => {
                granted.push(Capability::Heal(HealCapability::new(item.id)));
                granted.push(Capability::UseItem(UseItemCapability::new(item.id)));
            }
            ItemKind::Armor(_) | ItemKind::Artefact | ItemKind::Ammo => {}
        }
        if item.slot().is_some() && !equipped {
            granted.push(Capability::Equip(EquipCapability::for_item(item.id)));
        }
        granted
    }
}

fn run_pipeline<K: ModeCapability>(
    whole: &Capability,
    capability: &K,
    world: &World,
    context: &K::Context,
) -> Option<Action> {
    if !capability.target_type().admits(context.is_self()) {
        return None;
    }
    if !world.has_capability(context.source(), whole) {
        return None;
    }

    let outcome = capability
        .check_outside(world, context)
        .and_then(|()| check_inside(world, context));

    let context: ActionContext = context.clone().into();
    Some(match outcome {
        Ok(()) => Action::Possible(PossibleAction::new(context)),
        Err(reason) => Action::Impossible { context, reason },
    })
}
