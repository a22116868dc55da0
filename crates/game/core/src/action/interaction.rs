//! What happens to an entity (or through an item) when an interaction lands on it.

use core::fmt;

use crate::state::{EntityId, EntityKind, ItemKind, World, WorldError};

use super::failure::ActionFailure;
use super::kinds::{
    AttackContext, EquipContext, HealContext, InventoryContext, MovementContext, PickUpContext,
    ReloadContext, UseItemContext, attack, equip, heal, inventory, movement, pickup, reload,
    use_item,
};
use super::outcome::Effect;

/// Inside validator: a read-only precondition local to the owner.
pub type Validator<C> = fn(&World, EntityId, &C) -> Result<(), ActionFailure>;

/// Effect of a fully validated interaction on the owner.
pub type Hook<C> = fn(&mut World, EntityId, &C) -> Result<Effect, WorldError>;

/// Validator and hook bound to a single mode.
pub struct InteractionDefinition<C> {
    pub validate: Validator<C>,
    pub hook: Hook<C>,
}

/// Validator for interactions without local preconditions.
pub(crate) fn accept<C>(_: &World, _: EntityId, _: &C) -> Result<(), ActionFailure> {
    Ok(())
}

impl<C> InteractionDefinition<C> {
    pub const fn new(validate: Validator<C>, hook: Hook<C>) -> Self {
        Self { validate, hook }
    }
}

impl<C> Clone for InteractionDefinition<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for InteractionDefinition<C> {}

impl<C> fmt::Debug for InteractionDefinition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionDefinition").finish_non_exhaustive()
    }
}

/// At most one definition per mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionTable {
    pub movement: Option<InteractionDefinition<MovementContext>>,
    pub attack: Option<InteractionDefinition<AttackContext>>,
    pub equip: Option<InteractionDefinition<EquipContext>>,
    pub inventory: Option<InteractionDefinition<InventoryContext>>,
    pub pickup: Option<InteractionDefinition<PickUpContext>>,
    pub reload: Option<InteractionDefinition<ReloadContext>>,
    pub heal: Option<InteractionDefinition<HealContext>>,
    pub use_item: Option<InteractionDefinition<UseItemContext>>,
}

impl InteractionTable {
    pub const EMPTY: Self = Self {
        movement: None,
        attack: None,
        equip: None,
        inventory: None,
        pickup: None,
        reload: None,
        heal: None,
        use_item: None,
    };

    /// Receiving-side definitions for an entity kind.
    pub fn for_entity(kind: &EntityKind) -> Self {
        match kind {
            EntityKind::Human(_) => Self {
                movement: Some(movement::HUMAN),
                attack: Some(attack::HUMAN),
                equip: Some(equip::HUMAN),
                inventory: Some(inventory::HUMAN),
                reload: Some(reload::HUMAN),
                heal: Some(heal::HUMAN),
                use_item: Some(use_item::HUMAN),
                ..Self::EMPTY
            },
            EntityKind::ItemDrop(_) => Self {
                pickup: Some(pickup::ITEM_DROP),
                ..Self::EMPTY
            },
            EntityKind::Chest(_) | EntityKind::Corpse(_) => Self {
                inventory: Some(inventory::CONTAINER),
                ..Self::EMPTY
            },
            EntityKind::Trap(_) => Self::EMPTY,
        }
    }

    /// Source-side definitions contributed by the item an actor acts with.
    pub fn for_item(kind: &ItemKind) -> Self {
        match kind {
            ItemKind::Weapon(_) => Self {
                attack: Some(attack::WEAPON),
                ..Self::EMPTY
            },
            ItemKind::MedKit { .. } => Self {
                heal: Some(heal::MED_KIT),
                ..Self::EMPTY
            },
            ItemKind::Armor(_) | ItemKind::Artefact | ItemKind::Ammo => Self::EMPTY,
        }
    }
}
