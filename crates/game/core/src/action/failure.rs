//! Typed reasons an action is impossible.

use crate::error::{ErrorSeverity, GameError};

/// Why a validated context could not become a possible action.
///
/// Failures are data, not errors: they ride inside
/// [`Action::Impossible`](super::Action::Impossible) so controllers can react to
/// them (an attack that is out of ammo makes reloading attractive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionFailure {
    /// Destination cell is a wall, out of bounds, or occupied.
    #[error("destination blocked")]
    Blocked,

    #[error("target out of range")]
    OutOfRange,

    #[error("weapon is out of ammo")]
    OutOfAmmo,

    /// Ranged attack with a weapon that has no magazine.
    #[error("weapon cannot perform this attack")]
    InvalidWeapon,

    /// Context names a different item than the capability is bound to.
    #[error("item does not match the capability")]
    ItemMismatch,

    #[error("no item given to equip")]
    MissingItem,

    #[error("item does not fit that slot")]
    InvalidSlot,

    #[error("slot already holds an item")]
    AlreadyEquipped,

    #[error("slot is empty")]
    MissingItemInSlot,

    #[error("target too far away")]
    TooFar,

    /// Target is no longer physically present where it was recorded.
    #[error("target is gone")]
    EntityGone,

    /// Only the owner may perform this interaction on itself.
    #[error("interaction is internal only")]
    InternalOnlyInteraction,

    #[error("item is not carried")]
    ItemNotPresent,

    #[error("item is not equipped")]
    ItemNotEquipped,

    #[error("item is not in the container")]
    ItemNotInContainer,

    #[error("item cannot be reloaded")]
    ItemCannotBeReloaded,

    #[error("magazine already full")]
    MagazineFull,

    #[error("no matching ammo in inventory")]
    NoAmmoInInventory,

    #[error("already at full health")]
    ActorAtMaxHp,

    #[error("only humans can be healed")]
    HealOnNonHuman,
}

impl GameError for ActionFailure {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Blocked
            | Self::OutOfRange
            | Self::OutOfAmmo
            | Self::TooFar
            | Self::EntityGone
            | Self::AlreadyEquipped
            | Self::MissingItemInSlot
            | Self::ItemNotPresent
            | Self::ItemNotEquipped
            | Self::ItemNotInContainer
            | Self::MagazineFull
            | Self::NoAmmoInInventory
            | Self::ActorAtMaxHp => ErrorSeverity::Recoverable,

            Self::InvalidWeapon
            | Self::ItemMismatch
            | Self::MissingItem
            | Self::InvalidSlot
            | Self::InternalOnlyInteraction
            | Self::ItemCannotBeReloaded
            | Self::HealOnNonHuman => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Blocked => "ACTION_BLOCKED",
            Self::OutOfRange => "ACTION_OUT_OF_RANGE",
            Self::OutOfAmmo => "ACTION_OUT_OF_AMMO",
            Self::InvalidWeapon => "ACTION_INVALID_WEAPON",
            Self::ItemMismatch => "ACTION_ITEM_MISMATCH",
            Self::MissingItem => "ACTION_MISSING_ITEM",
            Self::InvalidSlot => "ACTION_INVALID_SLOT",
            Self::AlreadyEquipped => "ACTION_ALREADY_EQUIPPED",
            Self::MissingItemInSlot => "ACTION_MISSING_ITEM_IN_SLOT",
            Self::TooFar => "ACTION_TOO_FAR",
            Self::EntityGone => "ACTION_ENTITY_GONE",
            Self::InternalOnlyInteraction => "ACTION_INTERNAL_ONLY",
            Self::ItemNotPresent => "ACTION_ITEM_NOT_PRESENT",
            Self::ItemNotEquipped => "ACTION_ITEM_NOT_EQUIPPED",
            Self::ItemNotInContainer => "ACTION_ITEM_NOT_IN_CONTAINER",
            Self::ItemCannotBeReloaded => "ACTION_ITEM_CANNOT_BE_RELOADED",
            Self::MagazineFull => "ACTION_MAGAZINE_FULL",
            Self::NoAmmoInInventory => "ACTION_NO_AMMO_IN_INVENTORY",
            Self::ActorAtMaxHp => "ACTION_ACTOR_AT_MAX_HP",
            Self::HealOnNonHuman => "ACTION_HEAL_ON_NON_HUMAN",
        }
    }
}
