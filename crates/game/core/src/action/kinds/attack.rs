//! Melee, ranged, and weaponless attacks.
//!
//! Outside validation checks reach and ammo; the weapon's own definition
//! spends a round on ranged execution; the target human resolves damage
//! against its armor.

use crate::action::capability::ModeCapability;
use crate::action::context::ModeContext;
use crate::action::failure::ActionFailure;
use crate::action::interaction::{InteractionDefinition, InteractionTable};
use crate::action::mode::{ActionMode, TargetType};
use crate::action::outcome::Effect;
use crate::state::{EntityId, ItemId, ItemKind, World, WorldError};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackType {
    /// Requires adjacency.
    Melee,
    /// Requires range and a loaded magazine.
    Ranged,
    /// No spatial rule (traps, environmental damage).
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackContext {
    pub attacker: EntityId,
    pub target: EntityId,
    pub weapon: Option<ItemId>,
    pub attack_type: AttackType,
    /// Damage before armor.
    pub damage: u32,
}

impl ModeContext for AttackContext {
    const MODE: ActionMode = ActionMode::Attack;

    fn source(&self) -> EntityId {
        self.attacker
    }

    fn target(&self) -> EntityId {
        self.target
    }

    fn item(&self) -> Option<ItemId> {
        self.weapon
    }

    fn definition(table: &InteractionTable) -> Option<InteractionDefinition<Self>> {
        table.attack
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackCapability {
    pub weapon: Option<ItemId>,
    pub attack_type: AttackType,
    pub damage: u32,
}

impl AttackCapability {
    pub fn new(weapon: Option<ItemId>, attack_type: AttackType, damage: u32) -> Self {
        Self {
            weapon,
            attack_type,
            damage,
        }
    }

    /// Context this capability would use against `target`.
    pub fn context(&self, attacker: EntityId, target: EntityId) -> AttackContext {
        AttackContext {
            attacker,
            target,
            weapon: self.weapon,
            attack_type: self.attack_type,
            damage: self.damage,
        }
    }
}

impl ModeCapability for AttackCapability {
    type Context = AttackContext;

    fn source_item(&self) -> Option<ItemId> {
        self.weapon
    }

    fn target_type(&self) -> TargetType {
        TargetType::OthersOnly
    }

    fn check_outside(&self, world: &World, context: &AttackContext) -> Result<(), ActionFailure> {
        if context.weapon != self.weapon
            || context.attack_type != self.attack_type
            || context.damage != self.damage
        {
            return Err(ActionFailure::ItemMismatch);
        }

        let weapon = self
            .weapon
            .and_then(|item| world.item(item))
            .and_then(|item| item.weapon());
        if self.attack_type == AttackType::Ranged && !weapon.is_some_and(|weapon| weapon.can_fire())
        {
            return Err(ActionFailure::InvalidWeapon);
        }

        let (Some(from), Some(to)) = (
            world.position_of(context.attacker),
            world.position_of(context.target),
        ) else {
            return Err(ActionFailure::EntityGone);
        };

        match self.attack_type {
            AttackType::Melee if !from.is_adjacent(to) => Err(ActionFailure::OutOfRange),
            AttackType::Ranged => {
                let Some(weapon) = weapon else {
                    return Err(ActionFailure::InvalidWeapon);
                };
                if from.manhattan_distance(to) > weapon.range {
                    Err(ActionFailure::OutOfRange)
                } else if !weapon.has_ammo() {
                    Err(ActionFailure::OutOfAmmo)
                } else {
                    Ok(())
                }
            }
            AttackType::Melee | AttackType::Other => Ok(()),
        }
    }
}

/// Source side: the attacker must still hold the weapon.
pub(crate) const WEAPON: InteractionDefinition<AttackContext> =
    InteractionDefinition::new(weapon_in_hand, spend_round);

fn weapon_in_hand(
    world: &World,
    owner: EntityId,
    context: &AttackContext,
) -> Result<(), ActionFailure> {
    let held = context
        .weapon
        .is_some_and(|weapon| world.human(owner).is_some_and(|human| human.carries(weapon)));
    if held {
        Ok(())
    } else {
        Err(ActionFailure::ItemNotPresent)
    }
}

fn spend_round(
    world: &mut World,
    _owner: EntityId,
    context: &AttackContext,
) -> Result<Effect, WorldError> {
    let (AttackType::Ranged, Some(weapon)) = (context.attack_type, context.weapon) else {
        return Ok(Effect::None);
    };
    let magazine = world
        .item_mut(weapon)?
        .weapon_mut()
        .and_then(|stats| stats.magazine.as_mut());
    Ok(match magazine {
        Some(magazine) => Effect::AmmoSpent {
            weapon,
            remaining: magazine.spend(),
        },
        None => Effect::None,
    })
}

/// Target side: armor-reduced damage on a living human.
pub(crate) const HUMAN: InteractionDefinition<AttackContext> =
    InteractionDefinition::new(still_standing, take_hit);

fn still_standing(
    world: &World,
    owner: EntityId,
    _context: &AttackContext,
) -> Result<(), ActionFailure> {
    match world.human(owner) {
        Some(human) if human.hp > 0 => Ok(()),
        _ => Err(ActionFailure::EntityGone),
    }
}

fn take_hit(
    world: &mut World,
    owner: EntityId,
    context: &AttackContext,
) -> Result<Effect, WorldError> {
    let protection = world
        .human(owner)
        .and_then(|human| human.equipment.armor)
        .and_then(|armor| world.item(armor))
        .map(|item| match &item.kind {
            ItemKind::Armor(armor) => armor.protection,
            _ => 0,
        })
        .unwrap_or(0);

    let human = world.human_mut(owner)?;
    let amount = human.take_damage(context.damage.saturating_sub(protection));
    Ok(Effect::Damaged {
        target: owner,
        amount,
        remaining_hp: human.hp,
    })
}
