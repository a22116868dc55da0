//! Entities placed on the grid and the actor profile some of them carry.

use crate::action::{
    AttackCapability, AttackType, Capability, EquipCapability, InteractionTable,
    InventoryCapability, MovementCapability, PickUpCapability,
};
use crate::state::item::{Equipment, EquipmentSlot, Inventory};

use super::{EntityId, ItemId, Position};

/// Which controller the runtime binds to an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControllerKind {
    /// Never acts.
    #[default]
    Noop,
    /// Picks the first possible action of any mode.
    FirstPossible,
    /// Combat/non-combat state machine with ordered behaviors.
    Tactical,
    /// Springs on a living human standing next to the actor.
    Trigger,
    /// Driven from outside the simulation (player input, tests).
    External,
}

/// Capabilities and controller binding of an entity that can initiate actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorProfile {
    pub controller: ControllerKind,
    /// Capabilities that do not depend on carried items.
    pub innate: Vec<Capability>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Human {
    pub hp: u32,
    pub max_hp: u32,
    pub inventory: Inventory,
    pub equipment: Equipment,
}

impl Human {
    pub fn new(max_hp: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            inventory: Inventory::new(),
            equipment: Equipment::default(),
        }
    }

    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_equipped(mut self, slot: EquipmentSlot, item: ItemId) -> Self {
        self.equipment.equip(slot, item);
        self
    }

    /// Carried in the inventory or worn in any slot.
    pub fn carries(&self, item: ItemId) -> bool {
        self.inventory.contains(item) || self.equipment.items().any(|worn| worn == item)
    }

    /// Subtracts up to `amount` HP, returning the damage actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.hp);
        self.hp -= taken;
        taken
    }

    /// Restores up to `amount` HP without exceeding the maximum.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_hp - self.hp);
        self.hp += restored;
        restored
    }
}

/// An item lying on the floor, waiting to be picked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDrop {
    pub item: ItemId,
    pub present: bool,
}

impl ItemDrop {
    pub fn new(item: ItemId) -> Self {
        Self {
            item,
            present: true,
        }
    }
}

/// Anything with a lootable inventory: chests and corpses.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    pub inventory: Inventory,
}

impl Container {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trap {
    pub damage: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Human(Human),
    ItemDrop(ItemDrop),
    Chest(Container),
    Corpse(Container),
    Trap(Trap),
}

impl EntityKind {
    pub fn default_glyph(&self) -> char {
        match self {
            EntityKind::Human(_) => '@',
            EntityKind::ItemDrop(_) => 'i',
            EntityKind::Chest(_) => 'C',
            EntityKind::Corpse(_) => 'c',
            EntityKind::Trap(_) => '^',
        }
    }

    /// Structures (chests, traps) are always alive; corpses never are.
    pub fn is_alive(&self) -> bool {
        match self {
            EntityKind::Human(human) => human.hp > 0,
            EntityKind::ItemDrop(drop) => drop.present,
            EntityKind::Chest(_) | EntityKind::Trap(_) => true,
            EntityKind::Corpse(_) => false,
        }
    }

    fn default_actor(&self) -> Option<ActorProfile> {
        match self {
            EntityKind::Human(_) => Some(ActorProfile {
                controller: ControllerKind::Tactical,
                innate: vec![
                    Capability::Movement(MovementCapability::default()),
                    Capability::Inventory(InventoryCapability::default()),
                    Capability::PickUp(PickUpCapability::default()),
                    Capability::Equip(EquipCapability::unequip()),
                ],
            }),
            EntityKind::Trap(trap) => Some(ActorProfile {
                controller: ControllerKind::Trigger,
                innate: vec![Capability::Attack(AttackCapability::new(
                    None,
                    AttackType::Other,
                    trap.damage,
                ))],
            }),
            EntityKind::ItemDrop(_) | EntityKind::Chest(_) | EntityKind::Corpse(_) => None,
        }
    }
}

/// A grid occupant.
///
/// The interaction table describes what happens when something is done *to*
/// this entity; the actor profile, when present, describes what it can *do*.
#[derive(Clone, Debug)]
pub struct Entity {
    pub id: EntityId,
    pub(crate) position: Position,
    pub glyph: char,
    pub kind: EntityKind,
    interactions: InteractionTable,
    actor: Option<ActorProfile>,
}

impl Entity {
    pub fn new(id: EntityId, position: Position, kind: EntityKind) -> Self {
        Self {
            id,
            position,
            glyph: kind.default_glyph(),
            interactions: InteractionTable::for_entity(&kind),
            actor: kind.default_actor(),
            kind,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.kind.is_alive()
    }

    pub fn is_actor(&self) -> bool {
        self.actor.is_some()
    }

    pub fn actor(&self) -> Option<&ActorProfile> {
        self.actor.as_ref()
    }

    pub fn interactions(&self) -> &InteractionTable {
        &self.interactions
    }

    pub fn set_interactions(&mut self, interactions: InteractionTable) {
        self.interactions = interactions;
    }

    pub fn set_controller(&mut self, controller: ControllerKind) {
        if let Some(actor) = self.actor.as_mut() {
            actor.controller = controller;
        }
    }

    pub fn human(&self) -> Option<&Human> {
        match &self.kind {
            EntityKind::Human(human) => Some(human),
            _ => None,
        }
    }

    pub fn human_mut(&mut self) -> Option<&mut Human> {
        match &mut self.kind {
            EntityKind::Human(human) => Some(human),
            _ => None,
        }
    }

    /// Inventory of humans, chests, and corpses.
    pub fn inventory(&self) -> Option<&Inventory> {
        match &self.kind {
            EntityKind::Human(human) => Some(&human.inventory),
            EntityKind::Chest(container) | EntityKind::Corpse(container) => {
                Some(&container.inventory)
            }
            EntityKind::ItemDrop(_) | EntityKind::Trap(_) => None,
        }
    }

    pub fn inventory_mut(&mut self) -> Option<&mut Inventory> {
        match &mut self.kind {
            EntityKind::Human(human) => Some(&mut human.inventory),
            EntityKind::Chest(container) | EntityKind::Corpse(container) => {
                Some(&mut container.inventory)
            }
            EntityKind::ItemDrop(_) | EntityKind::Trap(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liveness_depends_on_kind() {
        assert!(EntityKind::Human(Human::new(10)).is_alive());
        assert!(!EntityKind::Human(Human::new(10).with_hp(0)).is_alive());
        assert!(EntityKind::Chest(Container::default()).is_alive());
        assert!(!EntityKind::Corpse(Container::default()).is_alive());

        let mut drop = ItemDrop::new(ItemId(1));
        assert!(EntityKind::ItemDrop(drop).is_alive());
        drop.present = false;
        assert!(!EntityKind::ItemDrop(drop).is_alive());
    }

    #[test]
    fn only_humans_and_traps_are_actors() {
        let human = Entity::new(EntityId(1), Position::ORIGIN, EntityKind::Human(Human::new(5)));
        let chest = Entity::new(
            EntityId(2),
            Position::ORIGIN,
            EntityKind::Chest(Container::default()),
        );
        let trap = Entity::new(EntityId(3), Position::ORIGIN, EntityKind::Trap(Trap { damage: 4 }));

        assert!(human.is_actor());
        assert!(trap.is_actor());
        assert!(!chest.is_actor());
        assert_eq!(trap.actor().map(|a| a.controller), Some(ControllerKind::Trigger));
    }

    #[test]
    fn heal_and_damage_are_clamped() {
        let mut human = Human::new(50).with_hp(45);
        assert_eq!(human.heal(20), 5);
        assert_eq!(human.take_damage(80), 50);
        assert_eq!(human.hp, 0);
    }
}
