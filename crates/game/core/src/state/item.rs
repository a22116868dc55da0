//! Item instances, inventories, and equipment slots.

use std::collections::BTreeMap;

use super::ItemId;

/// An item instance owned by the world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn weapon_mut(&mut self) -> Option<&mut Weapon> {
        match &mut self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    /// The equipment slot this item fits, if it is equippable at all.
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self.kind {
            ItemKind::Weapon(_) => Some(EquipmentSlot::Weapon),
            ItemKind::Armor(_) => Some(EquipmentSlot::Armor),
            ItemKind::Artefact => Some(EquipmentSlot::Artefact),
            ItemKind::MedKit { .. } | ItemKind::Ammo => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon(Weapon),
    Armor(Armor),
    Artefact,
    MedKit { heal_amount: u32 },
    Ammo,
}

/// Weapon stats. Weapons without a magazine only fight in melee.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub damage: u32,
    pub range: u32,
    pub magazine: Option<Magazine>,
}

impl Weapon {
    pub fn melee(damage: u32) -> Self {
        Self {
            damage,
            range: 1,
            magazine: None,
        }
    }

    pub fn ranged(damage: u32, range: u32, magazine: Magazine) -> Self {
        Self {
            damage,
            range,
            magazine: Some(magazine),
        }
    }

    pub fn can_fire(&self) -> bool {
        self.magazine.is_some()
    }

    /// Melee-only weapons never run dry.
    pub fn has_ammo(&self) -> bool {
        self.magazine.as_ref().is_none_or(|magazine| magazine.loaded > 0)
    }
}

/// Loaded rounds of a ranged weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Magazine {
    /// Ammo item consumed when reloading.
    pub ammo: ItemId,
    pub loaded: u32,
    pub capacity: u32,
}

impl Magazine {
    pub fn new(ammo: ItemId, loaded: u32, capacity: u32) -> Self {
        Self {
            ammo,
            loaded: loaded.min(capacity),
            capacity,
        }
    }

    /// Rounds needed to fill the magazine.
    pub fn missing(&self) -> u32 {
        self.capacity.saturating_sub(self.loaded)
    }

    /// Removes one round, returning the remaining count.
    pub fn spend(&mut self) -> u32 {
        self.loaded = self.loaded.saturating_sub(1);
        self.loaded
    }

    /// Loads up to `rounds`, returning how many were accepted.
    pub fn load(&mut self, rounds: u32) -> u32 {
        let accepted = rounds.min(self.missing());
        self.loaded += accepted;
        accepted
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armor {
    pub protection: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Artefact,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 3] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Artefact,
    ];
}

/// Stack-counted item storage.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    stacks: BTreeMap<ItemId, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = (ItemId, u32)>) -> Self {
        let mut inventory = Self::new();
        for (item, count) in items {
            inventory.add_many(item, count);
        }
        inventory
    }

    pub fn add(&mut self, item: ItemId) {
        self.add_many(item, 1);
    }

    pub fn add_many(&mut self, item: ItemId, count: u32) {
        if count > 0 {
            *self.stacks.entry(item).or_default() += count;
        }
    }

    /// Removes one unit. Returns `false` when the item was absent.
    pub fn remove(&mut self, item: ItemId) -> bool {
        self.remove_bulk(item, 1) == 1
    }

    /// Removes up to `count` units, returning how many were removed.
    pub fn remove_bulk(&mut self, item: ItemId, count: u32) -> u32 {
        let Some(stack) = self.stacks.get_mut(&item) else {
            return 0;
        };
        let removed = count.min(*stack);
        *stack -= removed;
        if *stack == 0 {
            self.stacks.remove(&item);
        }
        removed
    }

    pub fn count(&self, item: ItemId) -> u32 {
        self.stacks.get(&item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.count(item) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.stacks.keys().copied()
    }

    /// Snapshot of `(item, count)` pairs in handle order.
    pub fn snapshot(&self) -> Vec<(ItemId, u32)> {
        self.stacks.iter().map(|(item, count)| (*item, *count)).collect()
    }

    /// Moves every stack out of `self`.
    pub fn drain(&mut self) -> Vec<(ItemId, u32)> {
        std::mem::take(&mut self.stacks).into_iter().collect()
    }
}

/// Items currently worn or wielded. Equipped items are not in the inventory.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<ItemId>,
    pub armor: Option<ItemId>,
    pub artefact: Option<ItemId>,
}

impl Equipment {
    pub fn get(&self, slot: EquipmentSlot) -> Option<ItemId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
            EquipmentSlot::Artefact => self.artefact,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<ItemId> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Artefact => &mut self.artefact,
        }
    }

    /// Puts `item` into `slot`, returning what was there before.
    pub fn equip(&mut self, slot: EquipmentSlot, item: ItemId) -> Option<ItemId> {
        self.slot_mut(slot).replace(item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemId> {
        self.slot_mut(slot).take()
    }

    pub fn is_equipped(&self, slot: EquipmentSlot, item: ItemId) -> bool {
        self.get(slot) == Some(item)
    }

    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        EquipmentSlot::ALL.into_iter().filter_map(|slot| self.get(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_stacks_and_unstacks() {
        let mut inventory = Inventory::new();
        inventory.add(ItemId(1));
        inventory.add_many(ItemId(1), 2);
        assert_eq!(inventory.count(ItemId(1)), 3);

        assert!(inventory.remove(ItemId(1)));
        assert_eq!(inventory.remove_bulk(ItemId(1), 10), 2);
        assert!(!inventory.contains(ItemId(1)));
        assert!(!inventory.remove(ItemId(1)));
    }

    #[test]
    fn magazine_load_is_capped() {
        let mut magazine = Magazine::new(ItemId(9), 1, 5);
        assert_eq!(magazine.load(10), 4);
        assert_eq!(magazine.loaded, 5);
        assert_eq!(magazine.spend(), 4);
    }

    #[test]
    fn melee_weapon_always_has_ammo() {
        assert!(Weapon::melee(3).has_ammo());
        let empty = Weapon::ranged(3, 4, Magazine::new(ItemId(2), 0, 6));
        assert!(!empty.has_ammo());
    }
}
