#![allow(dead_code)]

use tactics_core::{
    EntityId, EntityKind, EquipmentSlot, Grid, Human, ItemDrop, ItemId, ItemKind, Magazine,
    Position, Weapon, World,
};

/// 5x5 arena with walls on the border.
pub fn arena() -> World {
    World::new(Grid::walled(5, 5))
}

pub fn armed_human(world: &mut World, at: Position, hp: u32, damage: u32) -> (EntityId, ItemId) {
    let sword = world.add_item("sword", ItemKind::Weapon(Weapon::melee(damage)));
    let human = Human::new(100)
        .with_hp(hp)
        .with_equipped(EquipmentSlot::Weapon, sword);
    let id = world.spawn(at, EntityKind::Human(human)).unwrap();
    (id, sword)
}

/// Human with a ranged weapon holding `loaded` rounds and `spare` more in the pack.
pub fn gunner(world: &mut World, at: Position, loaded: u32, spare: u32) -> (EntityId, ItemId) {
    let ammo = world.add_item("rounds", ItemKind::Ammo);
    let rifle = world.add_item(
        "rifle",
        ItemKind::Weapon(Weapon::ranged(8, 3, Magazine::new(ammo, loaded, 5))),
    );
    let mut human = Human::new(100).with_equipped(EquipmentSlot::Weapon, rifle);
    human.inventory.add_many(ammo, spare);
    let id = world.spawn(at, EntityKind::Human(human)).unwrap();
    (id, rifle)
}

pub fn bystander(world: &mut World, at: Position) -> EntityId {
    world
        .spawn(at, EntityKind::Human(Human::new(100)))
        .unwrap()
}

pub fn drop_item(world: &mut World, at: Position, name: &str) -> (EntityId, ItemId) {
    let item = world.add_item(name, ItemKind::Artefact);
    let id = world
        .spawn(at, EntityKind::ItemDrop(ItemDrop::new(item)))
        .unwrap();
    (id, item)
}
