//! Handler for human death.

use tactics_core::{Container, EntityId, EntityKind, Inventory, World, WorldError};
use tracing::info;

/// Turns dead humans into corpses.
///
/// The corpse keeps the cell, the id and everything the human carried or
/// wore, so it can be looted through the inventory mode. Corpses are not
/// actors and drop out of the turn order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeathHandler;

impl DeathHandler {
    pub fn name(&self) -> &'static str {
        "death"
    }

    /// Converts every dead human and returns their ids in ascending order.
    pub fn handle(&self, world: &mut World) -> Result<Vec<EntityId>, WorldError> {
        let dead: Vec<(EntityId, Inventory)> = world
            .entities()
            .filter_map(|entity| match &entity.kind {
                EntityKind::Human(human) if human.hp == 0 => {
                    let mut remains = human.inventory.clone();
                    for item in human.equipment.items() {
                        remains.add(item);
                    }
                    Some((entity.id, remains))
                }
                _ => None,
            })
            .collect();

        let mut ids = Vec::with_capacity(dead.len());
        for (id, remains) in dead {
            world.transform(id, EntityKind::Corpse(Container::new(remains)))?;
            info!(entity = %id, handler = self.name(), "human died");
            ids.push(id);
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{EquipmentSlot, Grid, Human, ItemKind, Position, Weapon};

    #[test]
    fn dead_human_becomes_corpse_with_gear() {
        let mut world = World::new(Grid::walled(5, 5));
        let sword = world.add_item("sword", ItemKind::Weapon(Weapon::melee(3)));
        let kit = world.add_item("kit", ItemKind::MedKit { heal_amount: 5 });
        let fallen = world
            .spawn(
                Position::new(2, 2),
                EntityKind::Human(
                    Human::new(10)
                        .with_hp(0)
                        .with_inventory(Inventory::with_items([(kit, 2)]))
                        .with_equipped(EquipmentSlot::Weapon, sword),
                ),
            )
            .unwrap();
        let survivor = world
            .spawn(Position::new(1, 1), EntityKind::Human(Human::new(10)))
            .unwrap();

        let dead = DeathHandler.handle(&mut world).unwrap();

        assert_eq!(dead, vec![fallen]);
        let corpse = world.entity(fallen).unwrap();
        let EntityKind::Corpse(remains) = &corpse.kind else {
            panic!("expected a corpse, found {:?}", corpse.kind);
        };
        assert_eq!(remains.inventory.count(kit), 2);
        assert!(remains.inventory.contains(sword));
        assert!(!corpse.is_actor());
        assert_eq!(world.grid().entity_at(Position::new(2, 2)), Some(fallen));
        assert_eq!(world.living_actors(), vec![survivor]);
    }
}
