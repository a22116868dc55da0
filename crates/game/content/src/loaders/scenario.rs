//! Scenario loader.
//!
//! A scenario bundles a layout, an item catalog keyed by name, and the
//! placements that populate the world. Entity and item ids are allocated
//! while the world is built, in file order.
//!
//! ```ron
//! (
//!     rows: ["#####", "#...#", "#####"],
//!     items: {
//!         "sword": (name: "Short sword", kind: Melee(damage: 6)),
//!         "kit": (name: "Med kit", kind: MedKit(heal_amount: 25)),
//!     },
//!     spawns: [
//!         Human(at: (1, 1), hp: 100, equip: ["sword"], inventory: [("kit", 1)]),
//!         Trap(at: (3, 1), damage: 4),
//!     ],
//! )
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::{
    Armor, Container, ControllerKind, EntityKind, Human, Inventory, ItemDrop, ItemId, ItemKind,
    Magazine, Position, Trap, Weapon, World,
};

use crate::loaders::{LoadResult, MapLoader, read_file};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub rows: Vec<String>,
    #[serde(default)]
    pub items: BTreeMap<String, ItemSpec>,
    #[serde(default)]
    pub spawns: Vec<SpawnSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub kind: ItemSpecKind,
}

/// Item stats as written in scenario files.
///
/// Ranged weapons name their ammunition by catalog key; the key must refer
/// to an `Ammo` entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSpecKind {
    Melee {
        damage: u32,
    },
    Ranged {
        damage: u32,
        range: u32,
        ammo: String,
        #[serde(default)]
        loaded: u32,
        capacity: u32,
    },
    Armor {
        protection: u32,
    },
    Artefact,
    MedKit {
        heal_amount: u32,
    },
    Ammo,
}

impl ItemSpecKind {
    /// Ammo and med-kits are counted in stacks and may appear in several
    /// inventories. Everything else is a single instance.
    pub fn is_stackable(&self) -> bool {
        matches!(self, ItemSpecKind::MedKit { .. } | ItemSpecKind::Ammo)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnSpec {
    Human {
        at: (i32, i32),
        hp: u32,
        #[serde(default)]
        max_hp: Option<u32>,
        #[serde(default = "default_controller")]
        controller: ControllerKind,
        #[serde(default)]
        glyph: Option<char>,
        #[serde(default)]
        inventory: Vec<(String, u32)>,
        #[serde(default)]
        equip: Vec<String>,
    },
    ItemDrop {
        at: (i32, i32),
        item: String,
    },
    Chest {
        at: (i32, i32),
        #[serde(default)]
        items: Vec<(String, u32)>,
    },
    Trap {
        at: (i32, i32),
        damage: u32,
    },
}

fn default_controller() -> ControllerKind {
    ControllerKind::Tactical
}

impl Scenario {
    /// Builds the world this scenario describes.
    pub fn build(&self) -> LoadResult<World> {
        let grid = MapLoader::parse_rows(&self.rows)?;
        let mut world = World::new(grid);
        let handles = self.register_items(&mut world)?;
        self.check_instances()?;

        for spawn in &self.spawns {
            let (at, kind, glyph, controller) = match spawn {
                SpawnSpec::Human {
                    at,
                    hp,
                    max_hp,
                    controller,
                    glyph,
                    inventory,
                    equip,
                } => {
                    let mut human = Human::new(max_hp.unwrap_or(*hp))
                        .with_hp(*hp)
                        .with_inventory(stacks(&handles, inventory)?);
                    for key in equip {
                        let item = resolve(&handles, key)?;
                        let slot = world
                            .item(item)
                            .and_then(|item| item.slot())
                            .ok_or_else(|| anyhow::anyhow!("Item '{}' cannot be equipped", key))?;
                        if human.equipment.get(slot).is_some() {
                            anyhow::bail!("Cannot equip '{}': {:?} slot already filled", key, slot);
                        }
                        human = human.with_equipped(slot, item);
                    }
                    (*at, EntityKind::Human(human), *glyph, Some(*controller))
                }
                SpawnSpec::ItemDrop { at, item } => {
                    let drop = ItemDrop::new(resolve(&handles, item)?);
                    (*at, EntityKind::ItemDrop(drop), None, None)
                }
                SpawnSpec::Chest { at, items } => {
                    let chest = Container::new(stacks(&handles, items)?);
                    (*at, EntityKind::Chest(chest), None, None)
                }
                SpawnSpec::Trap { at, damage } => {
                    (*at, EntityKind::Trap(Trap { damage: *damage }), None, None)
                }
            };

            let position = Position::new(at.0, at.1);
            let id = world
                .spawn(position, kind)
                .map_err(|e| anyhow::anyhow!("Failed to place entity at {}: {}", position, e))?;
            let entity = world.entity_mut(id)?;
            if let Some(glyph) = glyph {
                entity.glyph = glyph;
            }
            if let Some(controller) = controller {
                entity.set_controller(controller);
            }
        }

        Ok(world)
    }

    fn register_items(&self, world: &mut World) -> LoadResult<BTreeMap<String, ItemId>> {
        let mut handles = BTreeMap::new();

        // Ammo has to exist before the magazines that reference it.
        let (ranged, plain): (Vec<_>, Vec<_>) = self
            .items
            .iter()
            .partition(|(_, spec)| matches!(spec.kind, ItemSpecKind::Ranged { .. }));

        for (key, spec) in plain {
            let kind = match &spec.kind {
                ItemSpecKind::Melee { damage } => ItemKind::Weapon(Weapon::melee(*damage)),
                ItemSpecKind::Armor { protection } => ItemKind::Armor(Armor {
                    protection: *protection,
                }),
                ItemSpecKind::Artefact => ItemKind::Artefact,
                ItemSpecKind::MedKit { heal_amount } => ItemKind::MedKit {
                    heal_amount: *heal_amount,
                },
                ItemSpecKind::Ammo => ItemKind::Ammo,
                ItemSpecKind::Ranged { .. } => continue,
            };
            handles.insert(key.clone(), world.add_item(spec.name.clone(), kind));
        }

        for (key, spec) in ranged {
            let ItemSpecKind::Ranged {
                damage,
                range,
                ammo,
                loaded,
                capacity,
            } = &spec.kind
            else {
                continue;
            };
            let is_ammo = self
                .items
                .get(ammo)
                .is_some_and(|entry| entry.kind == ItemSpecKind::Ammo);
            if !is_ammo {
                anyhow::bail!("Weapon '{}' loads '{}', which is not ammo", key, ammo);
            }
            let magazine = Magazine::new(resolve(&handles, ammo)?, *loaded, *capacity);
            let weapon = Weapon::ranged(*damage, *range, magazine);
            let item = world.add_item(spec.name.clone(), ItemKind::Weapon(weapon));
            handles.insert(key.clone(), item);
        }

        Ok(handles)
    }

    /// Rejects single-instance items placed more than once.
    fn check_instances(&self) -> LoadResult<()> {
        let mut placed = BTreeSet::new();
        for key in self.spawns.iter().flat_map(placed_keys) {
            let single = self
                .items
                .get(key)
                .is_some_and(|spec| !spec.kind.is_stackable());
            if single && !placed.insert(key) {
                anyhow::bail!("Item '{}' is placed more than once", key);
            }
        }
        Ok(())
    }
}

fn placed_keys(spawn: &SpawnSpec) -> Vec<&str> {
    match spawn {
        SpawnSpec::Human {
            inventory, equip, ..
        } => inventory
            .iter()
            .map(|(key, _)| key.as_str())
            .chain(equip.iter().map(String::as_str))
            .collect(),
        SpawnSpec::ItemDrop { item, .. } => vec![item.as_str()],
        SpawnSpec::Chest { items, .. } => items.iter().map(|(key, _)| key.as_str()).collect(),
        SpawnSpec::Trap { .. } => Vec::new(),
    }
}

fn resolve(handles: &BTreeMap<String, ItemId>, key: &str) -> LoadResult<ItemId> {
    handles
        .get(key)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Unknown item '{}'", key))
}

fn stacks(handles: &BTreeMap<String, ItemId>, entries: &[(String, u32)]) -> LoadResult<Inventory> {
    let mut inventory = Inventory::new();
    for (key, count) in entries {
        inventory.add_many(resolve(handles, key)?, *count);
    }
    Ok(inventory)
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        Ok(scenario)
    }

    /// Loads and builds in one step.
    pub fn load_world(path: &Path) -> LoadResult<World> {
        Self::load(path)?.build()
    }
}
