use std::collections::BTreeMap;

use crate::action::Capability;
use crate::error::{ErrorSeverity, GameError};

use super::entity::{ControllerKind, Entity, EntityKind, Human};
use super::grid::{Grid, GridError, Tile};
use super::item::{Inventory, Item, ItemKind};
use super::{EntityId, ItemId, Position};

/// Invariant violations raised while mutating the world.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("{0} not found")]
    ItemNotFound(ItemId),

    #[error("entity {0} is not a human")]
    NotAHuman(EntityId),

    #[error("entity {0} has no inventory")]
    NoInventory(EntityId),
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Grid(inner) => inner.severity(),
            Self::EntityNotFound(_) | Self::ItemNotFound(_) => ErrorSeverity::Fatal,
            Self::NotAHuman(_) | Self::NoInventory(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Grid(inner) => inner.error_code(),
            Self::EntityNotFound(_) => "WORLD_ENTITY_NOT_FOUND",
            Self::ItemNotFound(_) => "WORLD_ITEM_NOT_FOUND",
            Self::NotAHuman(_) => "WORLD_NOT_A_HUMAN",
            Self::NoInventory(_) => "WORLD_NO_INVENTORY",
        }
    }
}

/// The grid plus everything that lives on it.
///
/// Entity positions and grid occupancy are kept in sync by routing every
/// placement through this type.
#[derive(Clone, Debug)]
pub struct World {
    grid: Grid,
    entities: BTreeMap<EntityId, Entity>,
    items: BTreeMap<ItemId, Item>,
    next_entity: u32,
    next_item: u32,
}

impl World {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            entities: BTreeMap::new(),
            items: BTreeMap::new(),
            next_entity: 0,
            next_item: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn set_tile(&mut self, position: Position, tile: Tile) -> Result<(), WorldError> {
        Ok(self.grid.set_tile(position, tile)?)
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    pub fn add_item(&mut self, name: impl Into<String>, kind: ItemKind) -> ItemId {
        let id = ItemId(self.next_item);
        self.next_item += 1;
        self.items.insert(id, Item::new(id, name, kind));
        id
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Result<&mut Item, WorldError> {
        self.items.get_mut(&id).ok_or(WorldError::ItemNotFound(id))
    }

    // ------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------

    /// Places a new entity on the grid and returns its id.
    pub fn spawn(&mut self, position: Position, kind: EntityKind) -> Result<EntityId, WorldError> {
        let id = EntityId(self.next_entity);
        self.grid.set_entity(position, Some(id))?;
        self.next_entity += 1;
        self.entities.insert(id, Entity::new(id, position, kind));
        Ok(id)
    }

    /// Spawns an actor bound to a specific controller kind.
    pub fn spawn_actor(
        &mut self,
        position: Position,
        kind: EntityKind,
        controller: ControllerKind,
    ) -> Result<EntityId, WorldError> {
        let id = self.spawn(position, kind)?;
        self.entity_mut(id)?.set_controller(controller);
        Ok(id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, WorldError> {
        self.entities
            .get_mut(&id)
            .ok_or(WorldError::EntityNotFound(id))
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Ids of living actors in ascending order.
    pub fn living_actors(&self) -> Vec<EntityId> {
        self.entities
            .values()
            .filter(|entity| entity.is_actor() && entity.is_alive())
            .map(|entity| entity.id)
            .collect()
    }

    /// Ids of living humans in ascending order.
    pub fn living_humans(&self) -> Vec<EntityId> {
        self.entities
            .values()
            .filter(|entity| entity.human().is_some() && entity.is_alive())
            .map(|entity| entity.id)
            .collect()
    }

    pub fn position_of(&self, id: EntityId) -> Option<Position> {
        self.entity(id).map(Entity::position)
    }

    pub fn human(&self, id: EntityId) -> Option<&Human> {
        self.entity(id).and_then(Entity::human)
    }

    pub fn human_mut(&mut self, id: EntityId) -> Result<&mut Human, WorldError> {
        self.entity_mut(id)?
            .human_mut()
            .ok_or(WorldError::NotAHuman(id))
    }

    pub fn inventory_mut(&mut self, id: EntityId) -> Result<&mut Inventory, WorldError> {
        self.entity_mut(id)?
            .inventory_mut()
            .ok_or(WorldError::NoInventory(id))
    }

    /// Moves an entity on the grid and updates its recorded position.
    pub fn move_entity(&mut self, id: EntityId, to: Position) -> Result<(), WorldError> {
        let from = self
            .position_of(id)
            .ok_or(WorldError::EntityNotFound(id))?;
        self.grid.move_entity(id, from, to)?;
        self.entity_mut(id)?.position = to;
        Ok(())
    }

    /// Clears the entity's grid cell. The entity stays in the world.
    pub fn remove_from_grid(&mut self, id: EntityId) -> Result<(), WorldError> {
        let position = self
            .position_of(id)
            .ok_or(WorldError::EntityNotFound(id))?;
        if self.grid.entity_at(position) != Some(id) {
            return Err(GridError::EntityNotAtPosition {
                entity: id,
                position,
            }
            .into());
        }
        self.grid.set_entity(position, None)?;
        Ok(())
    }

    /// Swaps the kind of an entity in place, rebuilding its glyph, interaction
    /// table, and actor profile. Id and position are preserved.
    pub fn transform(&mut self, id: EntityId, kind: EntityKind) -> Result<(), WorldError> {
        let entity = self.entity_mut(id)?;
        *entity = Entity::new(id, entity.position, kind);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Capabilities
    // ------------------------------------------------------------------

    /// Everything `id` can currently initiate: innate capabilities plus those
    /// granted by carried and equipped items.
    pub fn capabilities(&self, id: EntityId) -> Vec<Capability> {
        let Some(entity) = self.entity(id) else {
            return Vec::new();
        };
        let Some(actor) = entity.actor() else {
            return Vec::new();
        };

        let mut capabilities = actor.innate.clone();
        if let Some(human) = entity.human() {
            let carried = human.inventory.items().map(|item| (item, false));
            let worn = human.equipment.items().map(|item| (item, true));
            for (handle, equipped) in carried.chain(worn) {
                if let Some(item) = self.item(handle) {
                    for capability in Capability::granted_by(item, equipped) {
                        if !capabilities.contains(&capability) {
                            capabilities.push(capability);
                        }
                    }
                }
            }
        }
        capabilities
    }

    pub fn has_capability(&self, id: EntityId, capability: &Capability) -> bool {
        self.capabilities(id).contains(capability)
    }
}
