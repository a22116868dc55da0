//! Authoritative world state.
//!
//! The [`World`] owns the grid, every entity, and every item instance.
//! Interaction hooks mutate it; validators and controllers only read it.
mod common;
mod entity;
mod grid;
mod item;
mod world;

pub use common::{Direction, EntityId, ItemId, Position};
pub use entity::{
    ActorProfile, Container, ControllerKind, Entity, EntityKind, Human, ItemDrop, Trap,
};
pub use grid::{Grid, GridError, Tile};
pub use item::{Armor, Equipment, EquipmentSlot, Inventory, Item, ItemKind, Magazine, Weapon};
pub use world::{World, WorldError};
