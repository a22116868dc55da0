//! Rules core of a tile-grid, turn-based actor simulation.
//!
//! `tactics-core` defines the world model (grid, entities, items), the
//! capability/action validation pipeline with its concrete modes, the
//! [`Controller`] seam, and the A* [`pathfinding`] service. Everything here is
//! synchronous and free of I/O; the runtime crate drives turns on top of it.
pub mod action;
pub mod config;
pub mod controller;
pub mod error;
pub mod pathfinding;
pub mod state;

pub use action::{
    Action, ActionContext, ActionFailure, ActionMode, AttackCapability, AttackContext,
    AttackType, Capability, Effect, EquipCapability, EquipContext, EquipOperation,
    ExecutionReport, HealCapability, HealContext, InteractionTable, InventoryCapability,
    InventoryContext, InventoryOperation, MovementCapability, MovementContext, PickUpCapability,
    PickUpContext, PossibleAction, PotentialActions, ReloadCapability, ReloadContext, TargetType,
    UseItemCapability, UseItemContext,
};
pub use config::{AiConfig, GameConfig};
pub use controller::{
    Controller, FirstPossibleController, NoopController, RoundRobinController, TriggerController,
};
pub use error::{ErrorSeverity, GameError};
pub use pathfinding::{approach_step, find_path, is_reachable, next_step};
pub use state::{
    ActorProfile, Armor, Container, ControllerKind, Direction, Entity, EntityId, EntityKind,
    Equipment, EquipmentSlot, Grid, GridError, Human, Inventory, Item, ItemDrop, ItemId, ItemKind,
    Magazine, Position, Tile, Trap, Weapon, World, WorldError,
};
