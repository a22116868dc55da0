//! Data loaders for simulation content.
//!
//! - Game configuration (TOML)
//! - Grid layouts as ASCII rows
//! - Scenarios (RON): a layout, an item catalog, and spawn placements
//!
//! Loaders return plain `tactics-core` values; nothing here survives past
//! world construction.

pub mod loaders;

pub use loaders::{
    ConfigLoader, ItemSpec, ItemSpecKind, LoadResult, MapLoader, Scenario, ScenarioLoader,
    SpawnSpec,
};
