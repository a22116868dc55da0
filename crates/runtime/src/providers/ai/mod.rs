//! Tactical AI for human actors.
//!
//! Decision making runs in three steps each turn:
//!
//! 1. **View**: the turn's potential actions are sorted into what the
//!    behaviors care about (possible melee, possible heals, attacks that
//!    failed for lack of ammo, ...)
//! 2. **Memory**: remembered enemy and loot positions are refreshed
//! 3. **State machine**: `NonCombat` or `Combat` evaluates its priority
//!    selector, and the first behavior that picks an action wins
//!
//! # Core Components
//!
//! - [`TacticalController`]: the [`Controller`](tactics_core::Controller) implementation
//! - [`AiContext`]: blackboard the behavior nodes read and write
//! - [`ActionView`]: categorized actions for one turn
//! - [`CombatCounters`]: entry, attack and exit delays of the combat state

pub mod context;
pub mod controller;
pub mod memory;
pub mod nodes;
pub mod presets;
pub mod state;
pub mod view;

pub use context::AiContext;
pub use controller::TacticalController;
pub use memory::Memory;
pub use state::{AiState, AiStateKind, CombatCounters};
pub use view::ActionView;
