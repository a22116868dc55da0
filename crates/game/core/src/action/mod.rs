//! Capability/action validation pipeline.
//!
//! # Module Structure
//!
//! - `mode`: [`ActionMode`] tags and the [`TargetType`] self/other policy
//! - `context`: [`ActionContext`], the closed union of per-mode contexts
//! - `capability`: [`Capability`] and the validation pipeline
//! - `interaction`: per-entity and per-item [`InteractionTable`]s
//! - `outcome`: [`Action`] (possible or impossible) and execution reports
//! - `potential`: [`PotentialActions`], one turn's discoveries for one actor
//! - `kinds`: the concrete modes
//!
//! Validation is read-only. Only [`PossibleAction::execute`] mutates the world,
//! running the source-side hook before the target-side hook.

mod capability;
mod context;
mod failure;
mod interaction;
pub mod kinds;
mod mode;
mod outcome;
mod potential;

pub use capability::{Capability, ModeCapability};
pub use context::{ActionContext, ModeContext};
pub use failure::ActionFailure;
pub use interaction::{Hook, InteractionDefinition, InteractionTable, Validator};
pub use kinds::{
    AttackCapability, AttackContext, AttackType, EquipCapability, EquipContext, EquipOperation,
    HealCapability, HealContext, InventoryCapability, InventoryContext, InventoryOperation,
    MovementCapability, MovementContext, PickUpCapability, PickUpContext, ReloadCapability,
    ReloadContext, UseItemCapability, UseItemContext,
};
pub use mode::{ActionMode, TargetType};
pub use outcome::{Action, Effect, ExecutionReport, PossibleAction};
pub use potential::PotentialActions;
