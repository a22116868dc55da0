//! Behavior nodes of the tactical controller.
//!
//! Each node either records one action on the [`AiContext`] and succeeds, or
//! fails and lets the selector move on to the next priority.
//!
//! - `combat`: flee, melee, ranged, heal, reload, chase
//! - `exploration`: heal, reload, pickup, pickup path, wander

pub mod combat;
pub mod exploration;

pub use combat::*;
pub use exploration::*;

use behavior_tree::Status;

use crate::providers::ai::AiContext;

/// Terminal fallback: never picks anything.
pub fn idle(_ctx: &mut AiContext) -> Status {
    Status::Failure
}
