//! Small behavior tree library for turn-based decision making.
//!
//! Every tick completes immediately: there is no `Running` state and no delta
//! time. A tree is evaluated once per decision against a mutable blackboard
//! context, and leaves report plain success or failure.
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: success or failure
//! - Leaf nodes: [`Condition`], [`Action`]
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator node: [`Guard`]
//!
//! The [`builder`] module has boxed shorthands for assembling trees.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::{Action, Behavior, Condition};
pub use composite::{Selector, Sequence};
pub use decorator::Guard;
pub use status::Status;
