//! Turn driver for the tactics simulation.
//!
//! This crate turns the pure rules in `tactics-core` into a running
//! simulation: it discovers each actor's potential actions, asks the bound
//! controller for a decision, executes it, and cleans up the dead.
//!
//! Modules are organized by responsibility:
//! - [`generator`] pairs capabilities with plausible targets
//! - [`registry`] binds controllers to actors
//! - [`providers`] hosts the tactical AI controller
//! - [`handlers`] reacts to the outcome of executed actions
//! - [`simulation`] runs turns and records what happened
pub mod error;
pub mod generator;
pub mod handlers;
pub mod providers;
pub mod registry;
pub mod simulation;

pub use error::{Result, RuntimeError};
pub use generator::ActionGenerator;
pub use handlers::DeathHandler;
pub use providers::ai::{AiContext, AiStateKind, TacticalController};
pub use registry::ControllerRegistry;
pub use simulation::{Simulation, TurnRecord};
