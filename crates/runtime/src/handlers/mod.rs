//! Post-execution handlers.
//!
//! Handlers run after every executed action and bring the world back in
//! line with the rules that hooks do not enforce themselves.

pub mod death;

pub use death::DeathHandler;
