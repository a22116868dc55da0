//! Controllers provided by the runtime.
//!
//! The simple controllers live in `tactics-core`; this module adds the
//! tactical AI built on behavior trees.

pub mod ai;
