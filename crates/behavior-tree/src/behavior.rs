//! Core behavior trait and leaf nodes.
//!
//! [`Behavior`] is generic over a context type `C`, the blackboard that nodes
//! read and write while a tree is evaluated.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node once.
    ///
    /// Nodes may write intermediate results into `ctx`; a parent composite
    /// sees those writes when it moves on to the next child.
    fn tick(&self, ctx: &mut C) -> Status;
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

/// Leaf that succeeds when a read-only predicate holds.
pub struct Condition<C> {
    predicate: fn(&C) -> bool,
}

impl<C> Condition<C> {
    pub fn new(predicate: fn(&C) -> bool) -> Self {
        Self { predicate }
    }
}

impl<C> Behavior<C> for Condition<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.predicate)(ctx).into()
    }
}

/// Leaf that runs a function against the context and reports its status.
pub struct Action<C> {
    run: fn(&mut C) -> Status,
}

impl<C> Action<C> {
    pub fn new(run: fn(&mut C) -> Status) -> Self {
        Self { run }
    }
}

impl<C> Behavior<C> for Action<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.run)(ctx)
    }
}
