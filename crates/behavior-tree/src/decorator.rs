//! Decorator behavior nodes.
//!
//! Decorators wrap a single child and decide whether it runs.

use crate::{Behavior, Status};

/// Runs the child only when `predicate` holds; fails otherwise.
pub struct Guard<C> {
    predicate: fn(&C) -> bool,
    child: Box<dyn Behavior<C>>,
}

impl<C> Guard<C> {
    pub fn new(predicate: fn(&C) -> bool, child: Box<dyn Behavior<C>>) -> Self {
        Self { predicate, child }
    }
}

impl<C> Behavior<C> for Guard<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if (self.predicate)(ctx) {
            self.child.tick(ctx)
        } else {
            Status::Failure
        }
    }
}
