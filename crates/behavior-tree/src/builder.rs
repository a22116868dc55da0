//! Boxed shorthands for assembling trees.
//!
//! `selector(vec![condition(is_hurt), action(heal)])` instead of nesting
//! `Box::new(Selector::new(vec![Box::new(...)]))` by hand.

use crate::{Action, Behavior, Condition, Guard, Selector, Sequence, Status};

#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn guard<C: 'static>(
    predicate: fn(&C) -> bool,
    child: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    Box::new(Guard::new(predicate, child))
}

#[inline]
pub fn condition<C: 'static>(predicate: fn(&C) -> bool) -> Box<dyn Behavior<C>> {
    Box::new(Condition::new(predicate))
}

#[inline]
pub fn action<C: 'static>(run: fn(&mut C) -> Status) -> Box<dyn Behavior<C>> {
    Box::new(Action::new(run))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Body {
        hp: u32,
        healed: bool,
    }

    fn hurt(ctx: &Body) -> bool {
        ctx.hp < 5
    }

    fn steady(ctx: &Body) -> bool {
        ctx.hp >= 5
    }

    fn heal(ctx: &mut Body) -> Status {
        ctx.healed = true;
        Status::Success
    }

    #[test]
    fn assembled_tree_follows_priority() {
        let tree = selector(vec![
            sequence(vec![condition(hurt), action(heal)]),
            guard(steady, action(|_| Status::Success)),
        ]);

        let mut fine = Body { hp: 9, healed: false };
        assert!(tree.tick(&mut fine).is_success());
        assert!(!fine.healed);

        let mut wounded = Body { hp: 2, healed: false };
        assert!(tree.tick(&mut wounded).is_success());
        assert!(wounded.healed);
    }
}
