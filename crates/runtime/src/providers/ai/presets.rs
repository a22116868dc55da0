//! Behavior trees of the two controller states.
//!
//! ```text
//! combat()
//!   └─ Selector
//!       ├─ Guard(can_act)
//!       │   └─ Selector
//!       │       ├─ Sequence[badly_hurt?, Flee]
//!       │       ├─ Guard(can_attack) → MeleeAttack
//!       │       ├─ Guard(can_attack) → RangedAttack
//!       │       ├─ Sequence[needs_healing?, PatchUp]
//!       │       ├─ Sequence[out_of_ammo?, ReloadWhenDry]
//!       │       └─ Chase
//!       └─ idle
//!
//! exploration()
//!   └─ Selector
//!       ├─ Recover
//!       ├─ TopUp
//!       ├─ PickUpLoot
//!       ├─ Sequence[loot_out_of_reach?, ApproachLoot]
//!       ├─ Wander
//!       └─ idle
//! ```

use behavior_tree::Selector;
use behavior_tree::builder::{action, condition, guard, selector, sequence};

use super::context::AiContext;
use super::nodes::{
    ApproachLoot, Chase, Flee, MeleeAttack, PatchUp, PickUpLoot, RangedAttack, Recover,
    ReloadWhenDry, TopUp, Wander, idle,
};

pub fn combat() -> Selector<AiContext> {
    Selector::<AiContext>::new(vec![
        guard::<AiContext>(
            AiContext::can_act,
            selector::<AiContext>(vec![
                sequence::<AiContext>(vec![
                    condition::<AiContext>(AiContext::badly_hurt),
                    Box::new(Flee),
                ]),
                guard::<AiContext>(AiContext::can_attack, Box::new(MeleeAttack)),
                guard::<AiContext>(AiContext::can_attack, Box::new(RangedAttack)),
                sequence::<AiContext>(vec![
                    condition::<AiContext>(AiContext::needs_healing),
                    Box::new(PatchUp),
                ]),
                sequence::<AiContext>(vec![
                    condition::<AiContext>(AiContext::out_of_ammo),
                    Box::new(ReloadWhenDry),
                ]),
                Box::new(Chase),
            ]),
        ),
        action::<AiContext>(idle),
    ])
}

pub fn exploration() -> Selector<AiContext> {
    Selector::<AiContext>::new(vec![
        Box::new(Recover),
        Box::new(TopUp),
        Box::new(PickUpLoot),
        sequence::<AiContext>(vec![
            condition::<AiContext>(AiContext::loot_out_of_reach),
            Box::new(ApproachLoot),
        ]),
        Box::new(Wander),
        action::<AiContext>(idle),
    ])
}
