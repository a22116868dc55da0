//! Validation outcomes and execution results.

use crate::state::{EntityId, EquipmentSlot, ItemId, Position, World, WorldError};

use super::context::ActionContext;
use super::failure::ActionFailure;
use super::mode::ActionMode;

/// Result of validating a context against a capability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Possible(PossibleAction),
    Impossible {
        context: ActionContext,
        reason: ActionFailure,
    },
}

impl Action {
    pub fn context(&self) -> &ActionContext {
        match self {
            Action::Possible(action) => action.context(),
            Action::Impossible { context, .. } => context,
        }
    }

    pub fn mode(&self) -> ActionMode {
        self.context().mode()
    }

    pub fn is_possible(&self) -> bool {
        matches!(self, Action::Possible(_))
    }

    pub fn as_possible(&self) -> Option<&PossibleAction> {
        match self {
            Action::Possible(action) => Some(action),
            Action::Impossible { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<ActionFailure> {
        match self {
            Action::Possible(_) => None,
            Action::Impossible { reason, .. } => Some(*reason),
        }
    }
}

/// A fully validated context, authorized for execution.
///
/// Only the validation pipeline constructs these. The context's entity and
/// item handles locate both sides' hooks at execution time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PossibleAction {
    context: ActionContext,
}

impl PossibleAction {
    pub(crate) fn new(context: ActionContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &ActionContext {
        &self.context
    }

    pub fn mode(&self) -> ActionMode {
        self.context.mode()
    }

    /// Runs the source-side hook, then the target-side hook.
    pub fn execute(&self, world: &mut World) -> Result<ExecutionReport, WorldError> {
        self.context.run_hooks(world)
    }
}

/// Effects returned by both sides of one execution.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExecutionReport {
    pub source: Effect,
    pub target: Effect,
}

impl ExecutionReport {
    /// Iterates over the non-empty effects, source first.
    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        [&self.source, &self.target]
            .into_iter()
            .filter(|effect| !matches!(effect, Effect::None))
    }
}

/// Value a hook hands back to callers that care about it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Effect {
    /// No value.
    #[default]
    None,
    Moved {
        from: Position,
        to: Position,
    },
    Damaged {
        target: EntityId,
        amount: u32,
        remaining_hp: u32,
    },
    AmmoSpent {
        weapon: ItemId,
        remaining: u32,
    },
    Equipped {
        slot: EquipmentSlot,
        item: ItemId,
    },
    Unequipped {
        slot: EquipmentSlot,
        item: ItemId,
    },
    InventoryViewed {
        owner: EntityId,
        items: Vec<(ItemId, u32)>,
    },
    ItemTransferred {
        item: ItemId,
        from: EntityId,
        to: EntityId,
    },
    PickedUp {
        item: ItemId,
    },
    Reloaded {
        weapon: ItemId,
        rounds: u32,
    },
    Consumed {
        item: ItemId,
    },
    Healed {
        target: EntityId,
        amount: u32,
    },
    /// Report of the context wrapped by a use-item interaction.
    Delegated(Box<ExecutionReport>),
}
