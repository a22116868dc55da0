//! Candidate interaction instances.
//!
//! Each mode has its own context struct (defined next to its rules in
//! [`kinds`](super::kinds)); [`ActionContext`] is the closed union over them.
//! Contexts are plain data and never own world state.

use core::fmt;

use crate::state::{EntityId, ItemId, World, WorldError};

use super::failure::ActionFailure;
use super::interaction::{InteractionDefinition, InteractionTable};
use super::kinds::{
    AttackContext, EquipContext, HealContext, InventoryContext, MovementContext, PickUpContext,
    ReloadContext, UseItemContext,
};
use super::mode::ActionMode;
use super::outcome::{Effect, ExecutionReport};

/// Behaviour shared by every per-mode context.
pub trait ModeContext: Clone + fmt::Debug + PartialEq + Into<ActionContext> {
    const MODE: ActionMode;

    fn source(&self) -> EntityId;

    fn target(&self) -> EntityId;

    /// Item on the initiating side, whose interaction table supplies the
    /// source-side definition.
    fn item(&self) -> Option<ItemId> {
        None
    }

    /// Selects this mode's definition from an interaction table.
    fn definition(table: &InteractionTable) -> Option<InteractionDefinition<Self>>;

    fn is_self(&self) -> bool {
        self.source() == self.target()
    }
}

fn source_definition<C: ModeContext>(
    world: &World,
    context: &C,
) -> Option<InteractionDefinition<C>> {
    let item = world.item(context.item()?)?;
    C::definition(&InteractionTable::for_item(&item.kind))
}

fn target_definition<C: ModeContext>(
    world: &World,
    context: &C,
) -> Option<InteractionDefinition<C>> {
    C::definition(world.entity(context.target())?.interactions())
}

/// Runs the source-side then the target-side inside validator.
pub(crate) fn check_inside<C: ModeContext>(
    world: &World,
    context: &C,
) -> Result<(), ActionFailure> {
    if let Some(definition) = source_definition(world, context) {
        (definition.validate)(world, context.source(), context)?;
    }
    if let Some(definition) = target_definition(world, context) {
        (definition.validate)(world, context.target(), context)?;
    }
    Ok(())
}

/// Runs the source-side hook then the target-side hook.
///
/// Each definition is looked up right before its hook runs, so a source hook
/// that consumes its item still fires exactly once.
pub(crate) fn run_hooks<C: ModeContext>(
    world: &mut World,
    context: &C,
) -> Result<ExecutionReport, WorldError> {
    let source = match source_definition(world, context) {
        Some(definition) => (definition.hook)(world, context.source(), context)?,
        None => Effect::None,
    };

    if world.entity(context.target()).is_none() {
        return Err(WorldError::EntityNotFound(context.target()));
    }
    let target = match target_definition(world, context) {
        Some(definition) => (definition.hook)(world, context.target(), context)?,
        None => Effect::None,
    };

    Ok(ExecutionReport { source, target })
}

/// One concrete interaction instance of any mode.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionContext {
    Movement(MovementContext),
    Attack(AttackContext),
    Equip(EquipContext),
    Inventory(InventoryContext),
    PickUp(PickUpContext),
    Reload(ReloadContext),
    Heal(HealContext),
    UseItem(UseItemContext),
}

macro_rules! each_context {
    ($value:expr, $ctx:ident => $body:expr) => {
        match $value {
            ActionContext::Movement($ctx) => $body,
            ActionContext::Attack($ctx) => $body,
            ActionContext::Equip($ctx) => $body,
            ActionContext::Inventory($ctx) => $body,
            ActionContext::PickUp($ctx) => $body,
            ActionContext::Reload($ctx) => $body,
            ActionContext::Heal($ctx) => $body,
            ActionContext::UseItem($ctx) => $body,
        }
    };
}

impl ActionContext {
    pub fn mode(&self) -> ActionMode {
        match self {
            ActionContext::Movement(_) => ActionMode::Movement,
            ActionContext::Attack(_) => ActionMode::Attack,
            ActionContext::Equip(_) => ActionMode::Equip,
            ActionContext::Inventory(_) => ActionMode::Inventory,
            ActionContext::PickUp(_) => ActionMode::PickUp,
            ActionContext::Reload(_) => ActionMode::Reload,
            ActionContext::Heal(_) => ActionMode::Heal,
            ActionContext::UseItem(_) => ActionMode::UseItem,
        }
    }

    pub fn source(&self) -> EntityId {
        each_context!(self, context => context.source())
    }

    pub fn target(&self) -> EntityId {
        each_context!(self, context => context.target())
    }

    pub fn item(&self) -> Option<ItemId> {
        each_context!(self, context => context.item())
    }

    pub fn is_self(&self) -> bool {
        self.source() == self.target()
    }

    pub(crate) fn check_inside(&self, world: &World) -> Result<(), ActionFailure> {
        each_context!(self, context => check_inside(world, context))
    }

    pub(crate) fn run_hooks(&self, world: &mut World) -> Result<ExecutionReport, WorldError> {
        each_context!(self, context => run_hooks(world, context))
    }

    pub fn as_movement(&self) -> Option<&MovementContext> {
        match self {
            ActionContext::Movement(context) => Some(context),
            _ => None,
        }
    }

    pub fn as_attack(&self) -> Option<&AttackContext> {
        match self {
            ActionContext::Attack(context) => Some(context),
            _ => None,
        }
    }

    pub fn as_inventory(&self) -> Option<&InventoryContext> {
        match self {
            ActionContext::Inventory(context) => Some(context),
            _ => None,
        }
    }

    pub fn as_use_item(&self) -> Option<&UseItemContext> {
        match self {
            ActionContext::UseItem(context) => Some(context),
            _ => None,
        }
    }
}

macro_rules! impl_from_context {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for ActionContext {
                fn from(context: $ty) -> Self {
                    ActionContext::$variant(context)
                }
            }
        )*
    };
}

impl_from_context!(
    Movement(MovementContext),
    Attack(AttackContext),
    Equip(EquipContext),
    Inventory(InventoryContext),
    PickUp(PickUpContext),
    Reload(ReloadContext),
    Heal(HealContext),
    UseItem(UseItemContext),
);
