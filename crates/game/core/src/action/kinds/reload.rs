use crate::action::capability::ModeCapability;
use crate::action::context::ModeContext;
use crate::action::failure::ActionFailure;
use crate::action::interaction::{InteractionDefinition, InteractionTable};
use crate::action::mode::{ActionMode, TargetType};
use crate::action::outcome::Effect;
use crate::state::{EntityId, ItemId, Magazine, World, WorldError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReloadContext {
    pub actor: EntityId,
    pub weapon: ItemId,
    /// Upper bound on rounds to load.
    pub rounds: u32,
}

impl ReloadContext {
    pub fn new(actor: EntityId, weapon: ItemId, rounds: u32) -> Self {
        Self {
            actor,
            weapon,
            rounds,
        }
    }

    /// Loads as many rounds as fit.
    pub fn fill(actor: EntityId, weapon: ItemId) -> Self {
        Self::new(actor, weapon, u32::MAX)
    }
}

impl ModeContext for ReloadContext {
    const MODE: ActionMode = ActionMode::Reload;

    fn source(&self) -> EntityId {
        self.actor
    }

    fn target(&self) -> EntityId {
        self.actor
    }

    fn item(&self) -> Option<ItemId> {
        Some(self.weapon)
    }

    fn definition(table: &InteractionTable) -> Option<InteractionDefinition<Self>> {
        table.reload
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReloadCapability {
    pub weapon: ItemId,
}

impl ReloadCapability {
    pub fn new(weapon: ItemId) -> Self {
        Self { weapon }
    }
}

impl ModeCapability for ReloadCapability {
    type Context = ReloadContext;

    fn source_item(&self) -> Option<ItemId> {
        Some(self.weapon)
    }

    fn target_type(&self) -> TargetType {
        TargetType::SelfOnly
    }

    fn check_outside(&self, _world: &World, context: &ReloadContext) -> Result<(), ActionFailure> {
        if context.weapon == self.weapon {
            Ok(())
        } else {
            Err(ActionFailure::ItemMismatch)
        }
    }
}

pub(crate) const HUMAN: InteractionDefinition<ReloadContext> =
    InteractionDefinition::new(check_reload, load_rounds);

fn magazine_of(world: &World, weapon: ItemId) -> Option<Magazine> {
    world.item(weapon)?.weapon()?.magazine
}

fn check_reload(
    world: &World,
    owner: EntityId,
    context: &ReloadContext,
) -> Result<(), ActionFailure> {
    let magazine = magazine_of(world, context.weapon).ok_or(ActionFailure::ItemCannotBeReloaded)?;
    let human = world.human(owner).ok_or(ActionFailure::ItemNotPresent)?;
    if !human.carries(context.weapon) {
        return Err(ActionFailure::ItemNotPresent);
    }
    if magazine.missing() == 0 {
        return Err(ActionFailure::MagazineFull);
    }
    if !human.inventory.contains(magazine.ammo) {
        return Err(ActionFailure::NoAmmoInInventory);
    }
    Ok(())
}

fn load_rounds(
    world: &mut World,
    owner: EntityId,
    context: &ReloadContext,
) -> Result<Effect, WorldError> {
    let Some(magazine) = magazine_of(world, context.weapon) else {
        return Ok(Effect::None);
    };
    let wanted = context.rounds.min(magazine.missing());
    let taken = world
        .human_mut(owner)?
        .inventory
        .remove_bulk(magazine.ammo, wanted);

    let loaded = world
        .item_mut(context.weapon)?
        .weapon_mut()
        .and_then(|weapon| weapon.magazine.as_mut())
        .map(|magazine| magazine.load(taken))
        .unwrap_or(0);

    Ok(Effect::Reloaded {
        weapon: context.weapon,
        rounds: loaded,
    })
}
