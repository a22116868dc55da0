use crate::action::capability::ModeCapability;
use crate::action::context::ModeContext;
use crate::action::failure::ActionFailure;
use crate::action::interaction::{InteractionDefinition, InteractionTable};
use crate::action::mode::{ActionMode, TargetType};
use crate::action::outcome::Effect;
use crate::state::{EntityId, ItemId, ItemKind, World, WorldError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealContext {
    pub actor: EntityId,
    pub target: EntityId,
    pub med_kit: ItemId,
    pub amount: u32,
}

impl HealContext {
    /// Self-heal using the med-kit's own amount, or `None` if `med_kit` is
    /// not a med-kit.
    pub fn with_kit(world: &World, actor: EntityId, med_kit: ItemId) -> Option<Self> {
        match world.item(med_kit)?.kind {
            ItemKind::MedKit { heal_amount } => Some(Self {
                actor,
                target: actor,
                med_kit,
                amount: heal_amount,
            }),
            _ => None,
        }
    }
}

impl ModeContext for HealContext {
    const MODE: ActionMode = ActionMode::Heal;

    fn source(&self) -> EntityId {
        self.actor
    }

    fn target(&self) -> EntityId {
        self.target
    }

    fn item(&self) -> Option<ItemId> {
        Some(self.med_kit)
    }

    fn definition(table: &InteractionTable) -> Option<InteractionDefinition<Self>> {
        table.heal
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealCapability {
    pub med_kit: ItemId,
}

impl HealCapability {
    pub fn new(med_kit: ItemId) -> Self {
        Self { med_kit }
    }
}

impl ModeCapability for HealCapability {
    type Context = HealContext;

    fn source_item(&self) -> Option<ItemId> {
        Some(self.med_kit)
    }

    fn target_type(&self) -> TargetType {
        TargetType::SelfOnly
    }

    fn check_outside(&self, _world: &World, context: &HealContext) -> Result<(), ActionFailure> {
        if context.med_kit == self.med_kit {
            Ok(())
        } else {
            Err(ActionFailure::ItemMismatch)
        }
    }
}

/// Source side: the kit must be carried, and is used up.
pub(crate) const MED_KIT: InteractionDefinition<HealContext> =
    InteractionDefinition::new(kit_in_hand, consume_kit);

/// Target side: restore HP up to the maximum.
pub(crate) const HUMAN: InteractionDefinition<HealContext> =
    InteractionDefinition::new(check_wounded, restore_hp);

fn kit_in_hand(world: &World, owner: EntityId, context: &HealContext) -> Result<(), ActionFailure> {
    if world.human(context.target).is_none() {
        return Err(ActionFailure::HealOnNonHuman);
    }
    match world.human(owner) {
        Some(human) if human.inventory.contains(context.med_kit) => Ok(()),
        _ => Err(ActionFailure::ItemNotPresent),
    }
}

fn consume_kit(
    world: &mut World,
    owner: EntityId,
    context: &HealContext,
) -> Result<Effect, WorldError> {
    if world.human_mut(owner)?.inventory.remove(context.med_kit) {
        Ok(Effect::Consumed {
            item: context.med_kit,
        })
    } else {
        Ok(Effect::None)
    }
}

fn check_wounded(
    world: &World,
    owner: EntityId,
    _context: &HealContext,
) -> Result<(), ActionFailure> {
    let human = world.human(owner).ok_or(ActionFailure::HealOnNonHuman)?;
    if human.hp >= human.max_hp {
        Err(ActionFailure::ActorAtMaxHp)
    } else {
        Ok(())
    }
}

fn restore_hp(
    world: &mut World,
    owner: EntityId,
    context: &HealContext,
) -> Result<Effect, WorldError> {
    let amount = world.human_mut(owner)?.heal(context.amount);
    Ok(Effect::Healed {
        target: owner,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, Capability};
    use crate::action::kinds::fixtures;
    use crate::state::{EntityKind, Human, Position};

    fn patient(world: &mut World, hp: u32) -> (EntityId, ItemId) {
        let kit = world.add_item("med-kit", ItemKind::MedKit { heal_amount: 30 });
        let mut human = Human::new(100).with_hp(hp);
        human.inventory.add(kit);
        let id = world.spawn(Position::new(2, 2), EntityKind::Human(human)).unwrap();
        (id, kit)
    }

    #[test]
    fn heal_is_clamped_and_consumes_kit() {
        let mut world = fixtures::arena();
        let (hero, kit) = patient(&mut world, 90);

        let context = HealContext::with_kit(&world, hero, kit).unwrap();
        let Some(Action::Possible(action)) =
            Capability::Heal(HealCapability::new(kit)).validate(&world, &context.into())
        else {
            panic!("expected a possible heal");
        };
        let report = action.execute(&mut world).unwrap();

        assert_eq!(report.source, Effect::Consumed { item: kit });
        assert_eq!(
            report.target,
            Effect::Healed {
                target: hero,
                amount: 10
            }
        );
        assert!(!world.human(hero).unwrap().inventory.contains(kit));
    }

    #[test]
    fn healthy_actor_cannot_heal() {
        let mut world = fixtures::arena();
        let (hero, kit) = patient(&mut world, 100);

        let context = HealContext::with_kit(&world, hero, kit).unwrap();
        let action = Capability::Heal(HealCapability::new(kit))
            .validate(&world, &context.into())
            .unwrap();

        assert_eq!(action.failure(), Some(ActionFailure::ActorAtMaxHp));
    }
}
