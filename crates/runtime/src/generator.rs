//! Action discovery: pairs every capability of an actor with its plausible
//! targets and validates each pairing.

use tactics_core::{
    ActionContext, Capability, EntityId, EntityKind, EquipContext, EquipmentSlot, HealContext,
    InventoryContext, MovementContext, PickUpContext, PotentialActions, ReloadContext,
    UseItemContext, World,
};
use tracing::{debug, trace};

/// Builds one turn's [`PotentialActions`] for one actor.
///
/// Candidate targets per capability:
///
/// - movement: the four orthogonal neighbours
/// - attack: every other living human
/// - equip: every slot for a carried item; every occupied slot for unequip
/// - inventory: a view of the actor's own pack, plus view, take-out and
///   put-in of every carried item on each chest or corpse
/// - pickup: every item drop still lying on the grid
/// - reload: fill the bound weapon
/// - heal and use-item: self, with the bound med-kit
///
/// Impossible outcomes are kept; the tactical controller reads their reasons.
pub struct ActionGenerator;

impl ActionGenerator {
    pub fn discover(world: &World, actor: EntityId) -> PotentialActions {
        let mut actions = PotentialActions::new();
        let capabilities = world.capabilities(actor);

        for capability in &capabilities {
            for context in Self::candidates(world, actor, capability) {
                actions.extend(capability.validate(world, &context));
            }
        }

        debug!(
            actor = %actor,
            capabilities = capabilities.len(),
            discovered = actions.len(),
            possible = actions.possible().count(),
            "discovered actions"
        );
        actions
    }

    fn candidates(world: &World, actor: EntityId, capability: &Capability) -> Vec<ActionContext> {
        let Some(origin) = world.position_of(actor) else {
            return Vec::new();
        };

        let candidates: Vec<ActionContext> = match capability {
            Capability::Movement(_) => origin
                .orthogonal_neighbors()
                .into_iter()
                .map(|destination| MovementContext::new(actor, destination).into())
                .collect(),

            Capability::Attack(attack) => Self::living_humans(world, actor)
                .map(|target| attack.context(actor, target).into())
                .collect(),

            Capability::Equip(equip) => match equip.source_item {
                Some(item) => EquipmentSlot::ALL
                    .into_iter()
                    .map(|slot| EquipContext::equip(actor, item, slot).into())
                    .collect(),
                None => world
                    .human(actor)
                    .map(|human| {
                        EquipmentSlot::ALL
                            .into_iter()
                            .filter(|slot| human.equipment.get(*slot).is_some())
                            .map(|slot| EquipContext::unequip(actor, slot).into())
                            .collect()
                    })
                    .unwrap_or_default(),
            },

            Capability::Inventory(_) => {
                let mut contexts = vec![InventoryContext::view(actor, actor).into()];
                let carried: Vec<_> = world
                    .human(actor)
                    .map(|human| human.inventory.items().collect())
                    .unwrap_or_default();
                for entity in world.entities() {
                    let (EntityKind::Chest(container) | EntityKind::Corpse(container)) =
                        &entity.kind
                    else {
                        continue;
                    };
                    contexts.push(InventoryContext::view(actor, entity.id).into());
                    contexts.extend(
                        container
                            .inventory
                            .items()
                            .map(|item| InventoryContext::remove(actor, entity.id, item).into()),
                    );
                    contexts.extend(
                        carried
                            .iter()
                            .map(|item| InventoryContext::add(actor, entity.id, *item).into()),
                    );
                }
                contexts
            }

            Capability::PickUp(_) => world
                .entities()
                .filter(|entity| matches!(&entity.kind, EntityKind::ItemDrop(drop) if drop.present))
                .map(|entity| PickUpContext::new(actor, entity.id).into())
                .collect(),

            Capability::Reload(reload) => vec![ReloadContext::fill(actor, reload.weapon).into()],

            Capability::Heal(heal) => HealContext::with_kit(world, actor, heal.med_kit)
                .map(ActionContext::from)
                .into_iter()
                .collect(),

            Capability::UseItem(use_item) => HealContext::with_kit(world, actor, use_item.item)
                .map(|inner| UseItemContext::new(actor, use_item.item, inner).into())
                .into_iter()
                .collect(),
        };

        trace!(mode = %capability.mode(), candidates = candidates.len(), "generated candidates");
        candidates
    }

    fn living_humans(world: &World, actor: EntityId) -> impl Iterator<Item = EntityId> + '_ {
        world
            .entities()
            .filter(move |entity| entity.id != actor)
            .filter(|entity| matches!(entity.kind, EntityKind::Human(_)) && entity.is_alive())
            .map(|entity| entity.id)
    }
}
