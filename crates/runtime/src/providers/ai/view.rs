//! Flattened, categorized view of one turn's potential actions.

use tactics_core::{
    ActionContext, ActionFailure, ActionMode, AttackType, EntityId, Position, PossibleAction,
    PotentialActions,
};

/// What the behaviors need to know about the current turn's actions.
///
/// Use-item actions are sorted by the context they wrap, so a med-kit used
/// through `UseItem` counts as a heal.
#[derive(Clone, Debug, Default)]
pub struct ActionView {
    pub moves: Vec<PossibleAction>,
    pub melee: Vec<PossibleAction>,
    pub ranged: Vec<PossibleAction>,
    pub heals: Vec<PossibleAction>,
    pub reloads: Vec<PossibleAction>,
    pub pickups: Vec<PossibleAction>,
    /// Target of the first attack discovered this turn, possible or not.
    pub attack_target: Option<EntityId>,
    /// Target of the first pickup discovered this turn, possible or not.
    pub pickup_target: Option<EntityId>,
    /// Some attack failed because the weapon is empty.
    pub out_of_ammo: bool,
}

impl ActionView {
    pub fn new(actions: &PotentialActions) -> Self {
        let mut view = Self {
            attack_target: first_target(actions, ActionMode::Attack),
            pickup_target: first_target(actions, ActionMode::PickUp),
            out_of_ammo: actions
                .actions_for_mode(ActionMode::Attack)
                .iter()
                .any(|action| action.failure() == Some(ActionFailure::OutOfAmmo)),
            ..Self::default()
        };

        for action in actions.possible() {
            let effective = match action.context() {
                ActionContext::UseItem(use_item) => use_item.inner.as_ref(),
                other => other,
            };
            let bucket = match effective {
                ActionContext::Movement(_) => &mut view.moves,
                ActionContext::Attack(attack) => match attack.attack_type {
                    AttackType::Melee => &mut view.melee,
                    AttackType::Ranged => &mut view.ranged,
                    AttackType::Other => continue,
                },
                ActionContext::Heal(_) => &mut view.heals,
                ActionContext::Reload(_) => &mut view.reloads,
                ActionContext::PickUp(_) => &mut view.pickups,
                ActionContext::Equip(_)
                | ActionContext::Inventory(_)
                | ActionContext::UseItem(_) => continue,
            };
            bucket.push(action.clone());
        }
        view
    }

    pub fn melee(&self) -> &[PossibleAction] {
        &self.melee
    }

    pub fn ranged(&self) -> &[PossibleAction] {
        &self.ranged
    }

    pub fn heals(&self) -> &[PossibleAction] {
        &self.heals
    }

    pub fn reloads(&self) -> &[PossibleAction] {
        &self.reloads
    }

    pub fn pickups(&self) -> &[PossibleAction] {
        &self.pickups
    }

    pub fn any_attack_seen(&self) -> bool {
        self.attack_target.is_some()
    }

    /// A pickup was discovered but none of them can be done right now.
    pub fn pickup_out_of_reach(&self) -> bool {
        self.pickup_target.is_some() && self.pickups.is_empty()
    }

    /// The possible movement ending on `destination`, if one was offered.
    pub fn movement_to(&self, destination: Position) -> Option<&PossibleAction> {
        self.moves.iter().find(|action| {
            action
                .context()
                .as_movement()
                .is_some_and(|movement| movement.destination == destination)
        })
    }
}

fn first_target(actions: &PotentialActions, mode: ActionMode) -> Option<EntityId> {
    actions
        .actions_for_mode(mode)
        .first()
        .map(|action| action.context().target())
}
