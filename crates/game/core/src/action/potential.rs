use std::collections::BTreeMap;

use super::mode::ActionMode;
use super::outcome::{Action, PossibleAction};

/// Actions discovered for one actor during one turn, grouped by mode.
///
/// Impossible entries are kept alongside possible ones so controllers can see
/// why an option failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PotentialActions {
    by_mode: BTreeMap<ActionMode, Vec<Action>>,
}

impl PotentialActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `action` to the list of its context's mode.
    pub fn add(&mut self, action: Action) {
        self.by_mode.entry(action.mode()).or_default().push(action);
    }

    /// Actions of `mode` in discovery order; empty when none were found.
    pub fn actions_for_mode(&self, mode: ActionMode) -> &[Action] {
        self.by_mode.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn possible_for_mode(&self, mode: ActionMode) -> impl Iterator<Item = &PossibleAction> {
        self.actions_for_mode(mode)
            .iter()
            .filter_map(Action::as_possible)
    }

    pub fn all(&self) -> &BTreeMap<ActionMode, Vec<Action>> {
        &self.by_mode
    }

    /// Every possible action, grouped in mode order.
    pub fn possible(&self) -> impl Iterator<Item = &PossibleAction> {
        self.by_mode
            .values()
            .flatten()
            .filter_map(Action::as_possible)
    }

    pub fn contains_mode(&self, mode: ActionMode) -> bool {
        !self.actions_for_mode(mode).is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_mode.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.by_mode.clear();
    }
}

impl Extend<Action> for PotentialActions {
    fn extend<T: IntoIterator<Item = Action>>(&mut self, iter: T) {
        for action in iter {
            self.add(action);
        }
    }
}

impl FromIterator<Action> for PotentialActions {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        let mut actions = Self::new();
        actions.extend(iter);
        actions
    }
}
