/// Tag identifying a kind of interaction.
///
/// Every context, capability, and interaction definition belongs to exactly
/// one mode. [`PotentialActions`](super::PotentialActions) groups by it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionMode {
    Movement,
    Attack,
    Equip,
    Inventory,
    PickUp,
    Reload,
    Heal,
    UseItem,
}

impl ActionMode {
    pub const ALL: [ActionMode; 8] = [
        ActionMode::Movement,
        ActionMode::Attack,
        ActionMode::Equip,
        ActionMode::Inventory,
        ActionMode::PickUp,
        ActionMode::Reload,
        ActionMode::Heal,
        ActionMode::UseItem,
    ];
}

/// Which targets a capability accepts relative to its source.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetType {
    SelfOnly,
    OthersOnly,
    Any,
}

impl TargetType {
    pub fn admits(self, is_self: bool) -> bool {
        match self {
            TargetType::SelfOnly => is_self,
            TargetType::OthersOnly => !is_self,
            TargetType::Any => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip_through_strum() {
        assert_eq!(ActionMode::PickUp.to_string(), "pick_up");
        assert_eq!("use_item".parse::<ActionMode>(), Ok(ActionMode::UseItem));
        assert_eq!("ATTACK".parse::<ActionMode>(), Ok(ActionMode::Attack));
    }

    #[test]
    fn target_policy_filters_self() {
        assert!(TargetType::SelfOnly.admits(true));
        assert!(!TargetType::SelfOnly.admits(false));
        assert!(!TargetType::OthersOnly.admits(true));
        assert!(TargetType::Any.admits(true) && TargetType::Any.admits(false));
    }
}
