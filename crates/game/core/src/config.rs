/// Simulation tunables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub ai: AiConfig,
    /// Upper bound on turns a driver runs before stopping on its own.
    pub max_turns: u32,
}

impl GameConfig {
    pub const DEFAULT_MAX_TURNS: u32 = 100;

    pub fn new() -> Self {
        Self {
            ai: AiConfig::default(),
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }

    pub fn with_ai(mut self, ai: AiConfig) -> Self {
        self.ai = ai;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Thresholds and counters used by the tactical controller.
///
/// Delays are counted in controller updates, one per turn of the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    /// At or below this HP the actor tries to step away from its enemy.
    pub flee_hp_threshold: u32,
    /// At or below this HP the actor heals during combat.
    pub heal_hp_threshold: u32,
    /// Updates after entering combat before any combat behavior acts.
    pub combat_entry_delay: u32,
    /// Updates after entering combat before an attack may be chosen.
    pub attack_acquisition_delay: u32,
    /// Quiet updates required before leaving combat.
    pub combat_exit_delay: u32,
}

impl AiConfig {
    pub const DEFAULT_FLEE_HP_THRESHOLD: u32 = 20;
    pub const DEFAULT_HEAL_HP_THRESHOLD: u32 = 30;
    pub const DEFAULT_COMBAT_ENTRY_DELAY: u32 = 3;
    pub const DEFAULT_ATTACK_ACQUISITION_DELAY: u32 = 1;
    pub const DEFAULT_COMBAT_EXIT_DELAY: u32 = 4;

    /// Config with every delay at zero, so combat behaviors act immediately.
    pub fn immediate() -> Self {
        Self {
            combat_entry_delay: 0,
            attack_acquisition_delay: 0,
            ..Self::default()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            flee_hp_threshold: Self::DEFAULT_FLEE_HP_THRESHOLD,
            heal_hp_threshold: Self::DEFAULT_HEAL_HP_THRESHOLD,
            combat_entry_delay: Self::DEFAULT_COMBAT_ENTRY_DELAY,
            attack_acquisition_delay: Self::DEFAULT_ATTACK_ACQUISITION_DELAY,
            combat_exit_delay: Self::DEFAULT_COMBAT_EXIT_DELAY,
        }
    }
}
