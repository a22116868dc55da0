//! Combat/non-combat state machine of the tactical controller.

use tactics_core::AiConfig;

/// Delay counters of the combat state, reset every time combat is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatCounters {
    entry: u32,
    attack: u32,
    exit: u32,
}

impl CombatCounters {
    pub fn enter(config: &AiConfig) -> Self {
        Self {
            entry: config.combat_entry_delay,
            attack: config.attack_acquisition_delay,
            exit: config.combat_exit_delay,
        }
    }

    /// One state update: both delays count down, whatever ends up chosen.
    pub fn tick(&mut self) {
        self.entry = self.entry.saturating_sub(1);
        self.attack = self.attack.saturating_sub(1);
    }

    /// Any combat behavior may act.
    pub fn can_act(&self) -> bool {
        self.entry == 0
    }

    /// Attacks may be chosen.
    pub fn can_attack(&self) -> bool {
        self.entry == 0 && self.attack == 0
    }

    /// Advances the exit counter and reports whether combat is over.
    ///
    /// Any combat signal rearms the counter to `exit_delay`; quiet updates
    /// count it down.
    pub fn settle(&mut self, engaged: bool, exit_delay: u32) -> bool {
        if engaged {
            self.exit = exit_delay;
            return false;
        }
        self.exit = self.exit.saturating_sub(1);
        self.exit == 0
    }

    pub fn entry_delay(&self) -> u32 {
        self.entry
    }

    pub fn attack_delay(&self) -> u32 {
        self.attack
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AiState {
    #[default]
    NonCombat,
    Combat(CombatCounters),
}

impl AiState {
    pub fn kind(&self) -> AiStateKind {
        match self {
            AiState::NonCombat => AiStateKind::NonCombat,
            AiState::Combat(_) => AiStateKind::Combat,
        }
    }

    pub fn is_combat(&self) -> bool {
        matches!(self, AiState::Combat(_))
    }
}

/// Payload-free state tag, for logging and assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AiStateKind {
    NonCombat,
    Combat,
}
