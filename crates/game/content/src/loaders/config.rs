//! Game configuration loader.

use std::path::Path;

use tactics_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] from TOML files.
///
/// Missing tables and fields fall back to their defaults, so an empty file
/// is a valid configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_ai_table_keeps_other_defaults() {
        let config = ConfigLoader::parse("max_turns = 7\n[ai]\ncombat_entry_delay = 0\n").unwrap();

        assert_eq!(config.max_turns, 7);
        assert_eq!(config.ai.combat_entry_delay, 0);
        assert_eq!(config.ai.flee_hp_threshold, tactics_core::AiConfig::DEFAULT_FLEE_HP_THRESHOLD);
    }
}
