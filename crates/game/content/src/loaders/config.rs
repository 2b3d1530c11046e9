//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing CombatConfig
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML source. Missing keys fall back to defaults.
    pub fn parse(source: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// Configuration embedded in the crate.
    pub fn embedded() -> LoadResult<CombatConfig> {
        Self::parse(include_str!("../../data/config.toml"))
    }
}
