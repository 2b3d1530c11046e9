//! Content factory for building a catalog from a data directory.

use std::path::{Path, PathBuf};

use combat_core::CombatConfig;

use crate::loaders::{
    AbilityLoader, ConfigLoader, ContentCatalog, LoadResult, WeaponLoader,
};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── abilities.ron
/// └── weapons.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load and validate `abilities.ron` and `weapons.ron` into a catalog.
    pub fn load_catalog(&self) -> LoadResult<ContentCatalog> {
        let abilities = AbilityLoader::load(&self.data_dir.join("abilities.ron"))?;
        let weapons = WeaponLoader::load(&self.data_dir.join("weapons.ron"))?;
        let catalog = ContentCatalog::from_definitions(abilities, weapons).map_err(|e| {
            anyhow::anyhow!("Invalid content in {}: {}", self.data_dir.display(), e)
        })?;

        tracing::info!(
            dir = %self.data_dir.display(),
            abilities = catalog.abilities().count(),
            weapons = catalog.weapons().count(),
            "content loaded"
        );
        Ok(catalog)
    }
}
