//! Weapon spec loader.

use std::path::Path;

use combat_core::WeaponSpec;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file, ron_options};

/// Weapon list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponList {
    pub weapons: Vec<WeaponSpec>,
}

/// Loader for weapon specs from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load weapon specs from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<WeaponSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Parse weapon specs from RON source.
    pub fn parse(source: &str) -> LoadResult<Vec<WeaponSpec>> {
        let list: WeaponList = ron_options()
            .from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon RON: {}", e))?;

        Ok(list.weapons)
    }

    /// Weapon specs embedded in the crate.
    pub fn embedded() -> LoadResult<Vec<WeaponSpec>> {
        Self::parse(include_str!("../../data/weapons.ron"))
    }
}
