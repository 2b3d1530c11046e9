//! Tool configuration: data directory plus environment overrides.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use combat_content::{ContentCatalog, ContentFactory};
use combat_core::CombatConfig;

/// Everything a command needs to run against a content set.
#[derive(Clone, Debug)]
pub struct ToolConfig {
    pub combat: CombatConfig,
    /// Data directory; `None` uses the content compiled into the binary.
    pub data_dir: Option<PathBuf>,
}

impl ToolConfig {
    /// Resolve configuration from an optional data directory and the environment.
    ///
    /// Environment variables:
    /// - `COMBAT_DATA_DIR` - Content directory when `--data-dir` is not given
    /// - `COMBAT_SOUND_ENABLED` - Override `audio.sound_enabled`
    /// - `COMBAT_TICKS_PER_SECOND` - Override `ticks_per_second` (minimum 1)
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.or_else(|| env::var("COMBAT_DATA_DIR").ok().map(PathBuf::from));

        let mut combat = match &data_dir {
            Some(dir) => ContentFactory::new(dir).load_config()?,
            None => combat_content::ConfigLoader::embedded()?,
        };

        apply_overrides(&mut combat, |key| env::var(key).ok());

        tracing::debug!(?combat, ?data_dir, "configuration resolved");
        Ok(Self { combat, data_dir })
    }

    pub fn catalog(&self) -> Result<ContentCatalog> {
        match &self.data_dir {
            Some(dir) => ContentFactory::new(dir).load_catalog(),
            None => ContentCatalog::embedded(),
        }
    }
}

/// Layers `COMBAT_*` overrides from `lookup` onto `combat`.
///
/// Unparseable values are ignored; the tick rate is floored at 1.
fn apply_overrides(combat: &mut CombatConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(enabled) = read_env::<bool>(&lookup, "COMBAT_SOUND_ENABLED") {
        combat.audio.sound_enabled = enabled;
    }
    if let Some(ticks) = read_env::<u32>(&lookup, "COMBAT_TICKS_PER_SECOND") {
        combat.ticks_per_second = ticks.max(1);
    }
}

fn read_env<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
