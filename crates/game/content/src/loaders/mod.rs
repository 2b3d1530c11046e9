//! Content loaders for reading combat data from files.
//!
//! RON is used for definition lists (abilities, weapons) and TOML for
//! configuration. Loaders only parse; [`ContentCatalog`] validates.

pub mod abilities;
pub mod catalog;
pub mod config;
pub mod factory;
pub mod weapons;

pub use abilities::AbilityLoader;
pub use catalog::ContentCatalog;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use weapons::WeaponLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// RON options shared by every definition loader.
///
/// `UNWRAP_VARIANT_NEWTYPES` lets effects be written as
/// `BuffMoveSpeed(amount: 30)` instead of `BuffMoveSpeed((amount: 30))`.
pub(crate) fn ron_options() -> ron::Options {
    ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::UNWRAP_VARIANT_NEWTYPES)
}
