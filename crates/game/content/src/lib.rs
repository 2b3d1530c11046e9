//! Data-driven combat content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Ability archetypes (compiled in, mirrored by `data/abilities.ron`)
//! - Weapon archetypes (compiled in, mirrored by `data/weapons.ron`)
//! - Combat configuration (data-driven via TOML)
//!
//! Content is validated once at load time and shared with live instances
//! through `Arc`; it never changes while the game runs.

pub mod abilities;
pub mod weapons;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use abilities::AbilityArchetype;
pub use weapons::WeaponArchetype;

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, ConfigLoader, ContentCatalog, ContentFactory, LoadResult, WeaponLoader,
};
