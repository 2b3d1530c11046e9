//! Deterministic combat mechanics shared by every game client.
//!
//! `combat-core` defines the three stateful combat primitives and nothing
//! else: [`effect::Effect`] payloads, cooldown-gated [`ability::Ability`]
//! instances, and ammunition-gated [`weapon::Weapon`] instances. Targeting,
//! movement, rendering and audio playback live outside this crate; audio is
//! reached only through the [`audio::SoundService`] seam.
//!
//! All transitions are synchronous and total. The caller drives them from its
//! per-tick update loop, typically through a per-unit [`loadout::Loadout`].
pub mod ability;
pub mod audio;
pub mod config;
pub mod effect;
pub mod error;
pub mod loadout;
pub mod weapon;

pub use ability::{Ability, AbilityDefinition, AbilityStatus, CooldownTimer};
pub use audio::{AudioError, AudioSettings, SoundClip, SoundService};
pub use config::CombatConfig;
pub use effect::{
    BuffDamage, BuffMoveSpeed, DebuffDamage, DebuffMoveSpeed, DoDamage, DoDamageAoe, Effect,
    EffectKind, EffectParameters, GoldMultiplier, Heal, Poison,
};
pub use error::{ContentError, ErrorSeverity, GameError};
pub use loadout::{AbilitySlots, Loadout, LoadoutBuilder, LoadoutError};
pub use weapon::{AttackOutcome, Weapon, WeaponSpec, WeaponStatus};
