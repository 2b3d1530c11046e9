//! Ammunition-gated weapons.
//!
//! A weapon is either `LOADED` (at least one round) or `EMPTY`. Attacking an
//! empty weapon does nothing; reloading always refills the magazine and, when
//! sound is enabled and a [`SoundService`] is attached, plays the reload clip.
//! Reload is instantaneous here: [`Weapon::reload_timer`] is metadata for
//! whatever drives animations and pacing outside the core.

use std::fmt;
use std::sync::Arc;

use crate::audio::{self, AudioSettings, SoundClip, SoundService};
use crate::error::ContentError;

/// Immutable configuration of a weapon archetype.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSpec {
    pub name: String,
    pub damage: u32,
    pub range: u32,
    /// Seconds between two consecutive attacks.
    pub attack_interval: f32,
    pub max_munitions: u32,
    /// Seconds the reload animation takes.
    pub reload_time: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reload_clip: SoundClip,
}

impl WeaponSpec {
    /// Load-time validation of the archetype numbers.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.name.trim().is_empty() {
            return Err(ContentError::EmptyName);
        }
        if self.max_munitions == 0 {
            return Err(ContentError::EmptyMagazine {
                weapon: self.name.clone(),
            });
        }
        for (field, value) in [
            ("attack_interval", self.attack_interval),
            ("reload_time", self.reload_time),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ContentError::InvalidTiming {
                    weapon: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Observable state of a weapon's magazine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponStatus {
    Loaded { munitions: u32 },
    Empty,
}

/// Result of pulling the trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    /// A round was spent.
    Fired {
        damage: u32,
        range: u32,
        remaining: u32,
    },
    /// The magazine was empty; nothing happened.
    Empty,
}

impl AttackOutcome {
    pub const fn fired(&self) -> bool {
        matches!(self, Self::Fired { .. })
    }
}

/// A live weapon owned by one unit.
#[derive(Clone)]
pub struct Weapon {
    spec: Arc<WeaponSpec>,
    munitions: u32,
    sound: Option<Arc<dyn SoundService>>,
}

impl Weapon {
    /// Creates a fully loaded weapon with no sound service attached.
    pub fn new(spec: Arc<WeaponSpec>) -> Self {
        let munitions = spec.max_munitions;
        Self {
            spec,
            munitions,
            sound: None,
        }
    }

    /// Attaches the service used to play the reload clip.
    pub fn with_sound(mut self, service: Arc<dyn SoundService>) -> Self {
        self.sound = Some(service);
        self
    }

    /// Spends one round if there is one.
    pub fn attack(&mut self) -> AttackOutcome {
        if self.munitions == 0 {
            tracing::trace!(weapon = %self.spec.name, "dry fire");
            return AttackOutcome::Empty;
        }
        self.munitions -= 1;
        if self.munitions == 0 {
            tracing::debug!(weapon = %self.spec.name, "magazine empty");
        }
        AttackOutcome::Fired {
            damage: self.spec.damage,
            range: self.spec.range,
            remaining: self.munitions,
        }
    }

    /// Refills the magazine and plays the reload clip if sound is enabled.
    ///
    /// Audio failures are logged and otherwise ignored.
    pub fn reload(&mut self, settings: &AudioSettings) {
        self.munitions = self.spec.max_munitions;
        let played = audio::play_if_enabled(self.sound.as_deref(), settings, &self.spec.reload_clip);
        tracing::debug!(
            weapon = %self.spec.name,
            munitions = self.munitions,
            sound = played,
            "reloaded"
        );
    }

    /// Sets the round count, clamped to the magazine capacity.
    pub fn set_munitions(&mut self, munitions: u32) {
        self.munitions = munitions.min(self.spec.max_munitions);
    }

    /// Sets the round count verbatim.
    ///
    /// Debug and save-state override: bypasses the `munitions <= max_munitions`
    /// invariant. Prefer [`set_munitions`](Self::set_munitions).
    pub fn set_munitions_unchecked(&mut self, munitions: u32) {
        self.munitions = munitions;
    }

    pub fn status(&self) -> WeaponStatus {
        match self.munitions {
            0 => WeaponStatus::Empty,
            munitions => WeaponStatus::Loaded { munitions },
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.munitions == 0
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn damage(&self) -> u32 {
        self.spec.damage
    }

    pub fn range(&self) -> u32 {
        self.spec.range
    }

    /// Seconds between attacks.
    pub fn attack_speed(&self) -> f32 {
        self.spec.attack_interval
    }

    pub const fn munitions(&self) -> u32 {
        self.munitions
    }

    pub fn max_munitions(&self) -> u32 {
        self.spec.max_munitions
    }

    /// Seconds the reload takes, for external pacing.
    pub fn reload_timer(&self) -> f32 {
        self.spec.reload_time
    }

    pub fn spec(&self) -> &Arc<WeaponSpec> {
        &self.spec
    }
}

impl fmt::Debug for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Weapon")
            .field("spec", &self.spec)
            .field("munitions", &self.munitions)
            .field("sound", &self.sound.is_some())
            .finish()
    }
}

impl From<WeaponSpec> for Weapon {
    fn from(spec: WeaponSpec) -> Self {
        Self::new(Arc::new(spec))
    }
}
