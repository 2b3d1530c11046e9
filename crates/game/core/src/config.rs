use crate::audio::AudioSettings;

/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Number of discrete simulation ticks per second of game time.
    ///
    /// Ability cooldowns are counted in ticks; weapon timings are authored in
    /// seconds and converted with [`CombatConfig::ticks_for`].
    pub ticks_per_second: u32,

    /// Audio preferences consulted when weapons reload.
    pub audio: AudioSettings,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of abilities a single loadout can hold.
    pub const MAX_ABILITIES: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;

    pub fn new() -> Self {
        Self {
            ticks_per_second: Self::DEFAULT_TICKS_PER_SECOND,
            audio: AudioSettings::default(),
        }
    }

    pub fn with_ticks_per_second(ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second,
            ..Self::new()
        }
    }

    /// Converts a duration in seconds to whole ticks, rounding up.
    ///
    /// Non-finite or non-positive durations map to zero ticks.
    pub fn ticks_for(&self, seconds: f32) -> u32 {
        if !seconds.is_finite() || seconds <= 0.0 {
            return 0;
        }
        let ticks = (seconds * self.ticks_per_second as f32).ceil();
        if ticks >= u32::MAX as f32 {
            u32::MAX
        } else {
            ticks as u32
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
