//! Cooldown-gated abilities.
//!
//! # Design
//!
//! - **AbilityDefinition**: immutable content (name, description, cooldown,
//!   effect), shared behind an `Arc`
//! - **CooldownTimer**: the per-instance mutable counter
//! - **Ability**: one live instance pairing the two
//!
//! Activation is unconditional. Callers are expected to check
//! [`Ability::is_ready`] first; activating while cooling down restarts the
//! timer at the full duration instead of queueing a second activation.

mod cooldown;

pub use cooldown::CooldownTimer;

use std::sync::Arc;

use crate::effect::Effect;
use crate::error::ContentError;

/// Immutable description of an ability.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDefinition {
    name: String,
    description: String,
    /// Cooldown duration in ticks.
    cooldown: u32,
    effect: Effect,
}

impl AbilityDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cooldown: u32,
        effect: impl Into<Effect>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            cooldown,
            effect: effect.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub const fn effect(&self) -> &Effect {
        &self.effect
    }

    /// Load-time validation: non-empty name and non-negative effect parameters.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.name.trim().is_empty() {
            return Err(ContentError::EmptyName);
        }
        self.effect.validate(&self.name)
    }
}

/// Observable state of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbilityStatus {
    Ready,
    CoolingDown { remaining: u32 },
}

/// A live ability instance owned by one unit.
///
/// Deserialization goes through [`Ability::restore`], so saved timers longer
/// than the definition's cooldown are capped on load.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SavedAbility")
)]
pub struct Ability {
    definition: Arc<AbilityDefinition>,
    timer: CooldownTimer,
}

/// Wire shape of [`Ability`], before the timer is capped.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SavedAbility {
    definition: Arc<AbilityDefinition>,
    timer: CooldownTimer,
}

#[cfg(feature = "serde")]
impl From<SavedAbility> for Ability {
    fn from(saved: SavedAbility) -> Self {
        Self::restore(saved.definition, saved.timer.remaining())
    }
}

impl Ability {
    /// Creates a ready instance of `definition`.
    pub fn new(definition: Arc<AbilityDefinition>) -> Self {
        Self {
            definition,
            timer: CooldownTimer::READY,
        }
    }

    /// Rebuilds an instance from saved state.
    ///
    /// `remaining` is capped at the definition's cooldown so the restored
    /// instance never exceeds its configured duration.
    pub fn restore(definition: Arc<AbilityDefinition>, remaining: u32) -> Self {
        let mut timer = CooldownTimer::READY;
        timer.restore(remaining, definition.cooldown());
        Self { definition, timer }
    }

    /// Triggers the ability and returns its effect for the caller to apply.
    ///
    /// Sets the remaining cooldown to the full duration, even if the ability
    /// was already cooling down.
    pub fn activate(&mut self) -> &Effect {
        if !self.timer.is_ready() {
            tracing::debug!(
                ability = self.definition.name(),
                remaining = self.timer.remaining(),
                "re-triggered while cooling down; timer reset"
            );
        }
        self.timer.trigger(self.definition.cooldown());
        tracing::debug!(
            ability = self.definition.name(),
            cooldown = self.definition.cooldown(),
            effect = self.definition.effect().name(),
            "ability activated"
        );
        self.definition.effect()
    }

    /// Advances the cooldown by one tick, never below zero.
    pub fn update_cooldown(&mut self) {
        if self.timer.tick() {
            tracing::debug!(ability = self.definition.name(), "ability ready");
        }
    }

    pub const fn is_ready(&self) -> bool {
        self.timer.is_ready()
    }

    pub const fn current_cooldown(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn status(&self) -> AbilityStatus {
        match self.timer.remaining() {
            0 => AbilityStatus::Ready,
            remaining => AbilityStatus::CoolingDown { remaining },
        }
    }

    /// Configured cooldown duration in ticks.
    pub fn cooldown(&self) -> u32 {
        self.definition.cooldown()
    }

    pub fn effect(&self) -> &Effect {
        self.definition.effect()
    }

    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn description(&self) -> &str {
        self.definition.description()
    }

    pub fn definition(&self) -> &Arc<AbilityDefinition> {
        &self.definition
    }
}

impl From<AbilityDefinition> for Ability {
    fn from(definition: AbilityDefinition) -> Self {
        Self::new(Arc::new(definition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{BuffMoveSpeed, EffectKind, Heal};

    fn steroids() -> AbilityDefinition {
        AbilityDefinition::new(
            "Steroids",
            "Doping products: move faster for a while.",
            30,
            BuffMoveSpeed::new(30),
        )
    }

    #[test]
    fn new_ability_is_ready() {
        let ability = Ability::from(steroids());
        assert!(ability.is_ready());
        assert_eq!(ability.current_cooldown(), 0);
        assert_eq!(ability.status(), AbilityStatus::Ready);
    }

    #[test]
    fn activate_returns_owned_effect_and_starts_cooldown() {
        let mut ability = Ability::from(steroids());
        let effect = *ability.activate();
        assert_eq!(effect, Effect::BuffMoveSpeed(BuffMoveSpeed::new(30)));
        assert_eq!(effect.kind(), EffectKind::Buff);
        assert_eq!(ability.current_cooldown(), 30);
        assert!(!ability.is_ready());

        ability.update_cooldown();
        assert_eq!(ability.current_cooldown(), 29);
        assert_eq!(ability.status(), AbilityStatus::CoolingDown { remaining: 29 });
    }

    #[test]
    fn full_cooldown_cycle_returns_to_ready() {
        let mut ability = Ability::from(steroids());
        ability.activate();
        for expected in (0..30).rev() {
            ability.update_cooldown();
            assert_eq!(ability.current_cooldown(), expected);
        }
        assert!(ability.is_ready());

        ability.update_cooldown();
        assert_eq!(ability.current_cooldown(), 0);
    }

    #[test]
    fn reactivation_resets_timer() {
        let mut ability = Ability::from(steroids());
        ability.activate();
        for _ in 0..10 {
            ability.update_cooldown();
        }
        ability.activate();
        assert_eq!(ability.current_cooldown(), 30);
    }

    #[test]
    fn zero_cooldown_is_always_ready() {
        let mut ability = Ability::from(AbilityDefinition::new("Pat", "", 0, Heal::new(1)));
        ability.activate();
        assert!(ability.is_ready());
    }

    #[test]
    fn instances_share_definition_but_not_timer() {
        let definition = Arc::new(steroids());
        let mut first = Ability::new(Arc::clone(&definition));
        let second = Ability::new(Arc::clone(&definition));

        first.activate();
        assert_eq!(first.current_cooldown(), 30);
        assert!(second.is_ready());
        assert!(Arc::ptr_eq(first.definition(), second.definition()));
    }

    #[test]
    fn restore_caps_remaining() {
        let ability = Ability::restore(Arc::new(steroids()), 99);
        assert_eq!(ability.current_cooldown(), 30);
    }

    #[test]
    fn validate_definition() {
        assert!(steroids().validate().is_ok());
        let unnamed = AbilityDefinition::new("  ", "", 5, Heal::new(5));
        assert_eq!(unnamed.validate(), Err(ContentError::EmptyName));
        let bad = AbilityDefinition::new("Leech", "", 5, Heal::new(-5));
        assert!(matches!(
            bad.validate(),
            Err(ContentError::NegativeParameter { field: "amount", .. })
        ));
    }

    #[test]
    fn ability_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Ability>();
    }
}
