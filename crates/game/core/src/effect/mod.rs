//! Effects - the mechanical consequence of activating an ability.
//!
//! An effect is an immutable value: it says *what* happens (deal 30 damage in
//! a 50 unit radius, grant +30 move speed) but never *to whom*. Target
//! selection and application belong to the combat controller.
//!
//! # Architecture
//!
//! This module uses an **Enum + Struct hybrid** approach:
//! - Individual effect types are structs with private fields and accessors
//! - The [`Effect`] enum wraps them for serialization and dispatching
//! - Name and [`EffectKind`] are derived from the variant, so they can never
//!   drift from the payload

mod damage;
mod kind;
mod modifier;
mod support;

pub use damage::{DoDamage, DoDamageAoe, Poison};
pub use kind::EffectKind;
pub use modifier::{BuffDamage, BuffMoveSpeed, DebuffDamage, DebuffMoveSpeed};
pub use support::{GoldMultiplier, Heal};

use arrayvec::ArrayVec;

use crate::error::ContentError;

/// Named numeric parameters of an effect, in declaration order.
pub type EffectParameters = ArrayVec<(&'static str, i32), 2>;

/// A mechanical outcome produced by an ability.
///
/// Serialized variant tags match [`Effect::name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    // ========================================================================
    // Modifiers
    // ========================================================================
    BuffDamage(BuffDamage),
    BuffMoveSpeed(BuffMoveSpeed),
    DebuffDamage(DebuffDamage),
    DebuffMoveSpeed(DebuffMoveSpeed),

    // ========================================================================
    // Damage
    // ========================================================================
    DoDamage(DoDamage),
    #[cfg_attr(feature = "serde", serde(rename = "DoDamageAOE"))]
    DoDamageAoe(DoDamageAoe),
    Poison(Poison),

    // ========================================================================
    // Support
    // ========================================================================
    Heal(Heal),
    GoldMultiplier(GoldMultiplier),
}

impl Effect {
    /// Display name of the effect.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BuffDamage(_) => "BuffDamage",
            Self::BuffMoveSpeed(_) => "BuffMoveSpeed",
            Self::DebuffDamage(_) => "DebuffDamage",
            Self::DebuffMoveSpeed(_) => "DebuffMoveSpeed",
            Self::DoDamage(_) => "DoDamage",
            Self::DoDamageAoe(_) => "DoDamageAOE",
            Self::Poison(_) => "Poison",
            Self::Heal(_) => "Heal",
            Self::GoldMultiplier(_) => "GoldMultiplier",
        }
    }

    /// Category of the effect.
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::BuffDamage(_)
            | Self::BuffMoveSpeed(_)
            | Self::Heal(_)
            | Self::GoldMultiplier(_) => EffectKind::Buff,
            Self::DebuffDamage(_) | Self::DebuffMoveSpeed(_) => EffectKind::Debuff,
            Self::DoDamage(_) => EffectKind::Damage,
            Self::DoDamageAoe(_) => EffectKind::Aoe,
            Self::Poison(_) => EffectKind::Dot,
        }
    }

    /// Numeric parameters as `(label, value)` pairs.
    pub fn parameters(&self) -> EffectParameters {
        let mut params = EffectParameters::new();
        match self {
            Self::BuffDamage(e) => params.push(("amount", e.amount())),
            Self::BuffMoveSpeed(e) => params.push(("amount", e.amount())),
            Self::DebuffDamage(e) => params.push(("amount", e.amount())),
            Self::DebuffMoveSpeed(e) => params.push(("amount", e.amount())),
            Self::DoDamage(e) => {
                params.push(("damage", e.damage()));
                params.push(("range", e.range()));
            }
            Self::DoDamageAoe(e) => {
                params.push(("damage", e.damage()));
                params.push(("aoe", e.aoe()));
            }
            Self::Poison(e) => params.push(("damage_per_second", e.damage_per_second())),
            Self::Heal(e) => params.push(("amount", e.amount())),
            Self::GoldMultiplier(e) => params.push(("multiplier", e.multiplier())),
        }
        params
    }

    /// Load-time check that every parameter is non-negative.
    ///
    /// `owner` names the definition carrying this effect and is only used in
    /// the error message.
    pub fn validate(&self, owner: &str) -> Result<(), ContentError> {
        match self.parameters().into_iter().find(|(_, value)| *value < 0) {
            Some((field, value)) => Err(ContentError::NegativeParameter {
                owner: owner.to_owned(),
                field,
                value,
            }),
            None => Ok(()),
        }
    }
}

// Convenience conversions from concrete effect types.
macro_rules! impl_from_effect {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Effect {
                fn from(effect: $ty) -> Self {
                    Self::$ty(effect)
                }
            }
        )*
    };
}

impl_from_effect!(
    BuffDamage,
    BuffMoveSpeed,
    DebuffDamage,
    DebuffMoveSpeed,
    DoDamage,
    DoDamageAoe,
    Poison,
    Heal,
    GoldMultiplier,
);

impl core::fmt::Display for Effect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} [{}]", self.name(), self.kind())?;
        for (label, value) in self.parameters() {
            write!(f, " {label}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aoe_accessors_return_constructor_values() {
        let aoe = DoDamageAoe::new(30, 50);
        assert_eq!(aoe.damage(), 30);
        assert_eq!(aoe.aoe(), 50);

        let effect = Effect::from(aoe);
        assert_eq!(effect.name(), "DoDamageAOE");
        assert_eq!(effect.kind(), EffectKind::Aoe);
    }

    #[test]
    fn kinds_per_variant() {
        let cases: [(Effect, EffectKind); 9] = [
            (BuffDamage::new(5).into(), EffectKind::Buff),
            (BuffMoveSpeed::new(30).into(), EffectKind::Buff),
            (DebuffDamage::new(5).into(), EffectKind::Debuff),
            (DebuffMoveSpeed::new(5).into(), EffectKind::Debuff),
            (DoDamage::new(40, 120).into(), EffectKind::Damage),
            (DoDamageAoe::new(30, 50).into(), EffectKind::Aoe),
            (Poison::new(4).into(), EffectKind::Dot),
            (Heal::new(25).into(), EffectKind::Buff),
            (GoldMultiplier::new(2).into(), EffectKind::Buff),
        ];
        for (effect, kind) in cases {
            assert_eq!(effect.kind(), kind, "{}", effect.name());
        }
    }

    #[test]
    fn move_speed_buff_is_a_buff() {
        assert_eq!(Effect::from(BuffMoveSpeed::new(30)).kind(), EffectKind::Buff);
    }

    #[test]
    fn construction_accepts_zero_and_negative() {
        assert_eq!(Heal::new(0).amount(), 0);
        assert_eq!(DoDamage::new(-10, -1).damage(), -10);
        assert_eq!(DoDamage::new(-10, -1).range(), -1);
    }

    #[test]
    fn parameters_in_declaration_order() {
        let params = Effect::from(DoDamage::new(40, 120)).parameters();
        assert_eq!(params.as_slice(), &[("damage", 40), ("range", 120)]);

        let params = Effect::from(Poison::new(4)).parameters();
        assert_eq!(params.as_slice(), &[("damage_per_second", 4)]);
    }

    #[test]
    fn validate_rejects_first_negative_parameter() {
        let effect = Effect::from(DoDamageAoe::new(30, -5));
        assert_eq!(
            effect.validate("Grenade"),
            Err(ContentError::NegativeParameter {
                owner: "Grenade".into(),
                field: "aoe",
                value: -5,
            })
        );
        assert!(Effect::from(Heal::new(0)).validate("Bandage").is_ok());
    }

    #[test]
    fn display_lists_parameters() {
        let effect = Effect::from(DoDamageAoe::new(30, 50));
        assert_eq!(effect.to_string(), "DoDamageAOE [AOE] damage=30 aoe=50");
    }
}
