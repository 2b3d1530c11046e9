//! Effect classification.

/// Broad category an [`Effect`](super::Effect) belongs to.
///
/// The combat controller uses the kind to pick its application strategy
/// (single target, radius, recurring tick) without inspecting parameters.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum EffectKind {
    /// Positive modifier applied to the caster or allies.
    Buff,
    /// Negative modifier applied to an opponent.
    Debuff,
    /// Damage within a radius.
    Aoe,
    /// Damage spread over time.
    Dot,
    /// Direct, single-target damage.
    Damage,
}

impl EffectKind {
    /// Returns true for kinds that benefit their recipient.
    pub const fn is_beneficial(&self) -> bool {
        matches!(self, Self::Buff)
    }

    /// Returns true for kinds that deal damage in some form.
    pub const fn is_damaging(&self) -> bool {
        matches!(self, Self::Aoe | Self::Dot | Self::Damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn renders_upper_case() {
        assert_eq!(EffectKind::Buff.to_string(), "BUFF");
        assert_eq!(EffectKind::Aoe.as_ref(), "AOE");
        assert_eq!(EffectKind::Dot.to_string(), "DOT");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(EffectKind::from_str("debuff"), Ok(EffectKind::Debuff));
        assert_eq!(EffectKind::from_str("DAMAGE"), Ok(EffectKind::Damage));
        assert!(EffectKind::from_str("heal").is_err());
    }

    #[test]
    fn only_buffs_are_beneficial() {
        let beneficial: Vec<_> = EffectKind::iter().filter(|k| k.is_beneficial()).collect();
        assert_eq!(beneficial, vec![EffectKind::Buff]);
        assert!(!EffectKind::Debuff.is_damaging());
        assert!(EffectKind::Aoe.is_damaging());
    }
}
