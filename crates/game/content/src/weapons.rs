//! Built-in weapon archetypes.
//!
//! The archetypes differ only in data; all share the same state machine.

use std::sync::Arc;

use combat_core::{SoundClip, Weapon, WeaponSpec};

/// Weapons shipped with the game.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponArchetype {
    Pistol,
    Smg,
    Shotgun,
    AssaultRifle,
    SniperRifle,
}

impl WeaponArchetype {
    /// Returns the configuration for this archetype.
    pub fn spec(&self) -> WeaponSpec {
        let (name, damage, range, attack_interval, max_munitions, reload_time) = match self {
            Self::Pistol => ("Pistol", 15, 150, 1.0, 12, 1.5),
            Self::Smg => ("SMG", 20, 200, 0.5, 35, 1.2),
            Self::Shotgun => ("Shotgun", 70, 100, 1.5, 6, 1.6),
            Self::AssaultRifle => ("Assault Rifle", 30, 200, 0.7, 30, 2.0),
            Self::SniperRifle => ("Sniper Rifle", 150, 450, 3.0, 5, 2.5),
        };
        WeaponSpec {
            name: name.to_owned(),
            damage,
            range,
            attack_interval,
            max_munitions,
            reload_time,
            reload_clip: SoundClip::RELOAD,
        }
    }

    /// Creates a fully loaded weapon with its own spec and no sound attached.
    pub fn build(&self) -> Weapon {
        Weapon::new(Arc::new(self.spec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::AudioSettings;
    use strum::IntoEnumIterator;

    #[test]
    fn assault_rifle_scenario() {
        let mut rifle = WeaponArchetype::AssaultRifle.build();
        assert_eq!(rifle.damage(), 30);
        assert_eq!(rifle.range(), 200);
        assert_eq!(rifle.attack_speed(), 0.7);
        assert_eq!(rifle.max_munitions(), 30);

        rifle.attack();
        rifle.attack();
        assert_eq!(rifle.munitions(), 28);

        rifle.reload(&AudioSettings::MUTED);
        assert_eq!(rifle.munitions(), 30);
    }

    #[test]
    fn shotgun_runs_dry_at_six() {
        let mut shotgun = WeaponArchetype::Shotgun.build();
        for _ in 0..6 {
            shotgun.attack();
        }
        assert_eq!(shotgun.munitions(), 0);
        shotgun.attack();
        assert_eq!(shotgun.munitions(), 0);
    }

    #[test]
    fn archetype_table() {
        let table: Vec<_> = WeaponArchetype::iter()
            .map(|a| {
                let s = a.spec();
                (s.damage, s.range, s.attack_interval, s.max_munitions, s.reload_time)
            })
            .collect();
        assert_eq!(
            table,
            vec![
                (15, 150, 1.0, 12, 1.5),
                (20, 200, 0.5, 35, 1.2),
                (70, 100, 1.5, 6, 1.6),
                (30, 200, 0.7, 30, 2.0),
                (150, 450, 3.0, 5, 2.5),
            ]
        );
    }

    #[test]
    fn every_archetype_starts_full_and_validates() {
        for archetype in WeaponArchetype::iter() {
            archetype.spec().validate().unwrap();
            let weapon = archetype.build();
            assert_eq!(weapon.munitions(), weapon.max_munitions(), "{archetype}");
        }
    }
}
