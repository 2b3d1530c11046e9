//! Built-in ability definitions.
//!
//! Each archetype is a fixed configuration record: name, description,
//! cooldown in ticks and the effect it fires.

use std::sync::Arc;

use combat_core::{
    Ability, AbilityDefinition, BuffDamage, BuffMoveSpeed, DebuffDamage, DebuffMoveSpeed,
    DoDamage, DoDamageAoe, GoldMultiplier, Heal, Poison,
};

/// Abilities shipped with the game.
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
pub enum AbilityArchetype {
    /// "Steroids": move-speed buff.
    DopingProducts,
    /// "Adrenaline": outgoing damage buff.
    CombatStims,
    /// "First Aid": instant heal.
    FirstAidKit,
    /// "Headshot": long-range single-target hit.
    Headshot,
    /// "Grenade": area damage.
    FragGrenade,
    /// "Toxic Cloud": damage over time.
    ToxicCloud,
    /// "War Cry": weakens the target's damage.
    WarCry,
    /// "Caltrops": slows the target.
    Caltrops,
    /// "Bounty": extra gold.
    Bounty,
}

impl AbilityArchetype {
    /// Returns the immutable definition for this archetype.
    pub fn definition(&self) -> AbilityDefinition {
        match self {
            Self::DopingProducts => AbilityDefinition::new(
                "Steroids",
                "Doping products. Boosts movement speed.",
                30,
                BuffMoveSpeed::new(30),
            ),
            Self::CombatStims => AbilityDefinition::new(
                "Adrenaline",
                "A shot of adrenaline. Boosts outgoing damage.",
                40,
                BuffDamage::new(15),
            ),
            Self::FirstAidKit => AbilityDefinition::new(
                "First Aid",
                "Patch up wounds on the spot.",
                25,
                Heal::new(40),
            ),
            Self::Headshot => AbilityDefinition::new(
                "Headshot",
                "A carefully aimed shot at a distant target.",
                50,
                DoDamage::new(120, 400),
            ),
            Self::FragGrenade => AbilityDefinition::new(
                "Grenade",
                "Throws a fragmentation grenade.",
                35,
                DoDamageAoe::new(30, 50),
            ),
            Self::ToxicCloud => AbilityDefinition::new(
                "Toxic Cloud",
                "Releases a cloud of poison gas.",
                45,
                Poison::new(5),
            ),
            Self::WarCry => AbilityDefinition::new(
                "War Cry",
                "Intimidates enemies, lowering their damage.",
                30,
                DebuffDamage::new(10),
            ),
            Self::Caltrops => AbilityDefinition::new(
                "Caltrops",
                "Scatters spikes that slow pursuers.",
                20,
                DebuffMoveSpeed::new(20),
            ),
            Self::Bounty => AbilityDefinition::new(
                "Bounty",
                "Marks targets for extra gold on kill.",
                60,
                GoldMultiplier::new(2),
            ),
        }
    }

    /// Creates a ready instance with its own definition.
    pub fn build(&self) -> Ability {
        Ability::new(Arc::new(self.definition()))
    }
}
