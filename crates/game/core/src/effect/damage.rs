//! Damage-dealing effects.

/// Deal damage to a single target within range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoDamage {
    damage: i32,
    range: i32,
}

impl DoDamage {
    pub const fn new(damage: i32, range: i32) -> Self {
        Self { damage, range }
    }

    pub const fn damage(&self) -> i32 {
        self.damage
    }

    /// Maximum distance to the target, in world units.
    pub const fn range(&self) -> i32 {
        self.range
    }
}

/// Deal damage to everything inside a radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoDamageAoe {
    damage: i32,
    aoe: i32,
}

impl DoDamageAoe {
    pub const fn new(damage: i32, aoe: i32) -> Self {
        Self { damage, aoe }
    }

    pub const fn damage(&self) -> i32 {
        self.damage
    }

    /// Radius of the affected area, in world units.
    pub const fn aoe(&self) -> i32 {
        self.aoe
    }
}

/// Deal recurring damage every second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Poison {
    damage_per_second: i32,
}

impl Poison {
    pub const fn new(damage_per_second: i32) -> Self {
        Self { damage_per_second }
    }

    pub const fn damage_per_second(&self) -> i32 {
        self.damage_per_second
    }
}
