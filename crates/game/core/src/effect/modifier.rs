//! Stat modifier effects: damage and movement-speed buffs and debuffs.

/// Raise the recipient's outgoing damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffDamage {
    amount: i32,
}

impl BuffDamage {
    pub const fn new(amount: i32) -> Self {
        Self { amount }
    }

    /// Damage boost granted.
    pub const fn amount(&self) -> i32 {
        self.amount
    }
}

/// Raise the recipient's movement speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffMoveSpeed {
    amount: i32,
}

impl BuffMoveSpeed {
    pub const fn new(amount: i32) -> Self {
        Self { amount }
    }

    /// Speed boost granted.
    pub const fn amount(&self) -> i32 {
        self.amount
    }
}

/// Lower the recipient's outgoing damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebuffDamage {
    amount: i32,
}

impl DebuffDamage {
    pub const fn new(amount: i32) -> Self {
        Self { amount }
    }

    /// Damage reduction inflicted.
    pub const fn amount(&self) -> i32 {
        self.amount
    }
}

/// Lower the recipient's movement speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebuffMoveSpeed {
    amount: i32,
}

impl DebuffMoveSpeed {
    pub const fn new(amount: i32) -> Self {
        Self { amount }
    }

    /// Speed reduction inflicted.
    pub const fn amount(&self) -> i32 {
        self.amount
    }
}
