//! Restorative and economy effects.

/// Restore health to the recipient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heal {
    amount: i32,
}

impl Heal {
    pub const fn new(amount: i32) -> Self {
        Self { amount }
    }

    pub const fn amount(&self) -> i32 {
        self.amount
    }
}

/// Multiply gold earned by the recipient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldMultiplier {
    multiplier: i32,
}

impl GoldMultiplier {
    pub const fn new(multiplier: i32) -> Self {
        Self { multiplier }
    }

    pub const fn multiplier(&self) -> i32 {
        self.multiplier
    }
}
