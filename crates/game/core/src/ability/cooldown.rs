//! Tick-based cooldown counter.

/// Remaining cooldown of one live ability instance, in ticks.
///
/// The timer is the only mutable part of an ability. It does not know its own
/// duration; the owning [`Ability`](super::Ability) passes it in on
/// [`trigger`](Self::trigger), which keeps a single definition shareable
/// between many timers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooldownTimer {
    remaining: u32,
}

impl CooldownTimer {
    /// A timer that is ready immediately.
    pub const READY: Self = Self { remaining: 0 };

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    /// Restarts the timer at `duration`, discarding whatever was left.
    pub fn trigger(&mut self, duration: u32) {
        self.remaining = duration;
    }

    /// Advances one tick. Returns `true` if this tick finished the cooldown.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    /// Sets the remaining ticks directly, capped at `duration`.
    pub fn restore(&mut self, remaining: u32, duration: u32) {
        self.remaining = remaining.min(duration);
    }
}
