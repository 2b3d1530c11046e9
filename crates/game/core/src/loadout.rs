//! Per-unit combat state.
//!
//! A [`Loadout`] exclusively owns the live abilities and the equipped weapon
//! of one unit. Hosts that update units in parallel shard by loadout; nothing
//! mutable is shared between two loadouts.

use arrayvec::ArrayVec;

use crate::ability::Ability;
use crate::config::CombatConfig;
use crate::effect::Effect;
use crate::error::{ErrorSeverity, GameError};
use crate::weapon::Weapon;

/// Collection of ability slots.
pub type AbilitySlots = ArrayVec<Ability, { CombatConfig::MAX_ABILITIES }>;

/// Errors returned by the checked loadout helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadoutError {
    /// Every ability slot is taken.
    #[error("all {capacity} ability slots are in use")]
    AbilitySlotsFull { capacity: usize },

    /// No ability occupies the slot.
    #[error("no ability in slot {0}")]
    UnknownSlot(usize),

    /// The ability in the slot is still cooling down.
    #[error("`{name}` is on cooldown ({remaining} ticks left)")]
    OnCooldown { name: String, remaining: u32 },
}

impl GameError for LoadoutError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AbilitySlotsFull { .. } | Self::UnknownSlot(_) => ErrorSeverity::Validation,
            Self::OnCooldown { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AbilitySlotsFull { .. } => "LOADOUT_SLOTS_FULL",
            Self::UnknownSlot(_) => "LOADOUT_UNKNOWN_SLOT",
            Self::OnCooldown { .. } => "LOADOUT_ON_COOLDOWN",
        }
    }
}

/// Abilities and weapon carried by one unit.
#[derive(Clone, Debug, Default)]
pub struct Loadout {
    abilities: AbilitySlots,
    weapon: Option<Weapon>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a loadout.
    pub fn builder() -> LoadoutBuilder {
        LoadoutBuilder::default()
    }

    /// Appends an ability, returning its slot index.
    pub fn add_ability(&mut self, ability: Ability) -> Result<usize, LoadoutError> {
        self.abilities
            .try_push(ability)
            .map_err(|_| LoadoutError::AbilitySlotsFull {
                capacity: CombatConfig::MAX_ABILITIES,
            })?;
        Ok(self.abilities.len() - 1)
    }

    /// Equips a weapon, returning the previously equipped one if any.
    pub fn equip(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    /// Removes the equipped weapon.
    pub fn unequip(&mut self) -> Option<Weapon> {
        self.weapon.take()
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn weapon_mut(&mut self) -> Option<&mut Weapon> {
        self.weapon.as_mut()
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn ability(&self, slot: usize) -> Option<&Ability> {
        self.abilities.get(slot)
    }

    pub fn ability_mut(&mut self, slot: usize) -> Option<&mut Ability> {
        self.abilities.get_mut(slot)
    }

    /// Advances every ability's cooldown by exactly one tick.
    pub fn tick(&mut self) {
        for ability in &mut self.abilities {
            ability.update_cooldown();
        }
    }

    /// Activates the ability in `slot` only if it is ready.
    pub fn activate(&mut self, slot: usize) -> Result<&Effect, LoadoutError> {
        let ability = self
            .abilities
            .get_mut(slot)
            .ok_or(LoadoutError::UnknownSlot(slot))?;
        if !ability.is_ready() {
            return Err(LoadoutError::OnCooldown {
                name: ability.name().to_owned(),
                remaining: ability.current_cooldown(),
            });
        }
        Ok(ability.activate())
    }

    /// Slot indices of abilities that can be activated right now.
    pub fn ready_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.abilities
            .iter()
            .enumerate()
            .filter(|(_, ability)| ability.is_ready())
            .map(|(slot, _)| slot)
    }
}

/// Builder for constructing a loadout.
#[derive(Default)]
pub struct LoadoutBuilder {
    abilities: Vec<Ability>,
    weapon: Option<Weapon>,
}

impl LoadoutBuilder {
    pub fn ability(mut self, ability: impl Into<Ability>) -> Self {
        self.abilities.push(ability.into());
        self
    }

    pub fn weapon(mut self, weapon: impl Into<Weapon>) -> Self {
        self.weapon = Some(weapon.into());
        self
    }

    pub fn build(self) -> Result<Loadout, LoadoutError> {
        let mut loadout = Loadout::new();
        for ability in self.abilities {
            loadout.add_ability(ability)?;
        }
        loadout.weapon = self.weapon;
        Ok(loadout)
    }
}
