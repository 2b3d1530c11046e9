//! Validated, name-indexed content registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use combat_core::{Ability, AbilityDefinition, ContentError, Weapon, WeaponSpec};
use strum::IntoEnumIterator;

use crate::abilities::AbilityArchetype;
use crate::loaders::{AbilityLoader, LoadResult, WeaponLoader};
use crate::weapons::WeaponArchetype;

/// Registry of ability definitions and weapon specs.
///
/// Every entry has passed load-time validation, so instances built from the
/// catalog never carry negative effect parameters, empty magazines or broken
/// timings. Definitions are shared: every instance of "Steroids" points at the
/// same `Arc<AbilityDefinition>`.
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    abilities: BTreeMap<String, Arc<AbilityDefinition>>,
    weapons: BTreeMap<String, Arc<WeaponSpec>>,
}

impl ContentCatalog {
    /// Builds a catalog from raw definitions, rejecting invalid or duplicate entries.
    pub fn from_definitions(
        abilities: impl IntoIterator<Item = AbilityDefinition>,
        weapons: impl IntoIterator<Item = WeaponSpec>,
    ) -> Result<Self, ContentError> {
        let mut catalog = Self::default();
        for definition in abilities {
            catalog.insert_ability(definition)?;
        }
        for spec in weapons {
            catalog.insert_weapon(spec)?;
        }
        tracing::debug!(
            abilities = catalog.abilities.len(),
            weapons = catalog.weapons.len(),
            "content catalog built"
        );
        Ok(catalog)
    }

    /// Catalog of the compiled-in archetypes.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_definitions(
            AbilityArchetype::iter().map(|a| a.definition()),
            WeaponArchetype::iter().map(|w| w.spec()),
        )
    }

    /// Catalog of the data files embedded in the crate.
    pub fn embedded() -> LoadResult<Self> {
        let abilities = AbilityLoader::embedded()?;
        let weapons = WeaponLoader::embedded()?;
        Ok(Self::from_definitions(abilities, weapons)?)
    }

    /// Validates and registers one ability definition.
    pub fn insert_ability(&mut self, definition: AbilityDefinition) -> Result<(), ContentError> {
        definition.validate()?;
        if self.abilities.contains_key(definition.name()) {
            return Err(ContentError::DuplicateName(definition.name().to_owned()));
        }
        self.abilities
            .insert(definition.name().to_owned(), Arc::new(definition));
        Ok(())
    }

    /// Validates and registers one weapon spec.
    pub fn insert_weapon(&mut self, spec: WeaponSpec) -> Result<(), ContentError> {
        spec.validate()?;
        if self.weapons.contains_key(&spec.name) {
            return Err(ContentError::DuplicateName(spec.name));
        }
        self.weapons.insert(spec.name.clone(), Arc::new(spec));
        Ok(())
    }

    pub fn ability_definition(&self, name: &str) -> Option<&Arc<AbilityDefinition>> {
        self.abilities.get(name)
    }

    pub fn weapon_spec(&self, name: &str) -> Option<&Arc<WeaponSpec>> {
        self.weapons.get(name)
    }

    /// Creates a ready ability instance by name.
    pub fn ability(&self, name: &str) -> Result<Ability, ContentError> {
        self.ability_definition(name)
            .map(|definition| Ability::new(Arc::clone(definition)))
            .ok_or_else(|| ContentError::UnknownAbility(name.to_owned()))
    }

    /// Creates a fully loaded weapon by name.
    pub fn weapon(&self, name: &str) -> Result<Weapon, ContentError> {
        self.weapon_spec(name)
            .map(|spec| Weapon::new(Arc::clone(spec)))
            .ok_or_else(|| ContentError::UnknownWeapon(name.to_owned()))
    }

    /// Ability definitions ordered by name.
    pub fn abilities(&self) -> impl Iterator<Item = &Arc<AbilityDefinition>> {
        self.abilities.values()
    }

    /// Weapon specs ordered by name.
    pub fn weapons(&self) -> impl Iterator<Item = &Arc<WeaponSpec>> {
        self.weapons.values()
    }
}
