//! Ability definition loader.

use std::path::Path;

use combat_core::AbilityDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file, ron_options};

/// Ability list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityList {
    pub abilities: Vec<AbilityDefinition>,
}

/// Loader for ability definitions from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load ability definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<AbilityDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Parse ability definitions from RON source.
    pub fn parse(source: &str) -> LoadResult<Vec<AbilityDefinition>> {
        let list: AbilityList = ron_options()
            .from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability RON: {}", e))?;

        Ok(list.abilities)
    }

    /// Ability definitions embedded in the crate.
    pub fn embedded() -> LoadResult<Vec<AbilityDefinition>> {
        Self::parse(include_str!("../../data/abilities.ron"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AbilityArchetype;
    use combat_core::{Ability, DoDamageAoe, Effect};
    use strum::IntoEnumIterator;

    #[test]
    fn parses_unwrapped_effect_variants() {
        let source = r#"(
            abilities: [
                (
                    name: "Grenade",
                    description: "Boom.",
                    cooldown: 35,
                    effect: DoDamageAOE(damage: 30, aoe: 50),
                ),
            ],
        )"#;
        let abilities = AbilityLoader::parse(source).unwrap();
        assert_eq!(abilities.len(), 1);
        assert_eq!(abilities[0].name(), "Grenade");
        assert_eq!(abilities[0].cooldown(), 35);
        assert_eq!(
            abilities[0].effect(),
            &Effect::DoDamageAoe(DoDamageAoe::new(30, 50))
        );
        assert_eq!(abilities[0].effect().name(), "DoDamageAOE");
    }

    #[test]
    fn serialized_effect_tags_match_display_names() {
        for archetype in AbilityArchetype::iter() {
            let definition = archetype.definition();
            let effect = definition.effect();
            let encoded = ron::to_string(effect).unwrap();
            assert!(
                encoded.starts_with(&format!("{}(", effect.name())),
                "{archetype}: {encoded}"
            );
        }
    }

    #[test]
    fn saved_ability_timer_is_capped_at_cooldown() {
        let saved = |remaining: u32| {
            format!(
                r#"(
                    definition: (name: "Steroids", description: "", cooldown: 5, effect: BuffMoveSpeed(amount: 30)),
                    timer: (remaining: {remaining}),
                )"#
            )
        };

        let oversized: Ability = ron_options().from_str(&saved(99)).unwrap();
        assert_eq!(oversized.cooldown(), 5);
        assert_eq!(oversized.current_cooldown(), 5);

        let in_range: Ability = ron_options().from_str(&saved(3)).unwrap();
        assert_eq!(in_range.current_cooldown(), 3);

        let ready: Ability = ron_options().from_str(&saved(0)).unwrap();
        assert!(ready.is_ready());
    }

    #[test]
    fn negative_cooldown_is_a_parse_error() {
        let source = r#"(abilities: [(name: "X", description: "", cooldown: -1, effect: Heal(amount: 1))])"#;
        assert!(AbilityLoader::parse(source).is_err());
    }

    #[test]
    fn unknown_effect_is_a_parse_error() {
        let source = r#"(abilities: [(name: "X", description: "", cooldown: 1, effect: Teleport(distance: 1))])"#;
        let err = AbilityLoader::parse(source).unwrap_err();
        assert!(err.to_string().contains("Failed to parse ability RON"));
    }

    #[test]
    fn embedded_data_parses() {
        assert!(!AbilityLoader::embedded().unwrap().is_empty());
    }
}
