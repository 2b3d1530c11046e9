//! Data files against compiled-in archetypes, and directory loading.

use std::fs;

use combat_content::{
    AbilityArchetype, AbilityLoader, ContentCatalog, ContentFactory, WeaponArchetype,
    WeaponLoader,
};
use combat_core::{AudioSettings, CombatConfig};
use strum::IntoEnumIterator;

#[test]
fn embedded_abilities_match_builtins() {
    let loaded = AbilityLoader::embedded().expect("embedded abilities parse");
    let builtin: Vec<_> = AbilityArchetype::iter().map(|a| a.definition()).collect();
    assert_eq!(loaded, builtin);
}

#[test]
fn embedded_weapons_match_builtins() {
    let loaded = WeaponLoader::embedded().expect("embedded weapons parse");
    let builtin: Vec<_> = WeaponArchetype::iter().map(|w| w.spec()).collect();
    assert_eq!(loaded, builtin);
}

#[test]
fn embedded_catalog_validates() {
    let catalog = ContentCatalog::embedded().expect("embedded catalog");
    let names: Vec<_> = catalog.weapons().map(|w| w.name.clone()).collect();
    assert_eq!(
        names,
        vec!["Assault Rifle", "Pistol", "SMG", "Shotgun", "Sniper Rifle"]
    );
}

#[test]
fn factory_loads_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "ticks_per_second = 20\n[audio]\nsound_enabled = false\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("abilities.ron"),
        r#"(abilities: [(name: "Steroids", description: "", cooldown: 30, effect: BuffMoveSpeed(amount: 30))])"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("weapons.ron"),
        r#"(weapons: [(name: "Shotgun", damage: 70, range: 100, attack_interval: 1.5, max_munitions: 6, reload_time: 1.6)])"#,
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().unwrap();
    assert_eq!(config.ticks_per_second, 20);
    assert_eq!(config.audio, AudioSettings::MUTED);

    let catalog = factory.load_catalog().unwrap();
    let mut shotgun = catalog.weapon("Shotgun").unwrap();
    for _ in 0..7 {
        shotgun.attack();
    }
    assert_eq!(shotgun.munitions(), 0);

    let mut steroids = catalog.ability("Steroids").unwrap();
    steroids.activate();
    steroids.update_cooldown();
    assert_eq!(steroids.current_cooldown(), 29);
}

#[test]
fn factory_rejects_invalid_content() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("abilities.ron"),
        r#"(abilities: [(name: "Leech", description: "", cooldown: 5, effect: Heal(amount: -5))])"#,
    )
    .unwrap();
    fs::write(dir.path().join("weapons.ron"), "(weapons: [])").unwrap();

    let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Invalid content"), "{message}");
    assert!(message.contains("Leech"), "{message}");
}

#[test]
fn missing_files_report_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentFactory::new(dir.path()).load_config().unwrap_err();
    assert!(err.to_string().contains("config.toml"));

    let defaults = CombatConfig::default();
    assert!(defaults.audio.sound_enabled);
}
