//! Tick-driven combat drill.
//!
//! Equips one weapon and a handful of abilities, then steps the loadout at the
//! configured tick rate: the weapon fires on its attack interval, reloads once
//! the magazine runs dry, and every ability is activated as soon as it is ready.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use combat_core::{AttackOutcome, CombatConfig, Effect, Loadout, SoundService};
use console::style;

use crate::config::ToolConfig;
use crate::sound::LogSound;

/// Run a loadout for a fixed amount of simulated time
#[derive(Parser)]
pub struct Drill {
    /// Weapon to equip (catalog name)
    #[arg(short, long, default_value = "Assault Rifle")]
    weapon: String,

    /// Ability to slot (catalog name, repeatable)
    #[arg(short, long = "ability", value_name = "NAME")]
    abilities: Vec<String>,

    /// Simulated duration in seconds
    #[arg(short, long, default_value_t = 10.0)]
    seconds: f32,

    /// Disable the reload sound regardless of configuration
    #[arg(long)]
    mute: bool,

    /// Content directory holding config.toml, abilities.ron and weapons.ron
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Debug, Default)]
struct DrillReport {
    ticks: u32,
    shots: u32,
    dry_fires: u32,
    damage: u64,
    reloads: u32,
    activations: u32,
}

impl Drill {
    pub fn execute(self) -> Result<()> {
        let mut config = ToolConfig::resolve(self.data_dir)?;
        if self.mute {
            config.combat.audio.sound_enabled = false;
        }
        let catalog = config.catalog()?;
        let combat = &config.combat;

        let sound = Arc::new(LogSound::default());
        let service: Arc<dyn SoundService> = sound.clone();
        let weapon = catalog
            .weapon(&self.weapon)
            .with_context(|| format!("Cannot equip '{}'", self.weapon))?
            .with_sound(service);

        let names = if self.abilities.is_empty() {
            vec!["Steroids".to_owned(), "Grenade".to_owned()]
        } else {
            self.abilities
        };
        let mut builder = Loadout::builder().weapon(weapon);
        for name in &names {
            let ability = catalog
                .ability(name)
                .with_context(|| format!("Cannot slot '{name}'"))?;
            builder = builder.ability(ability);
        }
        let mut loadout = builder.build()?;

        let total_ticks = combat.ticks_for(self.seconds);
        println!(
            "{} {} for {}s ({} ticks at {}/s)",
            style("Drill:").bold().cyan(),
            style(&self.weapon).green(),
            self.seconds,
            total_ticks,
            combat.ticks_per_second
        );

        let report = run_drill(&mut loadout, combat, total_ticks, |tick, effect| {
            println!(
                "  {} {:>5} {}",
                style("tick").dim(),
                tick,
                style(effect).yellow()
            );
        })?;

        println!("\n{}", style("Summary").bold().cyan());
        println!("  ticks        {}", report.ticks);
        println!("  shots        {}", report.shots);
        println!("  dry fires    {}", report.dry_fires);
        println!("  damage       {}", report.damage);
        println!("  reloads      {}", report.reloads);
        println!("  activations  {}", report.activations);
        println!("  sounds       {}", sound.played());

        for ability in loadout.abilities() {
            println!(
                "  {:<14} {:?}",
                style(ability.name()).green(),
                ability.status()
            );
        }

        Ok(())
    }
}

/// Steps `loadout` for `total_ticks` ticks.
///
/// The weapon fires every attack interval and starts reloading as soon as the
/// magazine is empty; every ready ability is activated and reported through
/// `on_activate`. Scheduled ticks saturate, so timings too long for the tick
/// range simply never elapse.
fn run_drill(
    loadout: &mut Loadout,
    combat: &CombatConfig,
    total_ticks: u32,
    mut on_activate: impl FnMut(u32, &Effect),
) -> Result<DrillReport> {
    let (attack_ticks, reload_ticks) = match loadout.weapon() {
        Some(weapon) => (
            combat.ticks_for(weapon.attack_speed()).max(1),
            combat.ticks_for(weapon.reload_timer()),
        ),
        None => anyhow::bail!("Loadout has no weapon"),
    };

    let mut report = DrillReport::default();
    let mut next_attack = 0u32;
    let mut reload_done: Option<u32> = None;

    for tick in 0..total_ticks {
        report.ticks += 1;

        if reload_done.is_some_and(|done| tick >= done) {
            if let Some(weapon) = loadout.weapon_mut() {
                weapon.reload(&combat.audio);
            }
            report.reloads += 1;
            reload_done = None;
            next_attack = tick;
        }

        if reload_done.is_none() && tick >= next_attack {
            let outcome = match loadout.weapon_mut() {
                Some(weapon) => weapon.attack(),
                None => AttackOutcome::Empty,
            };
            match outcome {
                AttackOutcome::Fired {
                    damage, remaining, ..
                } => {
                    report.shots += 1;
                    report.damage += u64::from(damage);
                    tracing::debug!(tick, damage, remaining, "fired");
                    next_attack = tick.saturating_add(attack_ticks);
                    if remaining == 0 {
                        reload_done = Some(tick.saturating_add(reload_ticks));
                    }
                }
                AttackOutcome::Empty => {
                    report.dry_fires += 1;
                    reload_done = Some(tick.saturating_add(reload_ticks));
                }
            }
        }

        let ready: Vec<usize> = loadout.ready_slots().collect();
        for slot in ready {
            let effect = loadout.activate(slot)?;
            report.activations += 1;
            on_activate(tick, effect);
        }

        loadout.tick();
    }

    Ok(report)
}
