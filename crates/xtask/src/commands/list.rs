//! List the content catalog.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use combat_core::{AbilityDefinition, WeaponSpec};
use console::style;
use serde::Serialize;

use crate::config::ToolConfig;

/// List abilities and weapons known to the catalog
#[derive(Parser)]
pub struct List {
    /// Content directory holding config.toml, abilities.ron and weapons.ron
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable table
    Summary,
    /// Pretty-printed JSON
    Json,
}

#[derive(Serialize)]
struct CatalogDump<'a> {
    ticks_per_second: u32,
    abilities: Vec<&'a AbilityDefinition>,
    weapons: Vec<&'a WeaponSpec>,
}

impl List {
    pub fn execute(self) -> Result<()> {
        let config = ToolConfig::resolve(self.data_dir)?;
        let catalog = config.catalog()?;

        match self.format {
            OutputFormat::Json => {
                let dump = CatalogDump {
                    ticks_per_second: config.combat.ticks_per_second,
                    abilities: catalog.abilities().map(|a| &**a).collect(),
                    weapons: catalog.weapons().map(|w| &**w).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&dump)?);
            }
            OutputFormat::Summary => {
                let source = config
                    .data_dir
                    .as_ref()
                    .map_or_else(|| "embedded".to_owned(), |dir| dir.display().to_string());
                println!("{} {}", style("Content:").bold(), style(source).dim());
                println!(
                    "{} {}",
                    style("Ticks per second:").bold(),
                    config.combat.ticks_per_second
                );

                println!("\n{}", style("Abilities").bold().cyan());
                for ability in catalog.abilities() {
                    println!(
                        "  {:<14} cd {:>3}  {}",
                        style(ability.name()).green(),
                        ability.cooldown(),
                        ability.effect()
                    );
                }

                println!("\n{}", style("Weapons").bold().cyan());
                for weapon in catalog.weapons() {
                    println!(
                        "  {:<14} dmg {:>3}  range {:>4}  every {:.2}s  mag {:>2}  reload {:.2}s",
                        style(&weapon.name).green(),
                        weapon.damage,
                        weapon.range,
                        weapon.attack_interval,
                        weapon.max_munitions,
                        weapon.reload_time
                    );
                }
            }
        }

        Ok(())
    }
}
