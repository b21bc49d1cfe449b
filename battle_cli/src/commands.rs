//! Subcommand handlers

use crate::scenario::Scenario;
use crate::simulation::HitSimulation;
use anyhow::{bail, Context, Result};
use battle_core::config::load_mount_catalog;
use battle_core::{BattleCalculator, ElementalComposition, MountCatalog, WeaponClass};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct Options {
    pub catalog: Option<PathBuf>,
    pub json: bool,
}

impl Options {
    fn load_catalog(&self) -> Result<Option<MountCatalog>> {
        let Some(path) = &self.catalog else {
            return Ok(None);
        };
        let catalog = load_mount_catalog(path)
            .with_context(|| format!("reading mount catalog {}", path.display()))?;
        tracing::info!(mounts = catalog.len(), "Loaded mount catalog");
        Ok(Some(catalog))
    }
}

/// Arguments of the `infer` subcommand
#[derive(Debug, Clone)]
pub struct InferRequest {
    pub attack: u32,
    pub damage: u32,
    /// Earth, water, fire, wind
    pub elements: [u8; 4],
    pub mount_defense: Option<u32>,
    pub mount: Option<String>,
    pub mount_level: Option<u32>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_scenario(options: &Options, path: &Path) -> Result<Scenario> {
    let catalog = options.load_catalog()?;
    Scenario::load(path, catalog.as_ref())
}

pub fn resolve(
    calculator: &BattleCalculator,
    options: &Options,
    path: &Path,
    weapon: Option<WeaponClass>,
) -> Result<()> {
    let scenario = load_scenario(options, path)?;
    let attacker_mount = scenario.attacker_mount.as_ref();
    let defender_mount = scenario.defender_mount.as_ref();

    let outcomes = match weapon {
        Some(weapon) => vec![calculator.resolve(
            &scenario.attacker,
            attacker_mount,
            &scenario.defender,
            defender_mount,
            weapon,
        )],
        None => calculator.resolve_all(
            &scenario.attacker,
            attacker_mount,
            &scenario.defender,
            defender_mount,
        ),
    };

    if options.json {
        return print_json(&outcomes);
    }

    for outcome in &outcomes {
        println!("{}", outcome.summary());
        if outcome.dodge_exceeds_cap() {
            println!(
                "  dodge {:.2}% is past the {:.0}% cap",
                outcome.dodge_rate, outcome.dodge_cap
            );
        }
        println!("  expected {:.1} per attack", outcome.expected_damage());
    }
    Ok(())
}

pub fn infer(calculator: &BattleCalculator, options: &Options, request: InferRequest) -> Result<()> {
    let [earth, water, fire, wind] = request.elements;
    let elemental = ElementalComposition::new(earth, water, fire, wind)
        .context("invalid elemental composition")?;

    let mount_defense = match (&request.mount, request.mount_defense) {
        (Some(id), _) => {
            let Some(catalog) = options.load_catalog()? else {
                bail!("--mount needs --catalog");
            };
            let level = request.mount_level.unwrap_or(1);
            catalog.mount_at_level(id, level)?.defense
        }
        (None, Some(defense)) => defense,
        (None, None) => 0,
    };

    tracing::debug!(mount_defense, %elemental, "inferring opponent defense");

    let scenarios = calculator.infer(request.attack, &elemental, request.damage, mount_defense);

    if options.json {
        return print_json(&scenarios);
    }

    if scenarios.is_empty() {
        println!("no matchup explains {} damage from {} attack", request.damage, request.attack);
        return Ok(());
    }
    for scenario in &scenarios {
        println!("{}", scenario.summary());
    }
    Ok(())
}

#[derive(Serialize)]
struct SimulationReport<'a> {
    seed: u64,
    expected_damage: f64,
    #[serde(flatten)]
    simulation: &'a HitSimulation,
}

pub fn simulate(
    calculator: &BattleCalculator,
    options: &Options,
    path: &Path,
    weapon: WeaponClass,
    rounds: u32,
    seed: Option<u64>,
) -> Result<()> {
    let scenario = load_scenario(options, path)?;
    let outcome = calculator.resolve(
        &scenario.attacker,
        scenario.attacker_mount.as_ref(),
        &scenario.defender,
        scenario.defender_mount.as_ref(),
        weapon,
    );

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let simulation = HitSimulation::run(&outcome, rounds, &mut rng);

    if options.json {
        return print_json(&SimulationReport {
            seed,
            expected_damage: outcome.expected_damage(),
            simulation: &simulation,
        });
    }

    println!("{}", outcome.summary());
    println!("{}", simulation.summary());
    println!(
        "expected {:.1} per attack (seed {seed})",
        outcome.expected_damage()
    );
    Ok(())
}
