//! battle_calc - Command-line battle calculator

mod commands;
mod scenario;
mod simulation;

use anyhow::Result;
use battle_core::config::load_constants;
use battle_core::{BattleCalculator, WeaponClass};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "battle_calc", version, about = "Damage, critical and dodge calculator")]
struct Cli {
    /// TOML file overriding the combat constants
    #[arg(long, global = true)]
    constants: Option<PathBuf>,

    /// Mount catalog (TOML or JSON) for mounts given by id
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a scenario file into a damage report
    Resolve {
        scenario: PathBuf,
        /// Weapon class; both are reported when omitted
        #[arg(long, value_enum)]
        weapon: Option<Weapon>,
    },
    /// Estimate an opponent's defense from an observed hit
    Infer {
        /// Your (blended) attack
        #[arg(long)]
        attack: u32,
        /// Damage you observed
        #[arg(long)]
        damage: u32,
        #[arg(long, default_value_t = 0)]
        earth: u8,
        #[arg(long, default_value_t = 0)]
        water: u8,
        #[arg(long, default_value_t = 0)]
        fire: u8,
        #[arg(long, default_value_t = 0)]
        wind: u8,
        /// Opponent mount defense
        #[arg(long, conflicts_with = "mount")]
        mount_defense: Option<u32>,
        /// Opponent mount id from the catalog
        #[arg(long, requires = "mount_level")]
        mount: Option<String>,
        #[arg(long)]
        mount_level: Option<u32>,
    },
    /// Roll many hits of a scenario and report frequencies
    Simulate {
        scenario: PathBuf,
        #[arg(long, value_enum, default_value_t = Weapon::Melee)]
        weapon: Weapon,
        #[arg(long, default_value_t = 1000)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Weapon {
    Melee,
    Ranged,
}

impl From<Weapon> for WeaponClass {
    fn from(weapon: Weapon) -> Self {
        match weapon {
            Weapon::Melee => WeaponClass::Melee,
            Weapon::Ranged => WeaponClass::Ranged,
        }
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let calculator = match &cli.constants {
        Some(path) => {
            let constants = load_constants(path)?;
            tracing::info!("Loaded constants from {}", path.display());
            BattleCalculator::with_constants(constants)?
        }
        None => BattleCalculator::new(),
    };

    let options = commands::Options {
        catalog: cli.catalog,
        json: cli.json,
    };

    match cli.command {
        Command::Resolve { scenario, weapon } => {
            commands::resolve(&calculator, &options, &scenario, weapon.map(Into::into))
        }
        Command::Infer {
            attack,
            damage,
            earth,
            water,
            fire,
            wind,
            mount_defense,
            mount,
            mount_level,
        } => {
            let request = commands::InferRequest {
                attack,
                damage,
                elements: [earth, water, fire, wind],
                mount_defense,
                mount,
                mount_level,
            };
            commands::infer(&calculator, &options, request)
        }
        Command::Simulate {
            scenario,
            weapon,
            rounds,
            seed,
        } => commands::simulate(&calculator, &options, &scenario, weapon.into(), rounds, seed),
    }
}
