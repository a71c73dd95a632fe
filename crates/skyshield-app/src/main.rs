use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use skyshield_app::assets::AudioAssets;
use skyshield_app::error::AppError;
use skyshield_app::game_loop::{self, LoopOptions};
use skyshield_app::logging::init_tracing;
use skyshield_app::{config, scenario_loop};
use skyshield_core::config::{BatteryConfig, ScenarioConfig};
use skyshield_sim::{ScenarioEngine, SimulationEngine};

/// A toy air-defense simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Interactive radar battery; reads JSON commands from stdin
    Battery {
        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the config seed
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,
        /// Directory holding the audio cue files
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Run as fast as possible
        #[arg(long)]
        no_throttle: bool,
    },
    /// Scripted single-projectile scenario
    Scenario {
        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the config seed
        #[arg(long)]
        seed: Option<u64>,
        /// Run as fast as possible
        #[arg(long)]
        no_throttle: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "fatal");
            ExitCode::FAILURE
        }
    }
}

fn run(mode: Mode) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode {
        Mode::Battery {
            config,
            seed,
            ticks,
            assets,
            no_throttle,
        } => {
            let mut battery: BatteryConfig = config::load(config.as_deref())?;
            if let Some(seed) = seed {
                battery.seed = seed;
            }
            let assets = assets.as_deref().map(AudioAssets::verify).transpose()?;
            let mut engine = SimulationEngine::new(battery)?;

            let cmd_rx = game_loop::spawn_command_reader(BufReader::new(io::stdin()))?;
            let options = LoopOptions {
                max_ticks: ticks,
                no_throttle,
            };
            game_loop::run_battery(&mut engine, &cmd_rx, &mut out, options, assets.as_ref())?;
        }
        Mode::Scenario {
            config,
            seed,
            no_throttle,
        } => {
            let mut scenario: ScenarioConfig = config::load(config.as_deref())?;
            if let Some(seed) = seed {
                scenario.seed = seed;
            }
            let mut engine = ScenarioEngine::new(scenario)?;
            scenario_loop::run_scenario(&mut engine, &mut out, no_throttle)?;
        }
    }
    Ok(())
}
