use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tank_arena::game::input::InputState;
use tank_arena::{Game, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "tank-arena", about = "Three tanks, one keyboard")]
struct Args {
    /// RNG seed for walls and camouflage. Defaults to the system clock.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON game config; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run this many ticks with no keys held and print the final snapshot.
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if args.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(system_seed);
    info!(seed, "starting arena");
    let mut game = Game::with_config(config, seed).context("invalid game config")?;

    if let Some(ticks) = args.headless {
        let idle = InputState::new();
        for _ in 0..ticks {
            game.step(&idle);
        }
        let snapshot = game.snapshot_json().context("serializing snapshot")?;
        println!("{snapshot}");
        return Ok(());
    }

    run_window(game)
}

#[cfg(feature = "frontend")]
fn run_window(game: Game) -> Result<()> {
    tank_arena::frontend::run(game);
    Ok(())
}

#[cfg(not(feature = "frontend"))]
fn run_window(_game: Game) -> Result<()> {
    anyhow::bail!("built without the `frontend` feature; use --headless <TICKS> or --dump-config")
}

fn system_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
