//! sm-bot — the seamaster bot client process.
//!
//! Reads one world snapshot per line on stdin, runs the engine, and writes
//! one `{"spawn": ..., "actions": ...}` line per snapshot on stdout.  Logs go
//! to stderr so stdout carries nothing but protocol.
//!
//! Usage:
//!   sm-bot --guide hops.json --distances dist.json --spawn-script spawn.toml
//!   RUST_LOG=sm_engine=debug sm-bot --guide hops.json --spawn-script spawn.toml

mod driver;

#[cfg(test)]
mod tests;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sm_archetypes::register_builtins;
use sm_engine::{EngineBuilder, EngineConfig, ScriptLoader, StrategyRegistry};
use sm_spatial::load_guide;

use driver::ErrorTally;

const DEFAULT_FILTER: &str = "sm=info";

#[derive(Parser)]
#[command(name = "sm-bot")]
#[command(about = "Seamaster bot client: snapshots on stdin, actions on stdout")]
struct Args {
    /// Path-guide hops file (JSON).
    #[arg(long)]
    guide: PathBuf,

    /// Optional path-distance file (JSON) matching the guide.
    #[arg(long)]
    distances: Option<PathBuf>,

    /// TOML spawn script.
    #[arg(long)]
    spawn_script: PathBuf,

    /// Global seed for per-bot RNGs.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Spawn every planned bot even when scrap or the bot cap say no.
    #[arg(long)]
    no_affordability_check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let guide = load_guide(&args.guide, args.distances.as_deref())
        .with_context(|| format!("loading path guide {}", args.guide.display()))?;

    let mut registry = StrategyRegistry::new();
    register_builtins(&mut registry);

    let config = EngineConfig {
        seed:                args.seed,
        check_affordability: !args.no_affordability_check,
        ..EngineConfig::default()
    };
    let mut engine = EngineBuilder::new(guide)
        .config(config)
        .registry(registry)
        .spawn_loader(ScriptLoader::new(args.spawn_script.clone()))
        .build()?;

    let mut tally = ErrorTally::default();
    let ticks = driver::run(&mut engine, io::stdin().lock(), io::stdout().lock(), &mut tally)?;

    info!(ticks, skipped = tally.skipped_lines, bot_errors = tally.bot_errors, "input closed");
    Ok(())
}
