//! Goalball CLI - train-side evaluation and replay for the goalball arena.

mod commands;
mod config;
mod interrupt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::evaluate::EvaluateArgs;

#[derive(Parser)]
#[command(name = "goalball")]
#[command(author, version, about = "Goalball - goal/hazard arena for evolved policies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new goalball project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Evaluate a population and save the best policy
    Evaluate {
        /// Population file (default: run.population_path)
        #[arg(short, long)]
        population: Option<PathBuf>,

        /// Number of generations to run
        #[arg(short, long, default_value = "1")]
        generations: u64,

        /// Seed for boundary jitter
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write sampled frames to this JSON file
        #[arg(short, long)]
        frames: Option<PathBuf>,

        /// Where to save the best policy (default: run.best_policy_path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Store the last fitness of each candidate back in the population file
        #[arg(long)]
        write_back: bool,
    },

    /// Replay a saved policy
    Demo {
        /// Saved policy (default: run.best_policy_path)
        policy: Option<PathBuf>,

        /// Write every replayed frame to this JSON file
        #[arg(short, long)]
        frames: Option<PathBuf>,

        /// Seed for boundary jitter
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Evaluate {
            population,
            generations,
            seed,
            frames,
            output,
            write_back,
        } => commands::evaluate::run(EvaluateArgs {
            population,
            generations,
            seed,
            frames,
            output,
            write_back,
            verbose: cli.verbose,
        }),
        Commands::Demo {
            policy,
            frames,
            seed,
        } => commands::demo::run(policy, frames, seed),
    }
}
