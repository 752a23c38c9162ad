//! Replay a saved policy.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use goalball::prelude::*;
use std::path::PathBuf;

use crate::config::Config;
use crate::interrupt;

pub fn run(policy: Option<PathBuf>, frames: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let config = Config::load()?;
    let path = policy.unwrap_or_else(|| config.run.best_policy_path.clone());

    if !path.exists() {
        bail!(
            "No saved policy at {}. Run {} first.",
            path.display(),
            "goalball evaluate".cyan()
        );
    }

    println!("{} Loading policy...", "→".blue());
    let saved = load_policy(&path)
        .with_context(|| format!("Failed to load policy from {}", path.display()))?;
    let meta = &saved.metadata;
    println!(
        "  {} policy from generation {}{}",
        saved.policy.kind().to_string().cyan(),
        meta.generation.to_string().cyan(),
        meta.fitness
            .map(|f| format!(" (fitness {:.3})", f))
            .unwrap_or_default()
    );

    let mut episode = config.episode.clone();
    if seed.is_some() {
        episode.seed = seed;
    }
    let max_steps = episode.max_steps;

    let mut replay = Replay::new(episode)?;
    let mut policy = saved.policy.instantiate()?;
    let quit = interrupt::install()?;
    let mut recorder = FrameRecorder::new();
    let demo = {
        let mut hooks = EpisodeHooks::none()
            .with_generation(meta.generation)
            .with_renderer(&mut recorder, 1)
            .with_quit(quit);
        replay.run_with(&mut policy, &mut hooks)?
    };

    println!();
    let outcome = match demo.outcome {
        Outcome::GoalReached => demo.outcome.to_string().green().bold(),
        Outcome::HazardHit => demo.outcome.to_string().red().bold(),
        Outcome::Timeout | Outcome::Interrupted => demo.outcome.to_string().yellow().bold(),
    };
    println!("  Outcome: {}", outcome);
    println!(
        "  Ticks:   {} / {}",
        demo.terminal_step.to_string().cyan(),
        max_steps
    );
    println!(
        "  Final:   ({:.1}, {:.1})",
        demo.final_position.x, demo.final_position.y
    );

    if let Some(path) = &frames {
        recorder
            .write_json(path)
            .with_context(|| format!("Failed to write frames to {}", path.display()))?;
        println!(
            "  {} Wrote {} frames to {}",
            "✓".green(),
            recorder.len(),
            path.display()
        );
    }

    Ok(())
}
