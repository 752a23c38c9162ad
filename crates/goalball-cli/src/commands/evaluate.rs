//! Evaluate a population for one or more generations.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use goalball::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::interrupt;

pub struct EvaluateArgs {
    pub population: Option<PathBuf>,
    pub generations: u64,
    pub seed: Option<u64>,
    pub frames: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub write_back: bool,
    pub verbose: bool,
}

/// Read a population file: a JSON array of candidates.
pub fn load_population(path: &Path) -> Result<Vec<Candidate>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read population: {}", path.display()))?;
    let population: Vec<Candidate> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse population: {}", path.display()))?;
    for candidate in &population {
        candidate
            .policy
            .instantiate()
            .with_context(|| format!("{} has an unusable policy", candidate.id))?;
    }
    Ok(population)
}

pub fn run(args: EvaluateArgs) -> Result<()> {
    let config = Config::load()?;
    let mut episode = config.episode.clone();
    if args.seed.is_some() {
        episode.seed = args.seed;
    }

    let population_path = args
        .population
        .clone()
        .unwrap_or_else(|| config.run.population_path.clone());
    if !population_path.exists() {
        bail!(
            "No population at {}. Run {} first.",
            population_path.display(),
            "goalball init".cyan()
        );
    }
    let mut population = load_population(&population_path)?;
    if population.is_empty() {
        bail!("Population file {} is empty", population_path.display());
    }

    let budget = config.run.max_generations;
    let generations = args.generations.min(budget);
    if args.generations > budget {
        println!(
            "  {} Capping at {} generations (run.max_generations)",
            "•".yellow(),
            budget
        );
    }

    let mut driver = GenerationDriver::new(episode)?.with_max_generations(budget);
    let quit = interrupt::install()?;
    let render_interval = if args.frames.is_some() {
        config.run.render_interval
    } else {
        0
    };
    let mut recorder = FrameRecorder::new();

    println!(
        "{} Evaluating {} candidates for {} generation(s)...",
        "→".blue(),
        population.len().to_string().cyan(),
        generations.to_string().cyan()
    );

    let pb = ProgressBar::new(generations);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} generations")
            .context("Invalid progress template")?
            .progress_chars("#>-"),
    );

    let mut interrupted = false;
    for _ in 0..generations {
        let mut hooks = EpisodeHooks::none()
            .with_renderer(&mut recorder, render_interval)
            .with_quit(quit.clone());
        let summary = driver.evaluate_with(&mut population, &mut hooks)?;

        if args.verbose {
            pb.println(format!(
                "  gen {:>4}: best {:>9.3}  mean {:>9.3}  goals {}  lava {}",
                summary.generation,
                summary.best_fitness.unwrap_or(0.0),
                summary.mean_fitness,
                summary.goal_count,
                summary.hazard_count
            ));
        }

        pb.inc(1);
        if summary.interrupted {
            interrupted = true;
            break;
        }
    }
    pb.finish_and_clear();

    if interrupted {
        println!("{} Interrupted; partial fitness kept", "•".yellow());
    }
    print_table(&population);

    if let Some(last) = driver.history().last() {
        println!();
        println!(
            "  Generations: {}  Goals: {}  Lava: {}",
            driver.generation().to_string().cyan(),
            last.goal_count.to_string().green(),
            last.hazard_count.to_string().red()
        );
    }

    if let Some((best, candidate)) = best_candidate(driver.history(), &population) {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| config.run.best_policy_path.clone());
        let meta = PolicyMetadata::new(RunId::new(), best.generation)
            .with_genome(best.id, Some(best.fitness));
        save_policy(&path, &candidate.policy, meta)
            .with_context(|| format!("Failed to save best policy to {}", path.display()))?;
        println!(
            "{} Saved best policy ({}, fitness {:.3}) to {}",
            "✓".green().bold(),
            best.id,
            best.fitness,
            path.display()
        );
    }

    if let Some(path) = &args.frames {
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

    if args.write_back {
        let json = serde_json::to_string_pretty(&population)?;
        std::fs::write(&population_path, json)
            .with_context(|| format!("Failed to write {}", population_path.display()))?;
        println!("  {} Updated {}", "✓".green(), population_path.display());
    }

    Ok(())
}

/// Best completed generation's winner, looked up in the population.
fn best_candidate<'a>(
    history: &History,
    population: &'a [Candidate],
) -> Option<(BestEver, &'a Candidate)> {
    let best = history.best_ever()?;
    let candidate = population.iter().find(|c| c.id == best.id)?;
    Some((best, candidate))
}

fn print_table(population: &[Candidate]) {
    println!();
    println!("  {:<12} {:<14} {:>12}", "ID".bold(), "POLICY".bold(), "FITNESS".bold());
    for candidate in population {
        let fitness = candidate.fitness.unwrap_or(0.0);
        let shown = format!("{:.3}", fitness);
        let shown = if fitness >= 500.0 {
            shown.green()
        } else if fitness < 0.0 {
            shown.red()
        } else {
            shown.normal()
        };
        println!(
            "  {:<12} {:<14} {:>12}",
            candidate.id.to_string(),
            candidate.policy.kind().to_string(),
            shown
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_generation_keeps_earlier_best() {
        let mut driver = GenerationDriver::new(EpisodeConfig::default().with_seed(1)).unwrap();
        let mut population = sample_population();
        let flag = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));

        driver.evaluate(&mut population).unwrap();
        let (completed, _) = best_candidate(driver.history(), &population).unwrap();

        flag.store(true, std::sync::atomic::Ordering::Relaxed);
        let mut hooks = EpisodeHooks::none().with_quit(flag.clone());
        let summary = driver.evaluate_with(&mut population, &mut hooks).unwrap();
        assert!(summary.interrupted);

        let (best, candidate) = best_candidate(driver.history(), &population).unwrap();
        assert_eq!(best, completed);
        assert_eq!(best.generation, 1);
        assert_eq!(candidate.id, best.id);
    }

    #[test]
    fn rejects_malformed_population() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("population.json");
        std::fs::write(&path, "{\"not\": \"a list\"}").unwrap();
        assert!(load_population(&path).is_err());
    }

    #[test]
    fn loads_sample_population() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("population.json");
        std::fs::write(&path, serde_json::to_string(&sample_population()).unwrap()).unwrap();
        let population = load_population(&path).unwrap();
        assert_eq!(population.len(), 5);
        assert!(population.iter().all(|c| c.fitness.is_none()));
    }
}
