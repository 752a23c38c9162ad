//! Initialize a new goalball project.

use anyhow::{Context, Result};
use colored::Colorize;
use goalball::prelude::sample_population;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let base_path = match path {
        Some(p) => p,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing goalball project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    // Create .goalball directory for saved policies and frames
    let data_dir = base_path.join(".goalball");
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    println!("  {} Created {}", "✓".green(), data_dir.display());

    // Create default config
    let config_path = base_path.join(CONFIG_FILE);
    let config = Config::default();
    if !config_path.exists() {
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    // Create a sample population
    let population_path = base_path.join(&config.run.population_path);
    if !population_path.exists() {
        let json = serde_json::to_string_pretty(&sample_population())
            .context("Failed to serialize sample population")?;
        std::fs::write(&population_path, json)
            .with_context(|| format!("Failed to write {}", population_path.display()))?;
        println!("  {} Created {}", "✓".green(), population_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), population_path.display());
    }

    let gitignore_path = data_dir.join(".gitignore");
    if !gitignore_path.exists() {
        std::fs::write(&gitignore_path, "*.json\n")?;
        println!("  {} Created {}", "✓".green(), gitignore_path.display());
    }

    println!();
    println!("{} goalball project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} goalball evaluate", "1.".blue());
    println!("  {} goalball demo", "2.".blue());

    Ok(())
}
