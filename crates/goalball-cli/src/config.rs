//! Configuration management for the goalball CLI.

use anyhow::{Context, Result};
use goalball::prelude::EpisodeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project config file.
pub const CONFIG_FILE: &str = "goalball.toml";

/// Goalball project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub episode: EpisodeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Generation budget for one `evaluate` invocation.
    #[serde(default = "default_max_generations")]
    pub max_generations: u64,
    /// Sample a frame every this many ticks; 0 disables sampling.
    #[serde(default = "default_render_interval")]
    pub render_interval: u64,
    #[serde(default = "default_population_path")]
    pub population_path: PathBuf,
    #[serde(default = "default_best_policy_path")]
    pub best_policy_path: PathBuf,
}

// Default value functions
fn default_max_generations() -> u64 { 800 }
fn default_render_interval() -> u64 { 40 }
fn default_population_path() -> PathBuf { PathBuf::from("population.json") }
fn default_best_policy_path() -> PathBuf { PathBuf::from(".goalball/best.json") }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_generations: default_max_generations(),
            render_interval: default_render_interval(),
            population_path: default_population_path(),
            best_policy_path: default_best_policy_path(),
        }
    }
}

impl Config {
    /// Load config from goalball.toml in the current or parent directories.
    ///
    /// Relative paths in `[run]` are resolved against the config file's
    /// directory.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .episode
            .validate()
            .with_context(|| format!("Invalid [episode] in {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.run.population_path = base.join(&config.run.population_path);
            config.run.best_policy_path = base.join(&config.run.best_policy_path);
        }
        Ok(config)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find goalball.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
