//! Generation driver - the entry point an optimizer calls once per generation.
//!
//! The driver owns the generation counter. Each call builds one policy per
//! individual, runs a single episode, writes every fitness back and, unless
//! the episode was interrupted, advances the counter.

use crate::config::EpisodeConfig;
use crate::episode::{EpisodeHooks, Simulator};
use crate::metrics::{GenerationSummary, History};
use goalball_core::error::{ConfigError, GoalballError, Result};
use goalball_core::framework::Individual;
use goalball_core::interrupt::QuitSignal;
use goalball_core::render::RenderSink;
use goalball_core::types::GenomeId;
use tracing::{info, warn};

/// Drives generation-by-generation evaluation.
#[derive(Debug, Clone)]
pub struct GenerationDriver {
    simulator: Simulator,
    generation: u64,
    max_generations: Option<u64>,
    history: History,
}

impl GenerationDriver {
    pub fn new(config: EpisodeConfig) -> Result<Self> {
        Ok(Self {
            simulator: Simulator::new(config)?,
            generation: 0,
            max_generations: None,
            history: History::new(),
        })
    }

    /// Refuse to evaluate once `max` generations have completed.
    pub fn with_max_generations(mut self, max: u64) -> Self {
        self.max_generations = Some(max);
        self
    }

    /// Completed generations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn max_generations(&self) -> Option<u64> {
        self.max_generations
    }

    /// Generations left in the budget, `None` when unbounded.
    pub fn remaining(&self) -> Option<u64> {
        self.max_generations
            .map(|max| max.saturating_sub(self.generation))
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == Some(0)
    }

    pub fn config(&self) -> &EpisodeConfig {
        self.simulator.config()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Evaluate one generation without rendering or cancellation.
    pub fn evaluate<I: Individual>(&mut self, population: &mut [I]) -> Result<GenerationSummary> {
        self.evaluate_with(population, &mut EpisodeHooks::none())
    }

    /// Evaluate one generation.
    ///
    /// Frames are tagged with the generation being evaluated. An
    /// interrupted episode still writes its partial fitness back but does
    /// not advance the counter.
    pub fn evaluate_with<I, R, Q>(
        &mut self,
        population: &mut [I],
        hooks: &mut EpisodeHooks<R, Q>,
    ) -> Result<GenerationSummary>
    where
        I: Individual,
        R: RenderSink,
        Q: QuitSignal,
    {
        if let Some(max) = self.max_generations {
            if self.generation >= max {
                return Err(GoalballError::Config(ConfigError::GenerationsExhausted(max)));
            }
        }

        let next = self.generation + 1;
        let ids: Vec<GenomeId> = population.iter().map(|i| i.id()).collect();
        let mut policies = population
            .iter()
            .map(|i| i.build_policy())
            .collect::<Result<Vec<_>>>()?;

        hooks.generation = next;
        let report = self.simulator.run_with(&mut policies, hooks)?;

        for (individual, &fitness) in population.iter_mut().zip(&report.fitness) {
            individual.set_fitness(fitness);
        }

        let summary = GenerationSummary::from_report(next, &ids, &report);
        if report.interrupted {
            warn!(
                generation = next,
                ticks = report.ticks_run,
                "Generation interrupted, counter not advanced"
            );
        } else {
            self.generation = next;
            info!(
                generation = next,
                best = summary.best_fitness.unwrap_or(0.0),
                scored = summary.scored_count,
                goals = summary.goal_count,
                "Generation complete"
            );
        }

        self.history.record(summary.clone());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goalball_agents::population::Candidate;
    use goalball_agents::scripted::ConstantPolicy;
    use goalball_core::interrupt::QuitAfter;

    fn idle_population(n: u64) -> Vec<Candidate> {
        (0..n).map(|i| Candidate::new(i, ConstantPolicy::idle())).collect()
    }

    #[test]
    fn counter_starts_at_zero_and_advances() {
        let mut driver = GenerationDriver::new(EpisodeConfig {
            max_steps: 20,
            ..EpisodeConfig::default()
        })
        .unwrap();
        assert_eq!(driver.generation(), 0);

        let mut population = idle_population(3);
        let summary = driver.evaluate(&mut population).unwrap();
        assert_eq!(summary.generation, 1);
        assert_eq!(driver.generation(), 1);
        assert!(population.iter().all(|c| c.fitness.is_some()));

        driver.evaluate(&mut population).unwrap();
        assert_eq!(driver.generation(), 2);
        assert_eq!(driver.history().len(), 2);
    }

    #[test]
    fn interrupted_generation_keeps_counter() {
        let mut driver = GenerationDriver::new(EpisodeConfig::default()).unwrap();
        let mut population = idle_population(2);
        let mut hooks = EpisodeHooks::none().with_quit(QuitAfter::new(5));

        let summary = driver.evaluate_with(&mut population, &mut hooks).unwrap();
        assert!(summary.interrupted);
        assert_eq!(driver.generation(), 0);
        assert!(population.iter().all(|c| c.fitness.unwrap_or(0.0) > 0.0));
    }

    #[test]
    fn budget_is_enforced() {
        let mut driver = GenerationDriver::new(EpisodeConfig {
            max_steps: 5,
            ..EpisodeConfig::default()
        })
        .unwrap()
        .with_max_generations(1);
        let mut population = idle_population(1);

        driver.evaluate(&mut population).unwrap();
        assert!(driver.is_exhausted());
        let err = driver.evaluate(&mut population).unwrap_err();
        assert!(matches!(
            err,
            GoalballError::Config(ConfigError::GenerationsExhausted(1))
        ));
    }

    #[test]
    fn empty_population_still_counts() {
        let mut driver = GenerationDriver::new(EpisodeConfig {
            max_steps: 5,
            ..EpisodeConfig::default()
        })
        .unwrap();
        let mut population: Vec<Candidate> = Vec::new();
        let summary = driver.evaluate(&mut population).unwrap();
        assert_eq!(summary.population, 0);
        assert_eq!(driver.generation(), 1);
    }
}
