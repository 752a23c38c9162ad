//! Generation statistics.
//!
//! A [`GenerationSummary`] condenses one episode report; [`History`] keeps
//! every summary of a run and tracks the best individual ever seen.

use crate::episode::EpisodeReport;
use goalball_core::types::GenomeId;
use serde::{Deserialize, Serialize};

/// Statistics for one evaluated generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub generation: u64,
    pub population: usize,
    /// Highest fitness, `None` for an empty population.
    pub best_fitness: Option<f64>,
    pub best_id: Option<GenomeId>,
    pub mean_fitness: f64,
    pub goal_count: usize,
    pub hazard_count: usize,
    pub scored_count: usize,
    pub ticks_run: u64,
    pub interrupted: bool,
}

impl GenerationSummary {
    /// Summarize `report`; `ids` are in the same order as the policies.
    pub fn from_report(generation: u64, ids: &[GenomeId], report: &EpisodeReport) -> Self {
        let population = report.fitness.len();
        let mean_fitness = if population == 0 {
            0.0
        } else {
            report.fitness.iter().sum::<f64>() / population as f64
        };
        let best = report.best_index();

        Self {
            generation,
            population,
            best_fitness: report.best_fitness(),
            best_id: best.and_then(|i| ids.get(i).copied()),
            mean_fitness,
            goal_count: report.goal_count(),
            hazard_count: report.hazard_count(),
            scored_count: report.scored_count(),
            ticks_run: report.ticks_run,
            interrupted: report.interrupted,
        }
    }

    /// Fraction of the population that reached the goal.
    pub fn goal_rate(&self) -> f64 {
        if self.population == 0 {
            0.0
        } else {
            self.goal_count as f64 / self.population as f64
        }
    }
}

/// Best individual seen so far in a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestEver {
    pub generation: u64,
    pub id: GenomeId,
    pub fitness: f64,
}

/// Per-run record of generation summaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    summaries: Vec<GenerationSummary>,
    best_ever: Option<BestEver>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a summary. Interrupted generations are kept but never
    /// become the best-ever entry, since their fitness is partial.
    pub fn record(&mut self, summary: GenerationSummary) {
        if summary.interrupted {
            self.summaries.push(summary);
            return;
        }
        if let (Some(fitness), Some(id)) = (summary.best_fitness, summary.best_id) {
            let improved = self.best_ever.map_or(true, |b| fitness > b.fitness);
            if improved {
                self.best_ever = Some(BestEver {
                    generation: summary.generation,
                    id,
                    fitness,
                });
            }
        }
        self.summaries.push(summary);
    }

    pub fn summaries(&self) -> &[GenerationSummary] {
        &self.summaries
    }

    pub fn last(&self) -> Option<&GenerationSummary> {
        self.summaries.last()
    }

    pub fn best_ever(&self) -> Option<BestEver> {
        self.best_ever
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Total goal contacts across all recorded generations.
    pub fn total_goals(&self) -> usize {
        self.summaries.iter().map(|s| s.goal_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use goalball_core::agent::AgentState;
    use goalball_core::types::{Position, ZoneKind};

    fn report(fitness: &[f64]) -> EpisodeReport {
        let mut agents: Vec<AgentState> = fitness
            .iter()
            .map(|&f| {
                let mut a = AgentState::new(Position::new(400.0, 400.0));
                a.fitness = f;
                a
            })
            .collect();
        if let Some(first) = agents.first_mut() {
            first.freeze(ZoneKind::Goal, 10);
        }
        EpisodeReport {
            fitness: fitness.to_vec(),
            agents,
            ticks_run: 200,
            interrupted: false,
        }
    }

    #[test]
    fn summary_picks_first_best() {
        let ids = [GenomeId(7), GenomeId(8), GenomeId(9)];
        let s = GenerationSummary::from_report(3, &ids, &report(&[1.0, 4.0, 4.0]));
        assert_eq!(s.best_fitness, Some(4.0));
        assert_eq!(s.best_id, Some(GenomeId(8)));
        assert_relative_eq!(s.mean_fitness, 3.0);
        assert_eq!(s.goal_count, 1);
        assert_eq!(s.scored_count, 1);
        assert_relative_eq!(s.goal_rate(), 1.0 / 3.0);
    }

    #[test]
    fn empty_population_summary() {
        let s = GenerationSummary::from_report(1, &[], &report(&[]));
        assert_eq!(s.best_fitness, None);
        assert_eq!(s.best_id, None);
        assert_eq!(s.mean_fitness, 0.0);
        assert_eq!(s.goal_rate(), 0.0);
    }

    #[test]
    fn history_tracks_best_ever() {
        let mut history = History::new();
        history.record(GenerationSummary::from_report(1, &[GenomeId(1)], &report(&[5.0])));
        history.record(GenerationSummary::from_report(2, &[GenomeId(2)], &report(&[3.0])));
        history.record(GenerationSummary::from_report(3, &[GenomeId(3)], &report(&[9.0])));

        let best = history.best_ever().unwrap();
        assert_eq!(best.generation, 3);
        assert_eq!(best.id, GenomeId(3));
        assert_eq!(history.len(), 3);
        assert_eq!(history.total_goals(), 3);
        assert_eq!(history.last().map(|s| s.generation), Some(3));
    }

    #[test]
    fn interrupted_generation_is_not_best_ever() {
        let mut history = History::new();
        history.record(GenerationSummary::from_report(1, &[GenomeId(1)], &report(&[5.0])));
        let mut cut = report(&[50.0]);
        cut.interrupted = true;
        history.record(GenerationSummary::from_report(2, &[GenomeId(2)], &cut));

        let best = history.best_ever().unwrap();
        assert_eq!(best.generation, 1);
        assert_eq!(best.id, GenomeId(1));
        assert_eq!(history.len(), 2);
        assert!(history.last().unwrap().interrupted);
    }
}
