//! Episode simulator - one population, one arena, one fitness per policy.
//!
//! Each tick:
//! 1. The quit signal is checked; if raised the episode stops here
//! 2. Every active agent observes, acts and moves
//! 3. Shaping, near-hazard and terminal rewards are applied
//! 4. Agents that touched a zone are frozen at their pre-tick position
//! 5. The render sink is sampled if the tick falls on the interval
//!
//! The episode always runs to `max_steps`; there is no early exit when
//! every agent has scored.

use crate::config::EpisodeConfig;
use crate::kinematics::Kinematics;
use goalball_core::agent::{best_index, AgentState};
use goalball_core::error::Result;
use goalball_core::interrupt::{NeverQuit, QuitSignal};
use goalball_core::policy::{Action, Policy};
use goalball_core::render::{FrameView, NullSink, RenderSink};
use goalball_core::types::{Position, Tick, Zone, ZoneKind};
use serde::Serialize;
use tracing::{debug, warn};

/// Side channels of an episode: rendering and cancellation.
///
/// `render_interval` of 0 disables rendering.
#[derive(Debug, Clone)]
pub struct EpisodeHooks<R = NullSink, Q = NeverQuit> {
    pub generation: u64,
    pub render_interval: Tick,
    pub renderer: R,
    pub quit: Q,
}

impl EpisodeHooks {
    /// No rendering, never quits.
    pub fn none() -> Self {
        Self {
            generation: 0,
            render_interval: 0,
            renderer: NullSink,
            quit: NeverQuit,
        }
    }
}

impl Default for EpisodeHooks {
    fn default() -> Self {
        Self::none()
    }
}

impl<R: RenderSink, Q: QuitSignal> EpisodeHooks<R, Q> {
    pub fn with_renderer<S: RenderSink>(self, renderer: S, interval: Tick) -> EpisodeHooks<S, Q> {
        EpisodeHooks {
            generation: self.generation,
            render_interval: interval,
            renderer,
            quit: self.quit,
        }
    }

    pub fn with_quit<S: QuitSignal>(self, quit: S) -> EpisodeHooks<R, S> {
        EpisodeHooks {
            generation: self.generation,
            render_interval: self.render_interval,
            renderer: self.renderer,
            quit,
        }
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    fn should_render(&self, tick: Tick) -> bool {
        self.render_interval > 0 && tick % self.render_interval == 0
    }
}

/// Everything an episode produced.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeReport {
    /// Fitness per policy, in input order.
    pub fitness: Vec<f64>,
    /// Final agent states, in input order.
    pub agents: Vec<AgentState>,
    /// Ticks actually simulated.
    pub ticks_run: Tick,
    /// Whether the quit signal cut the episode short.
    pub interrupted: bool,
}

impl EpisodeReport {
    pub fn scored_count(&self) -> usize {
        self.agents.iter().filter(|a| a.scored).count()
    }

    pub fn goal_count(&self) -> usize {
        self.agents.iter().filter(|a| a.reached_goal()).count()
    }

    pub fn hazard_count(&self) -> usize {
        self.agents.iter().filter(|a| a.hit_hazard()).count()
    }

    pub fn best_index(&self) -> Option<usize> {
        best_index(&self.fitness)
    }

    pub fn best_fitness(&self) -> Option<f64> {
        self.best_index().map(|i| self.fitness[i])
    }
}

/// Runs episodes under a fixed configuration.
#[derive(Debug, Clone)]
pub struct Simulator {
    kinematics: Kinematics,
}

impl Simulator {
    pub fn new(config: EpisodeConfig) -> Result<Self> {
        Ok(Self {
            kinematics: Kinematics::new(config)?,
        })
    }

    pub fn config(&self) -> &EpisodeConfig {
        self.kinematics.config()
    }

    /// Run one episode without rendering or cancellation.
    pub fn run<P: Policy>(&mut self, policies: &mut [P]) -> Result<EpisodeReport> {
        self.run_with(policies, &mut EpisodeHooks::none())
    }

    /// Run one episode for `policies`, one agent per policy.
    ///
    /// An invalid action from any policy aborts the episode with
    /// `PolicyError::InvalidAction` naming the agent.
    pub fn run_with<P, R, Q>(
        &mut self,
        policies: &mut [P],
        hooks: &mut EpisodeHooks<R, Q>,
    ) -> Result<EpisodeReport>
    where
        P: Policy,
        R: RenderSink,
        Q: QuitSignal,
    {
        let config = self.kinematics.config();
        let max_steps = config.max_steps;
        let rewards = config.rewards;
        let hazard_radius = config.hazard.radius;
        let goal: Zone = config.goal;
        let hazard: Zone = config.hazard;
        let start = config.start_position();

        let mut agents: Vec<AgentState> = policies.iter().map(|_| AgentState::new(start)).collect();
        let mut ticks_run = 0;
        let mut interrupted = false;

        for tick in 0..max_steps {
            if hooks.quit.should_quit() {
                warn!(generation = hooks.generation, tick, "Episode interrupted");
                interrupted = true;
                break;
            }

            for (i, (agent, policy)) in agents.iter_mut().zip(policies.iter_mut()).enumerate() {
                if !agent.is_active() {
                    continue;
                }

                let observation = self.kinematics.observe(&agent.position);
                let action = Action::from_outputs(i, &policy.activate(&observation))?;
                let step = self.kinematics.step(&agent.position, &action);
                agent.fitness += rewards.score(&step, hazard_radius, tick, max_steps);

                match step.contact {
                    Some(zone) => {
                        agent.freeze(zone, tick);
                        match zone {
                            ZoneKind::Goal => debug!(
                                agent = i,
                                tick,
                                fitness = agent.fitness,
                                "Goal reached"
                            ),
                            ZoneKind::Hazard => debug!(
                                agent = i,
                                tick,
                                fitness = agent.fitness,
                                "Hazard hit"
                            ),
                        }
                    }
                    None => agent.position = step.position,
                }
            }
            ticks_run = tick + 1;

            if hooks.should_render(tick) {
                let positions: Vec<Position> = agents.iter().map(|a| a.position).collect();
                let fitness: Vec<f64> = agents.iter().map(|a| a.fitness).collect();
                hooks.renderer.render(&FrameView {
                    generation: hooks.generation,
                    tick,
                    positions: &positions,
                    goal: &goal,
                    hazard: &hazard,
                    best_index: best_index(&fitness),
                    fitness: &fitness,
                });
            }
        }

        Ok(EpisodeReport {
            fitness: agents.iter().map(|a| a.fitness).collect(),
            agents,
            ticks_run,
            interrupted,
        })
    }
}

/// Run one episode with default settings and the given zones.
///
/// Returns one fitness value per policy, in input order.
pub fn run_episode<P: Policy>(
    policies: &mut [P],
    goal: Zone,
    hazard: Zone,
    max_steps: Tick,
) -> Result<Vec<f64>> {
    let mut simulator = Simulator::new(EpisodeConfig::with_zones(goal, hazard, max_steps))?;
    Ok(simulator.run(policies)?.fitness)
}
