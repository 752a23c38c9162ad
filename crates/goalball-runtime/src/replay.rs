//! Single-agent replay of a trained policy.
//!
//! Moves through the same [`Kinematics`] as training but keeps no fitness.
//! Stops on the first contact, on timeout, or when the quit signal is
//! raised. Every simulated tick is rendered.

use crate::config::EpisodeConfig;
use crate::episode::EpisodeHooks;
use crate::kinematics::Kinematics;
use goalball_core::error::Result;
use goalball_core::interrupt::QuitSignal;
use goalball_core::policy::{Action, Policy};
use goalball_core::render::{FrameView, RenderSink};
use goalball_core::types::{Outcome, Position, Tick, Zone};
use serde::Serialize;
use tracing::{debug, warn};

/// How a replay ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemoReport {
    /// 0-based tick of contact, `max_steps` on timeout, or the tick the
    /// quit signal was seen.
    pub terminal_step: Tick,
    pub outcome: Outcome,
    /// Where the ball ended up. On contact this is the pre-contact position.
    pub final_position: Position,
}

/// Replays a single policy under a fixed configuration.
#[derive(Debug, Clone)]
pub struct Replay {
    kinematics: Kinematics,
}

impl Replay {
    pub fn new(config: EpisodeConfig) -> Result<Self> {
        Ok(Self {
            kinematics: Kinematics::new(config)?,
        })
    }

    pub fn config(&self) -> &EpisodeConfig {
        self.kinematics.config()
    }

    pub fn run<P: Policy>(&mut self, policy: &mut P) -> Result<DemoReport> {
        self.run_with(policy, &mut EpisodeHooks::none())
    }

    /// Replay `policy`, sampling the renderer after every tick.
    ///
    /// `hooks.render_interval` is ignored: replay is meant to be watched.
    pub fn run_with<P, R, Q>(
        &mut self,
        policy: &mut P,
        hooks: &mut EpisodeHooks<R, Q>,
    ) -> Result<DemoReport>
    where
        P: Policy,
        R: RenderSink,
        Q: QuitSignal,
    {
        let config = self.kinematics.config();
        let max_steps = config.max_steps;
        let goal: Zone = config.goal;
        let hazard: Zone = config.hazard;
        let mut position = config.start_position();

        for tick in 0..max_steps {
            if hooks.quit.should_quit() {
                warn!(tick, "Replay interrupted");
                return Ok(DemoReport {
                    terminal_step: tick,
                    outcome: Outcome::Interrupted,
                    final_position: position,
                });
            }

            let observation = self.kinematics.observe(&position);
            let action = Action::from_outputs(0, &policy.activate(&observation))?;
            let step = self.kinematics.step(&position, &action);
            if step.contact.is_none() {
                position = step.position;
            }

            hooks.renderer.render(&FrameView {
                generation: hooks.generation,
                tick,
                positions: std::slice::from_ref(&position),
                goal: &goal,
                hazard: &hazard,
                best_index: None,
                fitness: &[],
            });

            if let Some(zone) = step.contact {
                let outcome = Outcome::from(zone);
                debug!(tick, %outcome, "Replay finished");
                return Ok(DemoReport {
                    terminal_step: tick,
                    outcome,
                    final_position: position,
                });
            }
        }

        debug!(max_steps, "Replay timed out");
        Ok(DemoReport {
            terminal_step: max_steps,
            outcome: Outcome::Timeout,
            final_position: position,
        })
    }
}

/// Replay one policy with default settings and the given zones.
pub fn run_demo<P: Policy>(
    policy: &mut P,
    goal: Zone,
    hazard: Zone,
    max_steps: Tick,
) -> Result<DemoReport> {
    Replay::new(EpisodeConfig::with_zones(goal, hazard, max_steps))?.run(policy)
}
