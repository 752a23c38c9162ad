//! Rendering sink - a read-only observer of the simulation.
//!
//! The simulator samples itself at a caller-chosen interval and hands the
//! sink shared references only, so a sink can never change the outcome of
//! an episode.

use crate::types::{Position, Tick, Zone};

/// Everything a display needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub generation: u64,
    pub tick: Tick,
    pub positions: &'a [Position],
    pub goal: &'a Zone,
    pub hazard: &'a Zone,
    /// Agent with the highest fitness so far, if fitness is tracked.
    pub best_index: Option<usize>,
    /// Current fitness values; empty during single-agent replay.
    pub fitness: &'a [f64],
}

/// Receives sampled frames.
pub trait RenderSink {
    fn render(&mut self, frame: &FrameView<'_>);
}

/// Sink that drops every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _frame: &FrameView<'_>) {}
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, frame: &FrameView<'_>) {
        (**self).render(frame)
    }
}
