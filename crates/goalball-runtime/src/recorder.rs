//! Frame recorder - a headless render sink.
//!
//! Copies every sampled frame into an owned, serializable record so a run
//! can be inspected or plotted after the fact.

use goalball_core::error::Result;
use goalball_core::render::{FrameView, RenderSink};
use goalball_core::types::{Position, Tick, Zone};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;

/// Owned copy of one sampled frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub generation: u64,
    pub tick: Tick,
    pub positions: Vec<Position>,
    pub best_index: Option<usize>,
    pub fitness: Vec<f64>,
}

/// Recorded frames plus the zones they were drawn against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameRecorder {
    goal: Option<Zone>,
    hazard: Option<Zone>,
    frames: VecDeque<Frame>,
    /// Keep at most this many frames; older ones are dropped first.
    #[serde(skip)]
    capacity: Option<usize>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Recorded frames, oldest first.
    pub fn frames(&self) -> &VecDeque<Frame> {
        &self.frames
    }

    pub fn goal(&self) -> Option<&Zone> {
        self.goal.as_ref()
    }

    pub fn hazard(&self) -> Option<&Zone> {
        self.hazard.as_ref()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Write all frames as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl RenderSink for FrameRecorder {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.goal = Some(*frame.goal);
        self.hazard = Some(*frame.hazard);
        if let Some(cap) = self.capacity {
            if cap == 0 {
                return;
            }
            while self.frames.len() >= cap {
                self.frames.pop_front();
            }
        }
        self.frames.push_back(Frame {
            generation: frame.generation,
            tick: frame.tick,
            positions: frame.positions.to_vec(),
            best_index: frame.best_index,
            fitness: frame.fitness.to_vec(),
        });
    }
}
