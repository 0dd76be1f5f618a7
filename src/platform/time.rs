//! Fixed-step frame accumulator
//!
//! Speeds are expressed per tick, so hosts with a variable frame rate convert
//! their frame deltas into a whole number of ticks here.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, TICK_DT};

#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK_DT)
    }
}

impl FixedStep {
    pub fn new(step: f32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Feed one frame's elapsed seconds, returning how many ticks to run
    pub fn advance(&mut self, dt: f32) -> u32 {
        // Garbage timestamps count as an empty frame
        let dt = if dt.is_finite() { dt } else { 0.0 };
        // Long stalls (tab in background) are not caught up on
        let dt = dt.clamp(0.0, MAX_FRAME_DT.max(self.step));
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    /// Leftover fraction of a tick, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}
