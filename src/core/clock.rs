//! Frame pacing and delta-time measurement.

use crate::constants::MAX_FRAME_DT;
use std::time::{Duration, Instant};

/// Caps the loop at a target frame rate and measures the real time between
/// frames. The measured time is fed forward as the next frame's `dt`; there
/// is no fixed timestep.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_budget: Duration,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    pub fn starting_at(target_fps: u32, start: Instant) -> Self {
        Self {
            frame_budget: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last_frame: start,
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// How long the loop may still wait for input before the next frame.
    pub fn time_until_next_frame(&self) -> Duration {
        self.time_until_next_frame_at(Instant::now())
    }

    pub fn time_until_next_frame_at(&self, now: Instant) -> Duration {
        self.frame_budget
            .saturating_sub(now.saturating_duration_since(self.last_frame))
    }

    /// Start a new frame and return the elapsed seconds since the previous one.
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    /// Like `tick`, with an explicit timestamp. Stalls longer than
    /// `MAX_FRAME_DT` are truncated so the bird cannot tunnel through pipes.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        dt.as_secs_f64().min(MAX_FRAME_DT)
    }
}
