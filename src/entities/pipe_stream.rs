//! Spawning, scrolling and retiring of the pipe sequence.
//!
//! Pipes are spawned by scroll distance rather than by frame count, so the
//! horizontal spacing between consecutive pipes is the same at any frame
//! rate. A spawn that happens mid-frame is placed as if it had entered the
//! screen at the exact moment the threshold was crossed.

use super::pipe::Pipe;
use crate::constants::{PIPE_SPAWN_SPACING, SCREEN_WIDTH};
use rand::Rng;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct PipeStream {
    /// Active pipes, oldest (leftmost) first.
    pipes: VecDeque<Pipe>,
    /// Scroll distance accumulated since the last spawn.
    distance_since_spawn: f64,
    scale_factor: f64,
    speed: f64,
}

impl PipeStream {
    pub fn new(scale_factor: f64, speed: f64) -> Self {
        Self {
            pipes: VecDeque::new(),
            // Primed so the first running frame spawns a pipe immediately
            distance_since_spawn: PIPE_SPAWN_SPACING,
            scale_factor,
            speed,
        }
    }

    /// Advance all pipes by `dt`, spawn on cadence, retire off-screen pipes.
    pub fn update<R: Rng>(&mut self, dt: f64, rng: &mut R) {
        for pipe in &mut self.pipes {
            pipe.update(dt);
        }

        self.distance_since_spawn += self.speed * dt;
        while self.distance_since_spawn >= PIPE_SPAWN_SPACING {
            self.distance_since_spawn -= PIPE_SPAWN_SPACING;
            let x = SCREEN_WIDTH - self.distance_since_spawn;
            self.pipes
                .push_back(Pipe::new(x, self.scale_factor, self.speed, rng));
        }

        self.retire_offscreen();
    }

    fn retire_offscreen(&mut self) {
        while self
            .pipes
            .front()
            .is_some_and(|pipe| pipe.trailing_edge() < 0.0)
        {
            self.pipes.pop_front();
        }
    }

    /// Append an already-built pipe (used for scripted layouts and tests).
    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push_back(pipe);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pipe> {
        self.pipes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }
}
