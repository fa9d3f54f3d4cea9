//! Per-frame collision and pass-through adjudication.

use crate::constants::{GROUND_Y, NIGHT_TOGGLE_EVERY};
use crate::entities::{Bird, PipeStream};

/// What ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Ground,
    Pipe,
}

/// Outcome of checking one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Judgement {
    /// First collision found this frame, if any.
    pub collision: Option<Collision>,
    /// Pipes newly cleared this frame. Each is worth one point.
    pub pipes_cleared: u32,
}

#[derive(Debug, Clone)]
pub struct CollisionJudge {
    ground_y: f64,
}

impl Default for CollisionJudge {
    fn default() -> Self {
        Self { ground_y: GROUND_Y }
    }
}

impl CollisionJudge {
    pub fn new(ground_y: f64) -> Self {
        Self { ground_y }
    }

    /// Test the bird against the ground and every pipe, and mark pipes the
    /// bird has cleared. A pipe is marked at most once over its lifetime.
    pub fn check(&self, bird: &Bird, pipes: &mut PipeStream) -> Judgement {
        let bird_rect = bird.rect();
        let mut judgement = Judgement::default();

        if bird_rect.bottom() >= self.ground_y {
            judgement.collision = Some(Collision::Ground);
        }

        for pipe in pipes.iter_mut() {
            if judgement.collision.is_none()
                && pipe.rects().iter().any(|r| bird_rect.intersects(r))
            {
                judgement.collision = Some(Collision::Pipe);
            }

            if !pipe.scored && pipe.upper.right() < bird_rect.left() {
                pipe.scored = true;
                judgement.pipes_cleared += 1;
            }
        }

        judgement
    }
}

/// True when reaching `score` should flip between day and night.
pub fn is_night_flip_score(score: u32) -> bool {
    score > 0 && score % NIGHT_TOGGLE_EVERY == 0
}
