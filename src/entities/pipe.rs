//! A single pipe obstacle: an upper and lower rectangle with a gap between.

use super::geometry::Rect;
use crate::constants::{
    LOWER_PIPE_MAX_TOP, LOWER_PIPE_MIN_TOP, PIPE_GAP, PIPE_SPRITE_HEIGHT, PIPE_SPRITE_WIDTH,
};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Pipe {
    /// Obstacle hanging from the top of the screen.
    pub upper: Rect,
    /// Obstacle rising from the ground.
    pub lower: Rect,
    /// Leftward speed in px/s.
    pub speed: f64,
    /// Set once the bird has cleared this pipe.
    pub scored: bool,
}

impl Pipe {
    /// Spawn a pipe at `x` with a random gap height.
    pub fn new<R: Rng>(x: f64, scale_factor: f64, speed: f64, rng: &mut R) -> Self {
        let lower_top = rng.gen_range(LOWER_PIPE_MIN_TOP..=LOWER_PIPE_MAX_TOP) as f64;
        Self::with_lower_top(x, lower_top, scale_factor, speed)
    }

    /// Spawn a pipe whose lower rectangle starts at `lower_top`.
    pub fn with_lower_top(x: f64, lower_top: f64, scale_factor: f64, speed: f64) -> Self {
        let width = PIPE_SPRITE_WIDTH * scale_factor;
        let height = PIPE_SPRITE_HEIGHT * scale_factor;
        let gap = PIPE_GAP * scale_factor;

        Self {
            upper: Rect::new(x, lower_top - gap - height, width, height),
            lower: Rect::new(x, lower_top, width, height),
            speed,
            scored: false,
        }
    }

    /// Scroll both rectangles left.
    pub fn update(&mut self, dt: f64) {
        self.shift(-self.speed * dt);
    }

    pub(crate) fn shift(&mut self, dx: f64) {
        self.upper.x += dx;
        self.lower.x += dx;
    }

    pub fn x(&self) -> f64 {
        self.upper.x
    }

    /// Right edge shared by both rectangles.
    pub fn trailing_edge(&self) -> f64 {
        self.upper.right()
    }

    /// Vertical span of the opening as `(top, bottom)`.
    pub fn gap(&self) -> (f64, f64) {
        (self.upper.bottom(), self.lower.top())
    }

    pub fn rects(&self) -> [&Rect; 2] {
        [&self.upper, &self.lower]
    }
}
