//! Two ground tiles leapfrogging each other for seamless horizontal scroll.

use crate::constants::{GROUND_TILE_WIDTH, GROUND_Y};

#[derive(Debug, Clone)]
pub struct Ground {
    /// Left edges of the two tiles.
    pub tile_x: [f64; 2],
    pub tile_width: f64,
    pub y: f64,
}

impl Ground {
    pub fn new(scale_factor: f64) -> Self {
        let tile_width = GROUND_TILE_WIDTH * scale_factor;
        Self {
            tile_x: [0.0, tile_width],
            tile_width,
            y: GROUND_Y,
        }
    }

    /// Scroll both tiles left; a tile that leaves the screen wraps behind
    /// the other one.
    pub fn update(&mut self, speed: f64, dt: f64) {
        let dx = speed * dt;
        self.tile_x[0] -= dx;
        self.tile_x[1] -= dx;

        if self.tile_x[0] + self.tile_width < 0.0 {
            self.tile_x[0] = self.tile_x[1] + self.tile_width;
        }
        if self.tile_x[1] + self.tile_width < 0.0 {
            self.tile_x[1] = self.tile_x[0] + self.tile_width;
        }
    }
}
