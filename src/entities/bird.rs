//! The player-controlled bird: gravity, flap impulse and display rotation.

use super::geometry::Rect;
use crate::constants::{
    BIRD_SPRITE_HEIGHT, BIRD_SPRITE_WIDTH, BIRD_START_X, BIRD_START_Y, FLAP_IMPULSE, GRAVITY,
    MAX_FALL_SPEED, MAX_NOSE_DOWN_DEGREES, MAX_NOSE_UP_DEGREES,
};

#[derive(Debug, Clone)]
pub struct Bird {
    /// Center x in world pixels. Constant during a run.
    pub x: f64,
    /// Center y in world pixels (positive = downward).
    pub y: f64,
    /// Vertical velocity in px/s (positive = downward).
    pub velocity: f64,
    /// Motion is frozen until the player starts the run.
    pub update_on: bool,
    pub width: f64,
    pub height: f64,
}

impl Bird {
    /// Create a bird at the start position, at rest, with motion disabled.
    pub fn new(scale_factor: f64) -> Self {
        Self {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            velocity: 0.0,
            update_on: false,
            width: BIRD_SPRITE_WIDTH * scale_factor,
            height: BIRD_SPRITE_HEIGHT * scale_factor,
        }
    }

    /// Bounding box used for collision tests.
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.x, self.y, self.width, self.height)
    }

    /// Replace the current velocity with the flap impulse.
    pub fn flap(&mut self) {
        self.velocity = FLAP_IMPULSE;
    }

    /// Integrate one frame of motion. Does nothing while motion is disabled.
    pub fn update(&mut self, dt: f64) {
        if !self.update_on {
            return;
        }

        self.velocity = (self.velocity + GRAVITY * dt).min(MAX_FALL_SPEED);
        self.y += self.velocity * dt;

        // Ceiling: stop at the top edge instead of leaving the screen
        let half_height = self.height / 2.0;
        if self.y - half_height < 0.0 {
            self.y = half_height;
            self.velocity = self.velocity.max(0.0);
        }
    }

    /// Display rotation in degrees (positive = nose up), derived from velocity.
    pub fn rotation(&self) -> f64 {
        rotation_for_velocity(self.velocity)
    }
}

/// Map a vertical velocity to a sprite tilt.
pub fn rotation_for_velocity(velocity: f64) -> f64 {
    (-velocity / MAX_FALL_SPEED * 90.0).clamp(MAX_NOSE_DOWN_DEGREES, MAX_NOSE_UP_DEGREES)
}
