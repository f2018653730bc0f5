//! Per-tick movement for the player and enemies
//!
//! Velocities are in pixels per tick. Both kinds of blob wrap around the
//! canvas edges using their own size as the overshoot margin.

use glam::Vec2;

use super::state::{Enemy, Player};
use crate::consts::*;
use crate::tuning::Tuning;
use crate::wrap_toroidal;

/// Wrap a blob position around the canvas
#[inline]
pub fn wrap_position(pos: Vec2, size: f32) -> Vec2 {
    Vec2::new(
        wrap_toroidal(pos.x, CANVAS_WIDTH, size),
        wrap_toroidal(pos.y, CANVAS_HEIGHT, size),
    )
}

/// Player speed for a given size: bigger blobs are slower
#[inline]
pub fn player_speed(size: f32, tuning: &Tuning) -> f32 {
    tuning.base_speed * (tuning.speed_reference_size / size)
}

impl Player {
    /// Move toward the pointer target. Inside the dead zone the blob holds
    /// still and keeps its last velocity for rendering.
    pub fn seek(&mut self, target: Vec2, tuning: &Tuning) {
        let delta = target - self.pos;
        let distance = delta.length();
        if distance <= tuning.dead_zone {
            return;
        }

        self.vel = delta / distance * player_speed(self.size, tuning);
        self.pos = wrap_position(self.pos + self.vel, self.size);
    }
}

impl Enemy {
    /// Chase a smaller player or flee a bigger one when within detection
    /// range. Steering is skipped while the player is invincible.
    pub fn steer(
        &mut self,
        player_pos: Vec2,
        player_size: f32,
        player_invincible: bool,
        tuning: &Tuning,
    ) {
        if !player_invincible {
            let to_player = player_pos - self.pos;
            let distance = to_player.length();
            if distance > 0.0 && distance < tuning.enemy_detection_radius {
                let accel = if self.size > player_size {
                    tuning.enemy_steer_accel
                } else {
                    -tuning.enemy_steer_accel
                };
                self.vel += to_player / distance * accel;
            }
        }

        self.vel = self.vel.clamp_length_max(tuning.enemy_max_speed);
    }

    /// Integrate velocity and wrap
    pub fn advance(&mut self) {
        self.pos = wrap_position(self.pos + self.vel, self.size);
    }
}
