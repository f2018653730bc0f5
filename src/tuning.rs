//! Game balance tuning
//!
//! Every number the rules engine consults lives here so a balance pass can be
//! done from a JSON file without touching simulation code. Distances and
//! speeds are in canvas pixels per tick; durations are in seconds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::secs_to_ticks;

/// Errors from loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Population ===
    /// Tokens scattered at game start
    pub initial_tokens: usize,
    /// Fixed enemy roster size
    pub enemy_count: usize,

    // === Player ===
    pub player_start_size: f32,
    pub player_min_size: f32,
    pub player_max_size: f32,
    /// Speed at `speed_reference_size`; scales inversely with size
    pub base_speed: f32,
    pub speed_reference_size: f32,
    /// Pointer distance under which the player stops moving
    pub dead_zone: f32,

    // === Pickups ===
    /// Added to half the player size to get the token reach
    pub token_pickup_radius: f32,
    /// Added to half the player size to get the power-up reach
    pub power_up_pickup_radius: f32,
    pub token_points_per_value: f64,
    pub token_growth_per_value: f32,
    /// Chance per tick that a power-up appears
    pub power_up_chance_per_tick: f64,
    /// Invincibility window length
    pub invincibility_secs: f64,

    // === Combo ===
    /// Pickups closer together than this grow the multiplier
    pub combo_window_secs: f64,
    pub combo_step: f64,
    pub combo_cap: f64,

    // === Enemies ===
    pub enemy_detection_radius: f32,
    pub enemy_steer_accel: f32,
    pub enemy_max_speed: f32,
    /// Initial velocity components are drawn from ±spread/2
    pub enemy_initial_speed_spread: f32,
    pub enemy_min_size: f32,
    pub enemy_max_size: f32,
    pub enemy_eat_bonus: f64,
    pub enemy_eat_growth: f32,

    // === Effects ===
    pub token_burst: usize,
    pub enemy_burst: usize,
    pub power_up_burst: usize,
    /// Particle velocity components are drawn from ±spread/2
    pub particle_spread: f32,
    pub particle_gravity: f32,
    pub particle_decay: f32,
    pub text_rise: f32,
    pub text_decay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_tokens: 40,
            enemy_count: 5,

            player_start_size: 30.0,
            player_min_size: 30.0,
            player_max_size: 150.0,
            base_speed: 3.0,
            speed_reference_size: 50.0,
            dead_zone: 5.0,

            token_pickup_radius: 10.0,
            power_up_pickup_radius: 15.0,
            token_points_per_value: 100.0,
            token_growth_per_value: 2.0,
            // 0.2% x 30%
            power_up_chance_per_tick: 0.0006,
            invincibility_secs: 5.0,

            combo_window_secs: 1.0,
            combo_step: 0.5,
            combo_cap: 5.0,

            enemy_detection_radius: 200.0,
            enemy_steer_accel: 0.05,
            enemy_max_speed: 2.5,
            enemy_initial_speed_spread: 3.0,
            enemy_min_size: 40.0,
            enemy_max_size: 70.0,
            enemy_eat_bonus: 500.0,
            enemy_eat_growth: 10.0,

            token_burst: 8,
            enemy_burst: 12,
            power_up_burst: 15,
            particle_spread: 8.0,
            particle_gravity: 0.2,
            particle_decay: 0.02,
            text_rise: 2.0,
            text_decay: 0.015,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter tuning file)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(msg: &str) -> Result<(), TuningError> {
            Err(TuningError::Invalid(msg.to_string()))
        }

        if !(self.player_min_size > 0.0 && self.player_min_size <= self.player_max_size) {
            return invalid("player size bounds must satisfy 0 < min <= max");
        }
        if !(self.player_min_size..=self.player_max_size).contains(&self.player_start_size) {
            return invalid("player start size must lie within the size bounds");
        }
        if !(self.enemy_min_size > 0.0 && self.enemy_min_size < self.enemy_max_size) {
            return invalid("enemy size range must satisfy 0 < min < max");
        }
        if self.speed_reference_size <= 0.0 {
            return invalid("speed reference size must be positive");
        }
        if self.combo_cap < 1.0 || self.combo_step < 0.0 {
            return invalid("combo cap must be >= 1 and combo step non-negative");
        }
        if !(0.0..=1.0).contains(&self.power_up_chance_per_tick) {
            return invalid("power-up chance must be a probability");
        }
        if self.invincibility_secs <= 0.0 || self.combo_window_secs <= 0.0 {
            return invalid("durations must be positive");
        }
        if self.particle_decay <= 0.0 || self.text_decay <= 0.0 {
            return invalid("effect decay must be positive or effects never expire");
        }
        let non_negative = [
            (self.base_speed, "base speed"),
            (self.dead_zone, "dead zone"),
            (self.enemy_max_speed, "enemy max speed"),
            (self.enemy_steer_accel, "enemy steer accel"),
            (self.enemy_detection_radius, "enemy detection radius"),
            (self.enemy_initial_speed_spread, "enemy initial speed spread"),
            (self.particle_spread, "particle spread"),
            (self.token_pickup_radius, "token pickup radius"),
            (self.power_up_pickup_radius, "power-up pickup radius"),
        ];
        let bad = non_negative
            .iter()
            .find(|(value, _)| value.is_nan() || *value < 0.0);
        if let Some((_, name)) = bad {
            return Err(TuningError::Invalid(format!("{name} must be non-negative")));
        }
        Ok(())
    }

    /// Combo window as a whole number of ticks
    #[inline]
    pub fn combo_window_ticks(&self) -> u64 {
        secs_to_ticks(self.combo_window_secs)
    }

    /// Invincibility window as a whole number of ticks
    #[inline]
    pub fn invincibility_ticks(&self) -> u64 {
        secs_to_ticks(self.invincibility_secs)
    }

    /// Clamp a player size into the allowed range
    #[inline]
    pub fn clamp_size(&self, size: f32) -> f32 {
        size.clamp(self.player_min_size, self.player_max_size)
    }
}
