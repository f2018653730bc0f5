//! Token Eater - A single-screen blob arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, rules, effects)
//! - `tuning`: Data-driven game balance
//! - `input`: Pointer target shared between input handlers and the step
//! - `snapshot`: Read-only frame view for renderers
//! - `game`: Frame driver and screen commands

pub mod game;
pub mod high_score;
pub mod input;
pub mod sim;
pub mod snapshot;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::Game;
pub use high_score::{GameOverSummary, HighScore};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation steps per second (one step per 60 Hz display frame)
    pub const TICKS_PER_SECOND: u64 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f64 = 1.0 / TICKS_PER_SECOND as f64;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical canvas dimensions
    pub const CANVAS_WIDTH: f32 = 1000.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Token particle colors, indexed by token value - 1
    pub const TOKEN_COLORS: [u32; 3] = [0xfbbf24, 0xf59e0b, 0xd97706];
    /// Enemy body colors
    pub const ENEMY_COLORS: [u32; 3] = [0xef4444, 0xdc2626, 0xb91c1c];
    /// Power-up particles and label
    pub const POWER_UP_COLOR: u32 = 0x10b981;
    /// Default floating label color (token score)
    pub const SCORE_TEXT_COLOR: u32 = 0xfbbf24;
    /// Label shown when an enemy is eaten
    pub const EAT_TEXT_COLOR: u32 = 0xef4444;
}

/// Wrap a coordinate around a closed interval `[0, extent]`.
///
/// A body may drift `margin` past an edge before it teleports to the same
/// distance past the opposite edge.
#[inline]
pub fn wrap_toroidal(value: f32, extent: f32, margin: f32) -> f32 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}

/// Convert a duration in seconds to a whole number of ticks
#[inline]
pub fn secs_to_ticks(seconds: f64) -> u64 {
    (seconds.max(0.0) * consts::TICKS_PER_SECOND as f64).round() as u64
}

/// Format whole seconds as `m:ss` for the HUD clock
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_toroidal_edges() {
        assert_eq!(wrap_toroidal(-31.0, 1000.0, 30.0), 1030.0);
        assert_eq!(wrap_toroidal(1031.0, 1000.0, 30.0), -30.0);
        // Inside the margin nothing happens
        assert_eq!(wrap_toroidal(-29.0, 1000.0, 30.0), -29.0);
        assert_eq!(wrap_toroidal(1030.0, 1000.0, 30.0), 1030.0);
    }

    #[test]
    fn test_secs_to_ticks_rounds_to_whole_ticks() {
        assert_eq!(secs_to_ticks(1.0), 60);
        assert_eq!(secs_to_ticks(5.0), 300);
        assert_eq!(secs_to_ticks(0.1), 6);
        assert_eq!(secs_to_ticks(-2.0), 0);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(600), "10:00");
    }
}
