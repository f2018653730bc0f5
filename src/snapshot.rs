//! Read-only frame view for renderers
//!
//! A renderer gets everything it needs to draw one frame and the HUD from a
//! `FrameView`; nothing flows back into the simulation.

use serde::Serialize;

use crate::consts::*;
use crate::sim::{Enemy, FloatingText, GamePhase, GameState, Particle, Player, PowerUp, Token};
use crate::high_score::GameOverSummary;

/// Borrowed snapshot of one frame
#[derive(Debug, Serialize)]
pub struct FrameView<'a> {
    pub canvas: (f32, f32),
    pub phase: GamePhase,
    pub player: &'a Player,
    pub invincible: bool,
    pub tokens: &'a [Token],
    pub enemies: &'a [Enemy],
    pub power_ups: &'a [PowerUp],
    pub particles: &'a [Particle],
    pub floating_texts: &'a [FloatingText],
    pub hud: Hud,
    pub last_round: Option<&'a GameOverSummary>,
}

/// Numbers shown on the heads-up display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    /// Score rounded down for display
    pub score: u64,
    pub high_score: u64,
    pub combo_multiplier: f64,
    /// Only worth showing once the combo is running
    pub show_combo: bool,
    pub seconds_alive: u64,
    pub clock: String,
}

impl<'a> FrameView<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        let seconds_alive = state.seconds_alive();
        Self {
            canvas: (CANVAS_WIDTH, CANVAS_HEIGHT),
            phase: state.phase,
            player: &state.player,
            invincible: state.is_invincible(),
            tokens: &state.tokens,
            enemies: &state.enemies,
            power_ups: &state.power_ups,
            particles: &state.particles,
            floating_texts: &state.floating_texts,
            hud: Hud {
                score: state.score.floor() as u64,
                high_score: state.high_score.best().floor() as u64,
                combo_multiplier: state.combo.multiplier,
                show_combo: state.combo.multiplier > 1.0,
                seconds_alive,
                clock: crate::format_clock(seconds_alive),
            },
            last_round: state.last_round.as_ref(),
        }
    }

    /// Serialize for a JavaScript renderer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_reflects_state() {
        let mut state = GameState::new(8);
        state.start_round();
        state.score = 1234.9;
        state.time_ticks = 4530;
        state.combo.multiplier = 2.0;

        let view = FrameView::capture(&state);
        assert_eq!(view.phase, GamePhase::Playing);
        assert_eq!(view.tokens.len(), 40);
        assert_eq!(view.enemies.len(), 5);
        assert_eq!(view.hud.score, 1234);
        assert_eq!(view.hud.clock, "1:15");
        assert!(view.hud.show_combo);
        assert!(!view.invincible);
        assert_eq!(view.canvas, (1000.0, 600.0));
    }

    #[test]
    fn test_json_shape() {
        let mut state = GameState::new(9);
        state.start_round();
        let json = FrameView::capture(&state).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Playing");
        assert_eq!(value["tokens"].as_array().unwrap().len(), 40);
        assert_eq!(value["player"]["size"], 30.0);
        assert!(value["last_round"].is_null());
    }
}
