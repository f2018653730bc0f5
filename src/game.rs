//! Frame driver
//!
//! Owns the game state, turns display-refresh callbacks into fixed
//! simulation steps, and takes the two screen commands (start and menu).

use glam::Vec2;

use crate::consts::*;
use crate::input::{PointerReader, PointerWriter, pointer_channel};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::snapshot::FrameView;
use crate::tuning::{Tuning, TuningError};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    pointer: PointerReader,
    accumulator: f64,
    /// Timestamp (ms) of the previous frame callback
    last_time: Option<f64>,
}

impl Game {
    /// Create a game on the menu screen. The returned writer is handed to
    /// whatever listens for pointer movement.
    pub fn new(seed: u64, tuning: Tuning) -> Result<(Self, PointerWriter), TuningError> {
        tuning.validate()?;
        let (writer, reader) =
            pointer_channel(Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0));
        let game = Self {
            state: GameState::with_tuning(seed, tuning),
            pointer: reader,
            accumulator: 0.0,
            last_time: None,
        };
        Ok((game, writer))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for tools and tests that stage a scenario
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Start or replay a round
    pub fn start(&mut self) {
        self.state.start_round();
        self.accumulator = 0.0;
        self.last_time = None;
    }

    /// Leave to the title screen
    pub fn return_to_menu(&mut self) {
        self.state.return_to_menu();
        self.accumulator = 0.0;
        self.last_time = None;
    }

    /// Handle one display-refresh callback at `time_ms` and run however many
    /// fixed steps have accrued
    pub fn frame(&mut self, time_ms: f64) -> Vec<GameEvent> {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0).max(0.0),
            None => SIM_DT,
        };
        self.last_time = Some(time_ms);
        self.update(dt)
    }

    /// Run simulation ticks for `dt` seconds of wall time
    pub fn update(&mut self, dt: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.phase != GamePhase::Playing {
            return events;
        }

        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        // Small slack so a frame of exactly SIM_DT is not lost to rounding
        while self.accumulator + 1e-9 >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput::toward(self.pointer.sample());
            events.extend(tick(&mut self.state, &input));
            self.accumulator -= SIM_DT;
            substeps += 1;

            if self.state.phase != GamePhase::Playing {
                self.accumulator = 0.0;
                break;
            }
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        events
    }

    /// Snapshot for the renderer
    pub fn view(&self) -> FrameView<'_> {
        FrameView::capture(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_waits_on_menu() {
        let (mut game, _writer) = Game::new(1, Tuning::default()).unwrap();
        assert_eq!(game.phase(), GamePhase::Menu);
        assert!(game.frame(16.0).is_empty());
        assert_eq!(game.state().time_ticks, 0);
    }

    #[test]
    fn test_frames_map_to_fixed_steps() {
        let (mut game, _writer) = Game::new(2, Tuning {
            enemy_count: 0,
            ..Tuning::default()
        })
        .unwrap();
        game.start();
        game.update(SIM_DT);
        assert_eq!(game.state().time_ticks, 1);
        game.update(SIM_DT * 2.0);
        assert_eq!(game.state().time_ticks, 3);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let (mut game, _writer) = Game::new(3, Tuning::default()).unwrap();
        game.start();
        game.update(5.0);
        assert!(game.state().time_ticks <= MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_pointer_drives_player() {
        let (mut game, writer) = Game::new(4, Tuning {
            initial_tokens: 0,
            enemy_count: 0,
            ..Tuning::default()
        })
        .unwrap();
        game.start();
        writer.set(Vec2::new(900.0, 300.0));
        game.update(SIM_DT);
        assert!(game.state().player.pos.x > 500.0);

        writer.set(Vec2::new(100.0, 300.0));
        let x = game.state().player.pos.x;
        game.update(SIM_DT);
        assert!(game.state().player.pos.x < x);
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let result = Game::new(6, Tuning {
            enemy_min_size: 50.0,
            enemy_max_size: 50.0,
            ..Tuning::default()
        });
        assert!(matches!(result, Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_menu_round_trip_keeps_high_score() {
        let (mut game, _writer) = Game::new(5, Tuning::default()).unwrap();
        game.start();
        game.state.score = 700.0;
        game.state.end_round();
        game.return_to_menu();
        assert_eq!(game.phase(), GamePhase::Menu);
        game.start();
        assert_eq!(game.state().score, 0.0);
        assert_eq!(game.state().high_score.best(), 700.0);
    }
}
