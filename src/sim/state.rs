//! Game state and core simulation types
//!
//! Everything one round of play touches lives on `GameState`; only the
//! high score outlives a restart.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::spawn;
use crate::consts::*;
use crate::high_score::{GameOverSummary, HighScore};
use crate::tuning::Tuning;

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, nothing simulates
    Menu,
    /// Active gameplay
    Playing,
    /// Round ended; can replay or return to menu
    GameOver,
}

/// Something notable that happened during a tick (for HUD and sound)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    TokenCollected { value: u8, points: f64, combo: f64 },
    PowerUpCollected { kind: PowerUpKind },
    EnemyEaten { enemy_id: u32 },
    InvincibilityExpired,
    GameOver(GameOverSummary),
}

/// The player's blob
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Diameter, clamped to the tuning size bounds
    pub size: f32,
    /// Tick on which invincibility ends
    pub invincible_until: Option<u64>,
}

impl Player {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            size,
            invincible_until: None,
        }
    }

    /// Whether the invincibility window is open on tick `now`
    #[inline]
    pub fn is_invincible(&self, now: u64) -> bool {
        self.invincible_until.is_some_and(|until| until > now)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// A collectible token worth 1-3
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub id: u32,
    pub pos: Vec2,
    pub value: u8,
    pub collected: bool,
}

/// An enemy blob
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: u32,
}

impl Enemy {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerUpKind {
    Invincible,
}

/// A power-up waiting on the field
#[derive(Debug, Clone, Serialize)]
pub struct PowerUp {
    pub id: u32,
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: u32,
    /// 0-1, decreases every tick
    pub life: f32,
    pub size: f32,
}

/// A label that drifts upward and fades
#[derive(Debug, Clone, Serialize)]
pub struct FloatingText {
    pub id: u32,
    pub pos: Vec2,
    pub text: String,
    pub color: u32,
    pub life: f32,
}

/// Score-scaling factor driven by pickup cadence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Combo {
    pub multiplier: f64,
    /// Tick of the previous token pickup
    pub last_pickup: Option<u64>,
}

impl Default for Combo {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            last_pickup: None,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Score for the current round (fractional with combos)
    pub score: f64,
    pub high_score: HighScore,
    pub combo: Combo,
    /// Ticks since the round started; every timer in the round counts these
    pub time_ticks: u64,
    pub player: Player,
    pub tokens: Vec<Token>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub floating_texts: Vec<FloatingText>,
    /// Summary of the last finished round
    pub last_round: Option<GameOverSummary>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a game sitting on the menu screen
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a game with custom balance. The tuning is trusted as given;
    /// run it through `Tuning::validate` first if it came from outside.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(tuning.player_start_size),
            tuning,
            phase: GamePhase::Menu,
            score: 0.0,
            high_score: HighScore::new(),
            combo: Combo::default(),
            time_ticks: 0,
            tokens: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            floating_texts: Vec::new(),
            last_round: None,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start (or restart) a round: reset every collection and counter,
    /// keep the high score.
    pub fn start_round(&mut self) {
        self.player = Player::new(self.tuning.player_start_size);
        self.score = 0.0;
        self.combo = Combo::default();
        self.time_ticks = 0;
        self.tokens.clear();
        self.enemies.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.floating_texts.clear();
        self.last_round = None;

        for _ in 0..self.tuning.initial_tokens {
            spawn::spawn_token(self);
        }
        for _ in 0..self.tuning.enemy_count {
            spawn::spawn_enemy(self);
        }

        self.phase = GamePhase::Playing;
        log::info!(
            "Round started: {} tokens, {} enemies (high score {})",
            self.tokens.len(),
            self.enemies.len(),
            self.high_score.best()
        );
    }

    /// Go back to the title screen. The high score survives.
    pub fn return_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
    }

    /// End the round: record the high score and enter `GameOver`
    pub fn end_round(&mut self) -> GameOverSummary {
        let new_high_score = self.high_score.record(self.score);
        let summary = GameOverSummary {
            score: self.score,
            seconds_alive: self.seconds_alive(),
            final_size: self.player.size,
            new_high_score,
        };
        if new_high_score {
            log::info!("New high score: {}", self.score.floor());
        }
        log::info!(
            "Game over: score {} after {}s",
            self.score.floor(),
            summary.seconds_alive
        );
        self.phase = GamePhase::GameOver;
        self.last_round = Some(summary.clone());
        summary
    }

    /// Sim seconds since the round started
    pub fn elapsed(&self) -> f64 {
        self.time_ticks as f64 * SIM_DT
    }

    /// Whole seconds survived this round (HUD clock)
    pub fn seconds_alive(&self) -> u64 {
        self.time_ticks / TICKS_PER_SECOND
    }

    /// Whether the player is invincible right now
    pub fn is_invincible(&self) -> bool {
        self.player.is_invincible(self.time_ticks)
    }
}
