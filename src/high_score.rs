//! High score tracking
//!
//! Held in memory for the lifetime of the process; a restart of the page
//! (or binary) starts from zero again.

use serde::Serialize;

/// Best score seen this process
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HighScore {
    best: f64,
}

impl HighScore {
    pub fn new() -> Self {
        Self { best: 0.0 }
    }

    /// Current best score
    pub fn best(&self) -> f64 {
        self.best
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, score: f64) -> bool {
        score > self.best
    }

    /// Record a finished round. Returns true if it set a new best.
    pub fn record(&mut self, score: f64) -> bool {
        if self.qualifies(score) {
            self.best = score;
            true
        } else {
            false
        }
    }
}

/// What the game-over screen shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameOverSummary {
    pub score: f64,
    pub seconds_alive: u64,
    /// Player diameter at the moment of death
    pub final_size: f32,
    pub new_high_score: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_only_strictly_greater() {
        let mut hs = HighScore::new();
        assert!(!hs.record(0.0));
        assert!(hs.record(250.0));
        assert!(!hs.record(250.0));
        assert!(!hs.record(100.0));
        assert!(hs.record(250.5));
        assert_eq!(hs.best(), 250.5);
    }

    #[test]
    fn test_qualifies() {
        let mut hs = HighScore::new();
        hs.record(1000.0);
        assert!(hs.qualifies(1000.1));
        assert!(!hs.qualifies(999.0));
    }
}
