//! Game statistics: score, high score, level, remaining ships, active flag.

use bevy::prelude::*;

/// Outcome of [`GameStats::register_ship_hit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipHitOutcome {
    /// A reserve ship was used; play continues.
    LifeLost,
    /// No reserve ships remained; the game is now inactive.
    GameOver,
}

/// Per-process gameplay statistics.
///
/// - `score` only grows during a game and is zeroed by [`Self::reset_stats`].
/// - `high_score` is never lowered; it survives resets for the life of the process.
/// - `ships_left` counts *reserve* ships and never goes below zero.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub ships_left: u32,
    /// `false` on launch so the Play button is shown first.
    pub game_active: bool,
    ship_limit: u32,
}

impl GameStats {
    pub fn new(ship_limit: u32) -> Self {
        Self {
            score: 0,
            high_score: 0,
            level: 1,
            ships_left: ship_limit,
            game_active: false,
            ship_limit,
        }
    }

    /// Start-of-game values for everything except `high_score` and `game_active`.
    pub fn reset_stats(&mut self) {
        self.ships_left = self.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Add `points` to the score.
    #[inline]
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Raise the high score to the current score if it was beaten.
    /// Returns `true` when the high score changed.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// Spend a reserve ship, or end the game if none are left.
    pub fn register_ship_hit(&mut self) -> ShipHitOutcome {
        if self.ships_left > 0 {
            self.ships_left -= 1;
            ShipHitOutcome::LifeLost
        } else {
            self.game_active = false;
            ShipHitOutcome::GameOver
        }
    }

    pub fn ship_limit(&self) -> u32 {
        self.ship_limit
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new(crate::constants::SHIP_LIMIT)
    }
}
