//! Scoreboard text derived from [`GameStats`].
//!
//! The `prep_*` methods rebuild one readout each.  They are called only when
//! the underlying stat changes, and the HUD in [`crate::rendering`] copies the
//! strings into its text nodes whenever this resource is marked changed.

use crate::stats::GameStats;
use bevy::prelude::*;

/// Display-ready scoreboard state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: String,
    pub high_score: String,
    pub level: String,
    /// Number of reserve-ship icons to draw.
    pub ships: u32,
}

impl Scoreboard {
    /// Build a scoreboard with every readout prepared.
    pub fn from_stats(stats: &GameStats) -> Self {
        let mut board = Self::default();
        board.prep_all(stats);
        board
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score = format_points(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score = format_points(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level = stats.level.to_string();
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships = stats.ships_left;
    }

    pub fn prep_all(&mut self, stats: &GameStats) {
        self.prep_score(stats);
        self.prep_high_score(stats);
        self.prep_level(stats);
        self.prep_ships(stats);
    }
}

/// Round to the nearest ten and insert thousands separators: `1247` → `"1,250"`.
pub fn format_points(points: u32) -> String {
    let rounded = (u64::from(points) + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
