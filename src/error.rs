//! Game-specific error types.
//!
//! Only startup can fail: reading `assets/settings.toml` and checking that
//! the sprite images exist.  Gameplay failure states (a lost life, game over)
//! are ordinary data transitions on [`crate::stats::GameStats`], not errors.

use std::fmt;

/// Top-level error enum for the game.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The settings file exists but could not be read (permissions, not UTF-8, ...).
    ConfigRead {
        /// Path of the file that failed to read.
        path: String,
        /// I/O diagnostic.
        message: String,
    },

    /// The settings file exists but is not valid TOML for [`crate::config::GameSettings`].
    ConfigParse {
        /// Path of the file that failed to parse.
        path: String,
        /// Parser diagnostic.
        message: String,
    },

    /// A configured value is outside the range the game can run with.
    InvalidSetting {
        /// Settings key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// A sprite image named in the settings is not present under `assets/`.
    MissingAsset {
        /// Path that was checked.
        path: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigRead { path, message } => {
                write!(f, "failed to read {}: {}", path, message)
            }
            GameError::ConfigParse { path, message } => {
                write!(f, "failed to parse {}: {}", path, message)
            }
            GameError::InvalidSetting {
                name,
                value,
                expected,
            } => write!(
                f,
                "setting '{}' = {} is outside accepted range {}",
                name, value, expected
            ),
            GameError::MissingAsset { path } => {
                write!(f, "required asset '{}' was not found", path)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is strictly positive and finite.
pub fn require_positive(name: &'static str, value: f64) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidSetting {
            name,
            value,
            expected: "(0, ∞)",
        })
    }
}

/// Returns an error unless `value` is finite and not negative.
pub fn require_non_negative(name: &'static str, value: f64) -> GameResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidSetting {
            name,
            value,
            expected: "[0, ∞)",
        })
    }
}
