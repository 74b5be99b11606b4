//! Sportsbook odds math
//!
//! Converts American odds into implied probabilities and strips the
//! bookmaker's margin to recover true (no-vig) probabilities.

mod vig;

pub use vig::{implied_probability, remove_vig, NoVig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side of an over/under line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Stat finishes above the line
    Over,
    /// Stat finishes below the line
    Under,
}

impl Side {
    /// Upper-case label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Over => "OVER",
            Side::Under => "UNDER",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Odds validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OddsError {
    /// American odds are never zero
    #[error("American odds of 0 are not a valid price")]
    ZeroOdds,
}
