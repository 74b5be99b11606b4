//! Prop and sportsbook line records
//!
//! These are the values handed to the engine by the fetch layer. They are
//! immutable once deserialized; a record with a non-numeric line fails to
//! deserialize and never reaches analysis.

mod query;
mod slate;

pub use query::{compare_player, PlayerComparison, PropFilter};
pub use slate::{slate_summary, SlateSummary, ALL_SPORTS};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// One platform's quoted line for one player and stat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    /// Platform-scoped identifier, e.g. "pp_12345"
    pub id: String,
    /// Player display name as the platform spells it
    pub player_name: String,
    /// Team label; empty when the platform omits it
    #[serde(default)]
    pub team: String,
    /// Opposing team, when known
    #[serde(default)]
    pub opponent: Option<String>,
    /// Sport code, e.g. "NBA"
    pub sport: String,
    /// Stat label in the platform's own vocabulary
    pub stat_type: String,
    /// Platform identifier, e.g. "prizepicks"
    pub platform: String,
    /// Quoted line
    pub line: Decimal,
    /// Scheduled start
    #[serde(default, deserialize_with = "deserialize_game_time")]
    pub game_time: Option<DateTime<Utc>>,
}

/// Platforms report a missing start time as an empty string
fn deserialize_game_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}

/// One sportsbook's over/under quote for a player market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLine {
    /// Player name as the sportsbook spells it
    pub player: String,
    /// Sportsbook market identifier, e.g. "player_points"
    pub market: String,
    /// Bookmaker key, e.g. "draftkings"
    pub bookmaker: String,
    /// Quoted line
    pub line: Decimal,
    /// American odds for the over
    pub over_odds: i32,
    /// American odds for the under
    pub under_odds: i32,
    /// Whether the bookmaker is a top-priority (sharp) book
    #[serde(default)]
    pub is_sharp: bool,
}
