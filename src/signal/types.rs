//! Signal types

use super::RejectReason;
use crate::odds::{NoVig, OddsError, Side};
use crate::props::{BookLine, Prop};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places kept on reported percentages
pub const REPORT_DP: u32 = 2;

/// Sportsbook quote backing a play, with vig removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharpOdds {
    /// Bookmaker key
    pub bookmaker: String,
    /// Sportsbook line
    pub line: Decimal,
    /// American odds for the over
    pub over_odds: i32,
    /// American odds for the under
    pub under_odds: i32,
    /// No-vig over probability, percent
    pub over_probability: Decimal,
    /// No-vig under probability, percent
    pub under_probability: Decimal,
    /// Whether the bookmaker is a top-priority book
    pub is_sharp: bool,
}

impl SharpOdds {
    /// Attach no-vig probabilities to a sportsbook line
    pub fn new(line: &BookLine, no_vig: &NoVig) -> Self {
        Self {
            bookmaker: line.bookmaker.clone(),
            line: line.line,
            over_odds: line.over_odds,
            under_odds: line.under_odds,
            over_probability: no_vig.over.round_dp(REPORT_DP),
            under_probability: no_vig.under.round_dp(REPORT_DP),
            is_sharp: line.is_sharp,
        }
    }
}

/// A prop whose sharp-implied win probability beats the platform break-even
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvPlay {
    /// The platform prop
    pub prop: Prop,
    /// Sportsbook quote used for pricing
    pub sharp_odds: SharpOdds,
    /// Side to take on the platform
    pub recommended_play: Side,
    /// No-vig probability of the recommended side, percent
    pub win_probability: Decimal,
    /// Win probability minus the platform's default break-even, percent
    pub ev_percentage: Decimal,
    /// Slip types whose break-even the win probability clears
    pub best_for: Vec<String>,
}

/// One platform's side of a middle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiddleLeg {
    /// Platform identifier
    pub name: String,
    /// Platform line
    pub line: Decimal,
    /// Side to take on this platform
    pub recommended: Side,
}

/// A line gap between two platforms where both bets can win together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiddleOpportunity {
    /// Player display name
    pub player_name: String,
    /// Stat label
    pub stat_type: String,
    /// Sport code
    pub sport: String,
    /// Higher-lined platform (take UNDER)
    pub platform_a: MiddleLeg,
    /// Lower-lined platform (take OVER)
    pub platform_b: MiddleLeg,
    /// Absolute difference between the two lines
    pub spread: Decimal,
    /// Outcomes on which both legs win
    pub middle_zone: Vec<Decimal>,
}

/// Why a prop produced no play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Stat label has no sportsbook market
    UnmappedStat,
    /// No sportsbook lines for the market
    NoOddsForMarket,
    /// No sportsbook player name matched
    NoPlayerMatch,
    /// Matched player has no line within tolerance
    NoLineWithinTolerance,
    /// Sportsbook quote could not be priced
    InvalidOdds(OddsError),
    /// Priced, but below the requested thresholds
    Rejected(RejectReason),
}

impl SkipReason {
    /// Stable snake-case label for counters
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::UnmappedStat => "unmapped_stat",
            SkipReason::NoOddsForMarket => "no_odds_for_market",
            SkipReason::NoPlayerMatch => "no_player_match",
            SkipReason::NoLineWithinTolerance => "no_line_within_tolerance",
            SkipReason::InvalidOdds(_) => "invalid_odds",
            SkipReason::Rejected(RejectReason::WinProbabilityTooLow(_)) => "below_min_win",
            SkipReason::Rejected(RejectReason::EdgeTooSmall(_)) => "below_min_ev",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnmappedStat => write!(f, "Stat has no sportsbook market"),
            SkipReason::NoOddsForMarket => write!(f, "No sportsbook lines for market"),
            SkipReason::NoPlayerMatch => write!(f, "No sportsbook player matched"),
            SkipReason::NoLineWithinTolerance => write!(f, "No sportsbook line within tolerance"),
            SkipReason::InvalidOdds(e) => write!(f, "Invalid odds: {e}"),
            SkipReason::Rejected(RejectReason::WinProbabilityTooLow(p)) => {
                write!(f, "Win probability {p} below minimum")
            }
            SkipReason::Rejected(RejectReason::EdgeTooSmall(ev)) => {
                write!(f, "EV {ev} below minimum")
            }
        }
    }
}
