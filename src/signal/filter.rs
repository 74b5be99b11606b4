//! EV threshold filtering

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Result of applying thresholds to a priced prop
#[derive(Debug, Clone)]
pub enum FilterResult {
    /// Prop passed all thresholds
    Pass,
    /// Prop rejected
    Reject(RejectReason),
}

/// Reason a priced prop was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Win probability below the minimum
    WinProbabilityTooLow(Decimal),
    /// EV percentage below the minimum
    EdgeTooSmall(Decimal),
}

/// Minimums a priced prop must clear to be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvThresholds {
    /// Minimum win probability, percent
    pub min_win: Decimal,
    /// Minimum EV percentage
    pub min_ev: Decimal,
}

impl Default for EvThresholds {
    fn default() -> Self {
        Self {
            min_win: dec!(54),
            min_ev: dec!(0),
        }
    }
}

impl EvThresholds {
    /// Check a win probability and EV percentage (both unrounded)
    pub fn apply(&self, win_probability: Decimal, ev_percentage: Decimal) -> FilterResult {
        if win_probability < self.min_win {
            return FilterResult::Reject(RejectReason::WinProbabilityTooLow(win_probability));
        }
        if ev_percentage < self.min_ev {
            return FilterResult::Reject(RejectReason::EdgeTooSmall(ev_percentage));
        }
        FilterResult::Pass
    }
}
